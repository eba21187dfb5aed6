use std::collections::BTreeSet;
use toolmatrix_core::{
    build_matrix, filter_tools, matches, normalize_selection, CatalogDocument, CategoryRestriction,
    CellContent, EmptySelectionPolicy, FilterCategories, FilterSelection, FilterTaxonomy,
    MatrixConfig, RawSelection, Tool, ToolRef,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn example_document() -> CatalogDocument {
    CatalogDocument {
        goals: strings(&["Blogposts schreiben", "Daten analysieren"]),
        filters: vec![("Lizenz", strings(&["Kostenlos", "Freemium"]))]
            .into_iter()
            .collect(),
        tools: vec![Tool::new("ChatGPT")
            .with_link("https://chat.openai.com")
            .with_tooltip("Textgenerierung")
            .with_values("Lizenz", ["Kostenlos", "Freemium"])
            .with_goals(["Blogposts schreiben"])],
        scenarios: Vec::new(),
    }
}

fn multi_category_document() -> CatalogDocument {
    let filters: FilterCategories = vec![
        ("Lizenz", strings(&["Kostenlos", "Freemium", "Abonnement"])),
        ("Plattform", strings(&["Web-basiert", "Desktop"])),
    ]
    .into_iter()
    .collect();
    CatalogDocument {
        goals: strings(&["Texte schreiben", "Daten analysieren", "Bilder bearbeiten"]),
        filters,
        tools: vec![
            Tool::new("ChatGPT")
                .with_values("Lizenz", ["Kostenlos", "Freemium"])
                .with_values("Plattform", ["Web-basiert"])
                .with_goals(["Texte schreiben", "Daten analysieren"]),
            Tool::new("Tableau")
                .with_values("Lizenz", ["Abonnement"])
                .with_values("Plattform", ["Desktop", "Web-basiert"])
                .with_goals(["Daten analysieren"]),
            Tool::new("Claude")
                .with_values("Lizenz", ["Freemium"])
                .with_values("Plattform", ["Web-basiert"])
                .with_goals(["Texte schreiben", "Daten analysieren"]),
            Tool::new("GIMP").with_goals(["Bilder bearbeiten"]),
        ],
        scenarios: Vec::new(),
    }
}

fn names(cell: Option<&CellContent>) -> Vec<String> {
    cell.expect("cell should exist")
        .tools()
        .iter()
        .map(|tool| tool.display_name.clone())
        .collect()
}

#[test]
fn example_matrix_places_chatgpt_in_blogpost_column() {
    let document = example_document();
    let selection = FilterSelection::unrestricted().restrict("Lizenz", ["Freemium"]);

    let matrix = build_matrix(&document, &selection, &MatrixConfig::default());

    assert_eq!(matrix.row_labels, vec!["Lizenz: Freemium"]);
    assert_eq!(
        matrix.cell("Lizenz: Freemium", "Blogposts schreiben"),
        Some(&CellContent::Tools(vec![ToolRef {
            display_name: "ChatGPT".to_string(),
            link: "https://chat.openai.com".to_string(),
            tooltip: "Textgenerierung".to_string(),
        }]))
    );
    assert_eq!(
        matrix.cell("Lizenz: Freemium", "Daten analysieren"),
        Some(&CellContent::Empty("Keine Tools".to_string()))
    );
}

#[test]
fn matches_is_and_across_categories_or_within() {
    let document = multi_category_document();
    let lizenz_options = [
        vec![],
        vec!["Kostenlos"],
        vec!["Freemium"],
        vec!["Abonnement"],
        vec!["Kostenlos", "Abonnement"],
    ];
    let plattform_options = [None, Some(vec!["Desktop"]), Some(vec!["Web-basiert"])];

    for lizenz in &lizenz_options {
        for plattform in &plattform_options {
            let mut selection = FilterSelection::unrestricted().restrict("Lizenz", lizenz.clone());
            if let Some(plattform) = plattform {
                selection = selection.restrict("Plattform", plattform.clone());
            }

            for tool in &document.tools {
                let expected = selection.iter().all(|(category, restriction)| match restriction {
                    CategoryRestriction::Unrestricted => true,
                    CategoryRestriction::RestrictedTo(allowed) => {
                        let held: BTreeSet<&String> = tool.values_for(category).iter().collect();
                        allowed.iter().any(|value| held.contains(&value))
                    }
                });
                assert_eq!(
                    matches(tool, &selection),
                    expected,
                    "tool {} with lizenz={lizenz:?} plattform={plattform:?}",
                    tool.name
                );
            }
        }
    }
}

#[test]
fn columns_follow_goal_order_and_rows_follow_filter_order() {
    let document = multi_category_document();
    let selection = FilterSelection::unrestricted()
        .restrict("Lizenz", ["Abonnement", "Kostenlos"])
        .allow_all("Plattform");

    let matrix = build_matrix(&document, &selection, &MatrixConfig::default());

    assert_eq!(matrix.column_labels, document.goals);
    assert_eq!(
        matrix.row_labels,
        vec![
            "Lizenz: Kostenlos",
            "Lizenz: Abonnement",
            "Plattform: Web-basiert",
            "Plattform: Desktop",
        ]
    );
    assert_eq!(matrix.cells.len(), matrix.row_labels.len());
    assert!(matrix.cells.iter().all(|row| row.len() == document.goals.len()));
}

#[test]
fn cell_lists_keep_catalog_order_and_respect_full_selection() {
    let document = multi_category_document();
    let selection = FilterSelection::unrestricted().restrict("Plattform", ["Web-basiert"]);

    let matrix = build_matrix(&document, &selection, &MatrixConfig::default());

    assert_eq!(
        names(matrix.cell("Plattform: Web-basiert", "Daten analysieren")),
        vec!["ChatGPT", "Tableau", "Claude"]
    );
    assert!(!matrix.has_row("Plattform: Desktop"));
    // Lizenz is unselected, so its rows stay and show only platform matches.
    assert_eq!(
        names(matrix.cell("Lizenz: Freemium", "Texte schreiben")),
        vec!["ChatGPT", "Claude"]
    );
    assert!(matrix
        .cell("Lizenz: Abonnement", "Bilder bearbeiten")
        .unwrap()
        .is_empty());
}

#[test]
fn building_twice_yields_identical_matrix() {
    let document = multi_category_document();
    let selection = FilterSelection::unrestricted().restrict("Lizenz", ["Freemium"]);
    let config = MatrixConfig::default();

    assert_eq!(
        build_matrix(&document, &selection, &config),
        build_matrix(&document, &selection, &config)
    );
}

#[test]
fn none_match_policy_excludes_every_tool_for_empty_selection() {
    let document = multi_category_document();
    let config = MatrixConfig::default()
        .with_category_policy("Lizenz", EmptySelectionPolicy::NoneMatch);
    let taxonomy = FilterTaxonomy::from_document(&document, &config);
    let mut raw = RawSelection::new();
    raw.set_values("Lizenz", Vec::<String>::new())
        .set_all("Plattform");

    let selection = normalize_selection(&raw, &taxonomy).unwrap();
    assert!(filter_tools(&document.tools, &selection).is_empty());

    let matrix = build_matrix(&document, &selection, &config);
    assert!(!matrix.row_labels.iter().any(|label| label.starts_with("Lizenz")));
    assert!(matrix.cells.iter().flatten().all(CellContent::is_empty));
}

#[test]
fn all_match_policy_ignores_empty_selection() {
    let document = multi_category_document();
    let config = MatrixConfig::default()
        .with_category_policy("Lizenz", EmptySelectionPolicy::AllMatch);
    let taxonomy = FilterTaxonomy::from_document(&document, &config);
    let mut raw = RawSelection::new();
    raw.set_values("Lizenz", Vec::<String>::new());

    let selection = normalize_selection(&raw, &taxonomy).unwrap();
    assert_eq!(filter_tools(&document.tools, &selection).len(), document.tools.len());
    let matrix = build_matrix(&document, &selection, &config);
    assert!(matrix.has_row("Lizenz: Kostenlos"));
}

#[test]
fn preselected_full_lists_behave_like_no_filter_for_tools_with_values() {
    let document = multi_category_document();
    let config = MatrixConfig::default();
    let taxonomy = FilterTaxonomy::from_document(&document, &config);
    let raw = RawSelection::everything_selected(&document);

    let selection = normalize_selection(&raw, &taxonomy).unwrap();
    let matched: Vec<&str> = filter_tools(&document.tools, &selection)
        .into_iter()
        .map(|tool| tool.name.as_str())
        .collect();
    // GIMP carries no filter values, so a restricted category still drops it.
    assert_eq!(matched, vec!["ChatGPT", "Tableau", "Claude"]);
}

#[test]
fn unknown_values_on_tools_never_match() {
    let mut document = multi_category_document();
    document.tools.push(
        Tool::new("Obscure")
            .with_values("Lizenz", ["Open Source"])
            .with_goals(["Texte schreiben"]),
    );
    let selection = FilterSelection::unrestricted()
        .restrict("Lizenz", ["Kostenlos", "Freemium", "Abonnement"]);

    let matrix = build_matrix(&document, &selection, &MatrixConfig::default());
    assert!(matrix
        .cells
        .iter()
        .flatten()
        .flat_map(CellContent::tools)
        .all(|tool| tool.display_name != "Obscure"));
}
