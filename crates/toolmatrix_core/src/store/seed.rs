//! Built-in sample catalog used when no store exists yet.

use crate::model::catalog::CatalogDocument;
use crate::model::filters::FilterCategories;
use crate::model::scenario::Scenario;
use crate::model::tool::Tool;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Returns the default seed document.
pub fn default_document() -> CatalogDocument {
    let filters: FilterCategories = vec![
        (
            "Funktionalität",
            strings(&["Textgenerierung", "Datenanalyse", "Bildbearbeitung"]),
        ),
        ("Lizenz", strings(&["Kostenlos", "Freemium", "Abonnement"])),
        ("Zielgruppe", strings(&["Freelancer", "Teams", "Unternehmen"])),
        ("Plattform", strings(&["Web-basiert", "Desktop", "Mobile"])),
    ]
    .into_iter()
    .collect();

    let tools = vec![
        Tool::new("ChatGPT")
            .with_link("https://chat.openai.com")
            .with_tooltip("Dialogbasierte Textgenerierung")
            .with_values("Funktionalität", ["Textgenerierung"])
            .with_values("Lizenz", ["Kostenlos", "Freemium"])
            .with_values("Zielgruppe", ["Freelancer", "Teams"])
            .with_values("Plattform", ["Web-basiert", "Mobile"])
            .with_goals(["Texte schreiben"]),
        Tool::new("DataRobot")
            .with_link("https://www.datarobot.com")
            .with_tooltip("Automatisierte Datenanalyse und Modellbildung")
            .with_values("Funktionalität", ["Datenanalyse"])
            .with_values("Lizenz", ["Abonnement"])
            .with_values("Zielgruppe", ["Teams", "Unternehmen"])
            .with_values("Plattform", ["Web-basiert"])
            .with_goals(["Daten analysieren"]),
        Tool::new("DALL-E")
            .with_link("https://openai.com/dall-e")
            .with_tooltip("Bilder aus Textbeschreibungen erzeugen")
            .with_values("Funktionalität", ["Bildbearbeitung"])
            .with_values("Lizenz", ["Freemium"])
            .with_values("Zielgruppe", ["Freelancer"])
            .with_values("Plattform", ["Web-basiert"])
            .with_goals(["Bilder bearbeiten"]),
    ];

    CatalogDocument {
        goals: strings(&["Texte schreiben", "Daten analysieren", "Bilder bearbeiten"]),
        filters,
        tools,
        scenarios: vec![
            Scenario::new(
                "Texte schreiben",
                "ChatGPT",
                "Nutze ChatGPT, um Blogposts schnell zu erstellen.",
            ),
            Scenario::new(
                "Daten analysieren",
                "DataRobot",
                "Automatisiere deine Datenanalysen mit DataRobot.",
            ),
            Scenario::new(
                "Bilder bearbeiten",
                "DALL-E",
                "Erstelle kreative Bildbearbeitungen mit DALL-E.",
            ),
        ],
    }
}
