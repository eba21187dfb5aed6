//! `toolmatrix` command-line front end.
//!
//! # Responsibility
//! - Parse flags into core selections/configs and run one session per call.
//! - Render engine output as plain text or JSON; no business rules here.

mod cli;
mod render;

use clap::Parser;
use cli::{AxisArg, Cli, Commands, EmptySelectionArg, MatrixArgs, TaxonomyArgs, ToolArgs, UpdateToolArgs};
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use toolmatrix_core::{
    default_log_level, init_logging, CatalogConfig, CatalogStore, EmptySelectionPolicy,
    GoalAxisOrientation, JsonFileStore, MatrixAxis, MatrixConfig, MatrixSession, RawSelection,
    ScenarioKey, SqliteCatalogStore, StoreError, Tool, ToolUpdate,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let store = open_store(&cli.catalog)?;
    let mut session = MatrixSession::open(store, &CatalogConfig::default())?;
    if session.seeded() {
        println!("created sample catalog at {}", cli.catalog.display());
    }
    for category in session.backfilled_categories() {
        println!("added missing filter category `{category}`");
    }

    match cli.command {
        Commands::Matrix(args) => {
            let config = matrix_config(&args);
            let raw = raw_selection(&args)?;
            let matrix = session.render(&raw, &config)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&matrix)?);
            } else {
                print!("{}", render::render_matrix(&matrix));
            }
        }
        Commands::Tools => print!("{}", render::render_tools(&session.document().tools)),
        Commands::Validate(args) => {
            let warnings = session.validate(&taxonomy_config(MatrixConfig::default(), &args));
            if warnings.is_empty() {
                println!("catalog is consistent");
            }
            for warning in &warnings {
                println!("warning: {warning}");
            }
        }
        Commands::Detail { goal, tool } => match session.detail(&goal, &tool) {
            Some(detail) => {
                println!("Szenario: {} + {}", detail.goal, detail.tool);
                println!("{}", detail.text);
                if let Some(link) = detail.link {
                    println!("Mehr erfahren: {link}");
                }
            }
            None => println!("no scenario for `{goal}` and `{tool}`"),
        },
        Commands::AddTool(args) => {
            let tool = tool_from_args(args)?;
            session.apply(|editor, document| editor.add_tool(document, tool))?;
            println!("tool added");
        }
        Commands::UpdateTool(args) => {
            let name = args.name.clone();
            let update = update_from_args(args)?;
            session.apply(|editor, document| {
                editor.update_tool(document, &name, update)?;
                editor.commit(document)
            })?;
            println!("tool `{name}` updated");
        }
        Commands::DeleteTool { name } => {
            session.apply(|editor, document| editor.delete_tool(document, &name))?;
            println!("tool `{name}` deleted");
        }
        Commands::AddFilterValue { category, value } => {
            let added = session
                .apply(|editor, document| editor.add_filter_value(document, &category, &value))?;
            if added {
                println!("value added to `{category}`");
            } else {
                println!("`{category}` already contains that value");
            }
        }
        Commands::AddGoal { goal } => {
            let added = session.apply(|editor, document| editor.add_goal(document, &goal))?;
            if !added {
                println!("goal `{goal}` already exists");
            }
        }
        Commands::SetScenario { goal, tool, text } => {
            let key = ScenarioKey::new(goal, tool);
            session.apply(|editor, document| editor.set_scenario(document, &key, &text))?;
            println!("scenario saved");
        }
    }

    info!("event=cli_command module=cli status=ok");
    Ok(())
}

fn open_store(path: &Path) -> Result<Box<dyn CatalogStore>, StoreError> {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("db" | "sqlite" | "sqlite3") => Ok(Box::new(SqliteCatalogStore::open(path)?)),
        _ => Ok(Box::new(JsonFileStore::new(path))),
    }
}

fn matrix_config(args: &MatrixArgs) -> MatrixConfig {
    let axis = match args.axis {
        AxisArg::Attributes => MatrixAxis::FilterAttributes,
        AxisArg::Goals => MatrixAxis::Goals(GoalAxisOrientation::GoalRows),
        AxisArg::Tools => MatrixAxis::Goals(GoalAxisOrientation::ToolRows),
    };
    let policy = match args.empty_selection {
        EmptySelectionArg::None => EmptySelectionPolicy::NoneMatch,
        EmptySelectionArg::All => EmptySelectionPolicy::AllMatch,
    };

    let mut config = MatrixConfig::default()
        .with_axis(axis)
        .with_empty_selection(policy);
    if let Some(placeholder) = args.placeholder.as_deref() {
        config = config.with_placeholder(placeholder);
    }
    taxonomy_config(config, &args.taxonomy)
}

fn taxonomy_config(config: MatrixConfig, args: &TaxonomyArgs) -> MatrixConfig {
    args.single_valued
        .iter()
        .fold(config, |config, category| config.with_single_valued(category.as_str()))
}

fn raw_selection(args: &MatrixArgs) -> CliResult<RawSelection> {
    let mut raw = RawSelection::new();
    for category in &args.empty {
        raw.set_values(category.as_str(), Vec::<String>::new());
    }
    for category in &args.all {
        raw.set_all(category.as_str());
    }
    for pair in &args.select {
        let (category, value) = split_pair(pair)?;
        raw.add_value(category, value);
    }
    Ok(raw)
}

fn tool_from_args(args: ToolArgs) -> CliResult<Tool> {
    let mut tool = Tool::new(args.name)
        .with_link(args.link)
        .with_tooltip(args.tooltip)
        .with_goals(args.goals);
    tool.filter_values = values_by_category(&args.values)?;
    Ok(tool)
}

fn update_from_args(args: UpdateToolArgs) -> CliResult<ToolUpdate> {
    let filter_values = if args.values.is_empty() {
        None
    } else {
        Some(values_by_category(&args.values)?)
    };
    Ok(ToolUpdate {
        link: args.link,
        tooltip: args.tooltip,
        filter_values,
        goals: (!args.goals.is_empty()).then_some(args.goals),
    })
}

fn values_by_category(pairs: &[String]) -> CliResult<BTreeMap<String, Vec<String>>> {
    let mut values: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for pair in pairs {
        let (category, value) = split_pair(pair)?;
        let entry = values.entry(category.to_string()).or_default();
        if !entry.iter().any(|current| current == value) {
            entry.push(value.to_string());
        }
    }
    Ok(values)
}

fn split_pair(pair: &str) -> CliResult<(&str, &str)> {
    let (category, value) = pair
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=VALUE, got `{pair}`"))?;
    let (category, value) = (category.trim(), value.trim());
    if category.is_empty() || value.is_empty() {
        return Err(format!("expected CATEGORY=VALUE, got `{pair}`").into());
    }
    Ok((category, value))
}
