//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toolmatrix_core::CATALOG_PATH_ENV;

/// Filterable matrix of tools against goals.
#[derive(Parser)]
#[command(name = "toolmatrix", version)]
pub struct Cli {
    /// Catalog store: `.json` file, or `.db`/`.sqlite`/`.sqlite3` for SQLite
    #[arg(long, global = true, env = CATALOG_PATH_ENV, default_value = "catalog.json")]
    pub catalog: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the matrix for a filter selection
    Matrix(MatrixArgs),
    /// List tools with their links and filter values
    Tools,
    /// Report references to undeclared goals, categories or values
    Validate(TaxonomyArgs),
    /// Show the scenario text for one goal/tool pair
    Detail { goal: String, tool: String },
    /// Append a tool
    AddTool(ToolArgs),
    /// Change fields of an existing tool and save
    UpdateTool(UpdateToolArgs),
    /// Remove the first tool with this name
    DeleteTool { name: String },
    /// Append an allowed value to a filter category
    AddFilterValue { category: String, value: String },
    /// Append a goal column
    AddGoal { goal: String },
    /// Set the scenario text for one goal/tool pair
    SetScenario {
        goal: String,
        tool: String,
        text: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// Rows are `category: value`, columns are goals
    Attributes,
    /// Rows are goals, columns are tools
    Goals,
    /// Rows are tools, columns are goals
    Tools,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptySelectionArg {
    /// An empty choice matches no tool
    None,
    /// An empty choice imposes no constraint
    All,
}

#[derive(Args)]
pub struct TaxonomyArgs {
    /// Category whose tools may carry only one value (repeatable)
    #[arg(long = "single", value_name = "CATEGORY")]
    pub single_valued: Vec<String>,
}

#[derive(Args)]
pub struct MatrixArgs {
    /// Restrict a category to a value (repeatable)
    #[arg(long = "select", value_name = "CATEGORY=VALUE")]
    pub select: Vec<String>,

    /// Leave a category unrestricted (repeatable)
    #[arg(long = "all", value_name = "CATEGORY")]
    pub all: Vec<String>,

    /// Choose no value for a category (repeatable)
    #[arg(long = "empty", value_name = "CATEGORY")]
    pub empty: Vec<String>,

    #[arg(long, value_enum, default_value_t = AxisArg::Attributes)]
    pub axis: AxisArg,

    /// Meaning of `--empty` categories
    #[arg(long, value_enum, default_value_t = EmptySelectionArg::None)]
    pub empty_selection: EmptySelectionArg,

    /// Text for cells with nothing to show
    #[arg(long)]
    pub placeholder: Option<String>,

    #[command(flatten)]
    pub taxonomy: TaxonomyArgs,

    /// Print the matrix as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ToolArgs {
    pub name: String,

    #[arg(long, default_value = "")]
    pub link: String,

    #[arg(long, default_value = "")]
    pub tooltip: String,

    /// Filter value held by the tool (repeatable)
    #[arg(long = "value", value_name = "CATEGORY=VALUE")]
    pub values: Vec<String>,

    /// Goal addressed by the tool (repeatable)
    #[arg(long = "goal")]
    pub goals: Vec<String>,
}

#[derive(Args)]
pub struct UpdateToolArgs {
    pub name: String,

    #[arg(long)]
    pub link: Option<String>,

    #[arg(long)]
    pub tooltip: Option<String>,

    /// Replaces all filter values when given (repeatable)
    #[arg(long = "value", value_name = "CATEGORY=VALUE")]
    pub values: Vec<String>,

    /// Replaces all goals when given (repeatable)
    #[arg(long = "goal")]
    pub goals: Vec<String>,
}
