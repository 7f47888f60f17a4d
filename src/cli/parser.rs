use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for projmgr
#[derive(Parser)]
#[command(
    name = "projmgr",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track multi-phase hardware design projects: list, filter, edit phases and export to XLSX",
    long_about = None
)]
pub struct Cli {
    /// Use the local SQLite store at this path (overrides the config)
    #[arg(global = true, long = "db", conflicts_with = "api")]
    pub db: Option<String>,

    /// Use the REST API at this base URL (e.g. http://host:5005/api)
    #[arg(global = true, long = "api")]
    pub api: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter options shared by `list`, `export` and `watch`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text matched against project name and sale code
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Exact owner
    #[arg(long, short = 'o')]
    pub owner: Option<String>,

    /// Level: A, B, C, D, E or S
    #[arg(long, short = 'l')]
    pub level: Option<String>,

    /// Keep projects having at least one phase with this status (O, S, F, FD)
    #[arg(long)]
    pub status: Option<String>,
}

/// Field options shared by `add` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project name
    #[arg(long)]
    pub name: Option<String>,

    /// Sale code
    #[arg(long = "code-sale")]
    pub code_sale: Option<String>,

    /// Person in charge
    #[arg(long)]
    pub owner: Option<String>,

    /// Level: A, B, C, D, E or S (empty string clears it)
    #[arg(long)]
    pub level: Option<String>,

    /// Free-text current status
    #[arg(long = "current-status")]
    pub current_status: Option<String>,

    /// Phase edit "<phase>:<field>=<value>", applied in the given order.
    ///
    /// <phase> is a phase name (e.g. "Layout") or its 1-based position;
    /// <field> is one of: status, plan (dueDate), actual (actualDate), progress.
    ///
    /// Status F/FD requires plan and actual to be set first, e.g.:
    ///   --phase "Layout:plan=12/05" --phase "Layout:actual=14/05" --phase "Layout:status=FD"
    #[arg(long = "phase", value_name = "PHASE:FIELD=VALUE")]
    pub phases: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the local database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print")]
        print_config: bool,

        /// Edit the configuration file (default editor: $EDITOR, or nano/notepad)
        #[arg(long = "edit")]
        edit_config: bool,

        /// Editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// List projects (filtered), followed by the statistics line
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Also print the distinct owners
        #[arg(long)]
        owners: bool,
    },

    /// Show total, completed and delayed project counts
    Stats,

    /// Show every phase of one project
    Show {
        /// Project id
        id: i64,
    },

    /// Create a project
    Add {
        #[command(flatten)]
        fields: ProjectArgs,
    },

    /// Edit a project (only the given fields/phases change)
    Edit {
        /// Project id
        id: i64,

        #[command(flatten)]
        fields: ProjectArgs,
    },

    /// Delete a project
    Del {
        /// Project id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export the filtered project list
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file (default: KHDACD1_yyMMdd.xlsx in the configured export dir)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Refresh the filtered list periodically
    Watch {
        #[command(flatten)]
        filters: FilterArgs,

        /// Stop after this many refreshes (default: run until interrupted)
        #[arg(long)]
        count: Option<u64>,

        /// Refresh period in milliseconds (default from config)
        #[arg(long = "interval")]
        interval_ms: Option<u64>,
    },

    /// Print the internal log of the local database
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print")]
        print: bool,
    },
}
