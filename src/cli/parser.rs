use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pontolog
#[derive(Parser)]
#[command(
    name = "pontolog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: punch in/out, worked hours minus lunch, monthly totals and pay",
    long_about = None
)]
pub struct Cli {
    /// Override record store path (useful for tests or a custom file)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty record store
    Init,

    /// Register a clock event: clock-in, or clock-out if today's record is open
    Punch {
        #[arg(
            long = "at",
            value_name = "TIMESTAMP",
            help = "Event time (YYYY-MM-DD HH:MM[:SS]) instead of now"
        )]
        at: Option<String>,
    },

    /// List the months present in the record store
    Months,

    /// Show the records of a month with total hours and pay
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show (default: latest)")]
        month: Option<String>,
    },

    /// Show only total hours and pay of a month
    Totals {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to sum (default: latest)")]
        month: Option<String>,
    },

    /// Export the records of a month
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, short, value_name = "YYYY-MM", help = "Month to export (default: latest)")]
        month: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: horas_trabalhadas_<YYYY-MM>.<ext> in export_dir)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log (default)")]
        print: bool,
    },

    /// Create a backup copy of the record store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
