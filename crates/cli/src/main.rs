use anyhow::Result;
use clap::{Parser, Subcommand};
use internals_core::services::RowFormat;
use internals_export::commands::{export_command, summary_command, ExportRequest};
use internals_export::init_logging;

/// Runtime internals exporter CLI.
///
/// This CLI is a thin wrapper around `internals-core` (exposed in code as
/// `internals_core`). Set `INTERNALS_LOG` (e.g. `debug`) to log to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "internals-export",
    version,
    about = "Export runtime symbol metadata as CSV rows",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export a runtime snapshot to a CSV file.
    ///
    /// Rows are grouped as functions, classes (each followed by its methods and
    /// members), variables, then constants. No header row is written.
    Export {
        /// Snapshot file (JSON, or YAML with a .yaml/.yml extension).
        #[arg(long)]
        snapshot: String,

        /// Destination CSV path. Defaults to `php.internals.csv` unless the config sets one.
        #[arg(long)]
        output: Option<String>,

        /// Row format: `full` or `legacy`.
        #[arg(long)]
        format: Option<RowFormat>,

        /// Optional export config file (JSON or YAML).
        #[arg(long)]
        config: Option<String>,

        /// Write the destination in place instead of publishing it atomically.
        #[arg(long, default_value_t = false)]
        no_atomic: bool,

        /// Emit a JSON report instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show symbol counts of a snapshot without exporting it.
    Summary {
        /// Snapshot file (JSON, or YAML with a .yaml/.yml extension).
        #[arg(long)]
        snapshot: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        None => {
            println!("internals-export v{}", internals_core::version());
            println!("Run `internals-export --help` for usage.");
        }
        Some(Command::Export { snapshot, output, format, config, no_atomic, json }) => {
            let request = ExportRequest { snapshot, output, format, config, no_atomic, json };
            export_command(&request)?;
        }
        Some(Command::Summary { snapshot, json }) => {
            summary_command(&snapshot, json)?;
        }
    }

    Ok(())
}
