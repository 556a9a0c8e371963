use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "tasktriage-cli", version, about = "Tasktriage CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the suggestion engine over a JSON request
    Suggest {
        /// Request file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Pretty-print the JSON response
        #[arg(long)]
        pretty: bool,
    },
    /// Inspect individual heuristics
    Analyze {
        #[command(subcommand)]
        action: commands::analyze::AnalyzeAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Suggest { file, pretty } => commands::suggest::run(file, pretty),
        Commands::Analyze { action } => commands::analyze::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "tasktriage-cli", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
