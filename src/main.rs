use clap::{Parser, Subcommand};
use codesync::core::{format_error_with_help, EditorVariant};
use codesync::sync::Direction;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "codesync")]
#[command(about = "Sync editor settings and extensions through a private GitHub gist")]
#[command(version)]
struct Cli {
    /// Editor to sync: code or cursor (overrides the config file)
    #[arg(long, global = true)]
    editor: Option<EditorVariant>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, update, or apply the synced gist
    Sync {
        /// Apply the gist to this machine without asking for a direction
        #[arg(long, conflicts_with = "push")]
        pull: bool,
        /// Upload this machine's state without asking for a direction
        #[arg(long)]
        push: bool,
        /// Skip the confirmation before overwriting local settings
        #[arg(short, long)]
        yes: bool,
    },
    /// Store a GitHub token in the system keychain
    Configure,
    /// Sync this machine with an existing gist
    Link {
        /// Gist id or URL
        gist: String,
    },
    /// Show the linked gist, settings path, and token state
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; set RUST_LOG=codesync=info to see sync steps
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync { pull, push, yes } => {
            let direction = if pull {
                Some(Direction::Pull)
            } else if push {
                Some(Direction::Push)
            } else {
                None
            };
            cli::sync::run(direction, yes, cli.editor).await
        }
        Commands::Configure => cli::configure::run(),
        Commands::Link { gist } => cli::link::run(gist),
        Commands::Status => cli::status::run(cli.editor),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
