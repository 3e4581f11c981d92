use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Generate React/Vite site skeletons from a CSV listing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one project per row of the site listing (default)
    Generate {
        #[command(flatten)]
        args: commands::generate::GenerateArgs,
    },

    /// Show version information
    Version {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,

        /// Show the detected installer version
        #[arg(short, long)]
        components: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SITEGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Default to Generate with default args, matching a bare invocation
    let command = cli.command.unwrap_or(Commands::Generate {
        args: commands::generate::GenerateArgs::default(),
    });

    match command {
        Commands::Generate { args } => {
            commands::generate::execute(args)?;
        }
        Commands::Version { json, components } => {
            commands::version::execute(json, components)?;
        }
    }

    Ok(())
}
