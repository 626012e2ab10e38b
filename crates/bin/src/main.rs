use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backend;
mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

#[tokio::main]
async fn main() {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("biihlive_identity=info".parse().expect("valid directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = OutputFormat::from_json_flag(cli.json);
    let context = backend::create_context(&cli.config).await?;

    match cli.command {
        Commands::Resolve => commands::resolve::run(&context, format).await,
        Commands::Details => commands::details::run(&context, format).await,
        Commands::Info => commands::info::run(&context, &cli.config, format).await,
    }
}
