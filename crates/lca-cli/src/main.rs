use anyhow::Context;
use clap::Parser;
use lca_engine::EngineError;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_error(&error);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = lca_config::LcaConfig::load_with_dotenv().context("failed to load configuration")?;

    let ctx = context::AppContext::init(config, &flags)
        .await
        .context("failed to initialize lca application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Engine errors go to stderr as a JSON object so scripts can branch on
/// `code`; everything else is printed as a plain chain.
fn report_error(error: &anyhow::Error) {
    if let Some(engine_error) = error.downcast_ref::<EngineError>() {
        match serde_json::to_string(&engine_error.payload()) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("lca error: {error:#}"),
        }
        return;
    }
    eprintln!("lca error: {error:#}");
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LCA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
