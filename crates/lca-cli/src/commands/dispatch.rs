use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Assessment { action } => commands::assessment::handle(&action, ctx, flags).await,
        Commands::Material { action } => commands::material::handle(&action, ctx, flags).await,
        Commands::Processing { action } => commands::processing::handle(&action, ctx, flags).await,
        Commands::Transport { action } => commands::transport::handle(&action, ctx, flags).await,
        Commands::Estimate(args) => commands::estimate::handle(&args, ctx, flags).await,
        Commands::Impacts(args) => commands::impacts::handle(&args, ctx, flags).await,
        Commands::Summary(args) => commands::summary::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
