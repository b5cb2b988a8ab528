use lca_core::enums::TransportMode;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TransportCommands;
use crate::commands::material::check_non_negative;
use crate::commands::shared::assessment::require_assessment;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lca transport`.
pub async fn handle(
    action: &TransportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TransportCommands::Add {
            assessment,
            mode,
            distance,
            load,
        } => {
            let assessment = require_assessment(ctx, assessment).await?;
            check_non_negative("distance", *distance)?;
            check_non_negative("load", *load)?;
            if TransportMode::parse(mode).is_none() {
                tracing::warn!(mode, "unknown transport mode; the truck factor will apply");
            }

            let leg = ctx
                .service
                .create_transport(assessment.id, mode, *distance, *load)
                .await?;
            output(&leg, flags.format)
        }
        TransportCommands::List { assessment } => {
            let assessment = require_assessment(ctx, assessment).await?;
            let legs = ctx
                .service
                .list_transports_for_assessment(assessment.id)
                .await?;
            output(&legs, flags.format)
        }
    }
}
