use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProcessingCommands;
use crate::commands::material::check_non_negative;
use crate::commands::shared::assessment::require_assessment;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lca processing`.
pub async fn handle(
    action: &ProcessingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProcessingCommands::Add {
            assessment,
            energy,
            water,
            waste,
            efficiency,
        } => {
            let assessment = require_assessment(ctx, assessment).await?;
            check_non_negative("energy", *energy)?;
            check_non_negative("water", *water)?;
            check_non_negative("waste", *waste)?;
            check_non_negative("efficiency", *efficiency)?;

            let record = ctx
                .service
                .create_processing(assessment.id, *energy, *water, *waste, *efficiency)
                .await?;
            output(&record, flags.format)
        }
        ProcessingCommands::List { assessment } => {
            let assessment = require_assessment(ctx, assessment).await?;
            let records = ctx
                .service
                .list_processing_for_assessment(assessment.id)
                .await?;
            output(&records, flags.format)
        }
    }
}
