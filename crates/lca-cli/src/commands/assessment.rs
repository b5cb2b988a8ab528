use anyhow::bail;
use lca_core::enums::{AssessmentStatus, MetalType};
use lca_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssessmentCommands;
use crate::commands::shared::assessment::require_assessment;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lca assessment`.
pub async fn handle(
    action: &AssessmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssessmentCommands::Create { name, metal } => create(name, metal, ctx, flags).await,
        AssessmentCommands::Get { id } => {
            let assessment = require_assessment(ctx, id).await?;
            output(&assessment, flags.format)
        }
        AssessmentCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let assessments = ctx.service.list_assessments(limit).await?;
            output(&assessments, flags.format)
        }
        AssessmentCommands::Start { id } => start(id, ctx, flags).await,
    }
}

async fn create(name: &str, metal: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if name.trim().is_empty() {
        bail!("assessment name must not be empty");
    }
    // Stored verbatim: estimation rejects unknown metals, aggregation falls back.
    if MetalType::parse(metal).is_none() {
        tracing::warn!(metal, "metal has no benchmark; estimation will reject this assessment");
    }
    let assessment = ctx.service.create_assessment(name, metal).await?;
    output(&assessment, flags.format)
}

async fn start(raw_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assessment = require_assessment(ctx, raw_id).await?;
    match ctx
        .service
        .update_assessment_status(assessment.id, AssessmentStatus::InProgress)
        .await
    {
        Ok(updated) => output(&updated, flags.format),
        Err(DatabaseError::InvalidState(reason)) => bail!(reason),
        Err(error) => Err(error.into()),
    }
}
