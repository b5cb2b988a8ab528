use anyhow::bail;
use lca_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssessmentArgs;
use crate::commands::shared::assessment::require_assessment;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lca summary`.
pub async fn handle(args: &AssessmentArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assessment = require_assessment(ctx, &args.assessment).await?;
    match ctx.service.get_summary(assessment.id).await {
        Ok(summary) => output(&summary, flags.format),
        Err(DatabaseError::NoResult) => bail!(
            "assessment {} has no impact summary yet; run `lca impacts {}`",
            assessment.id,
            assessment.id
        ),
        Err(error) => Err(error.into()),
    }
}
