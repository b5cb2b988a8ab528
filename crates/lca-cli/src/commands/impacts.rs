use lca_engine::Aggregator;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssessmentArgs;
use crate::commands::shared::assessment::parse_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lca impacts`.
pub async fn handle(args: &AssessmentArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(&args.assessment)?;
    let result = Aggregator::new(&ctx.service, &ctx.config.factors)
        .compute_impacts(id)
        .await?;
    output(&result, flags.format)
}
