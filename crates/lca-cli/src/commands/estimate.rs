use lca_engine::{Estimator, jitter_rng};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssessmentArgs;
use crate::commands::shared::assessment::parse_id;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lca estimate`.
pub async fn handle(args: &AssessmentArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = parse_id(&args.assessment)?;
    let rng = jitter_rng(ctx.seed(flags));

    let report = Estimator::new(&ctx.service, &ctx.config.factors, rng)
        .estimate_missing(id)
        .await?;

    if report.is_partial() {
        tracing::warn!(
            failed = report.failures.len(),
            "some processing records could not be updated"
        );
    }
    output(&report, flags.format)
}
