use anyhow::bail;
use lca_core::enums::ExtractionMethod;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MaterialCommands;
use crate::commands::shared::assessment::require_assessment;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lca material`.
pub async fn handle(
    action: &MaterialCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MaterialCommands::Add {
            assessment,
            ore_grade,
            method,
            quantity,
        } => {
            let assessment = require_assessment(ctx, assessment).await?;
            check_non_negative("ore grade", *ore_grade)?;
            check_non_negative("quantity", *quantity)?;
            if let Some(method) = method.as_deref() {
                if ExtractionMethod::parse(method).is_none() {
                    tracing::warn!(method, "unknown extraction method; treated as neutral");
                }
            }

            let material = ctx
                .service
                .create_material(assessment.id, *ore_grade, method.as_deref(), *quantity)
                .await?;
            output(&material, flags.format)
        }
        MaterialCommands::List { assessment } => {
            let assessment = require_assessment(ctx, assessment).await?;
            let materials = ctx
                .service
                .list_materials_for_assessment(assessment.id)
                .await?;
            output(&materials, flags.format)
        }
    }
}

/// Reject negative or non-finite measurement input.
pub fn check_non_negative(field: &str, value: Option<f64>) -> anyhow::Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => bail!("{field} must be a non-negative number, got {v}"),
        _ => Ok(()),
    }
}
