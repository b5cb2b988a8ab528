use lca_core::entities::Assessment;
use lca_core::ids::parse_assessment_id;
use lca_engine::EngineError;

use crate::context::AppContext;

/// Parse a command-line assessment id.
pub fn parse_id(raw: &str) -> Result<i64, EngineError> {
    parse_assessment_id(raw).map_err(EngineError::from)
}

/// Parse the id and load the assessment it names.
pub async fn require_assessment(ctx: &AppContext, raw: &str) -> Result<Assessment, EngineError> {
    let id = parse_id(raw)?;
    ctx.service
        .get_assessment(id)
        .await
        .map_err(|error| EngineError::from_lookup(id, error))
}
