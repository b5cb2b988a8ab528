//! Shared test utilities for lca-db unit tests.

pub(crate) mod helpers {
    use lca_core::entities::Assessment;

    use crate::LcaDb;
    use crate::service::LcaService;

    /// Create an in-memory `LcaService`.
    pub async fn test_service() -> LcaService {
        let db = LcaDb::open_local(":memory:").await.unwrap();
        LcaService::from_db(db)
    }

    /// Create an assessment for the given metal (convenience for record tests).
    pub async fn create_test_assessment(svc: &LcaService, metal: &str) -> Assessment {
        svc.create_assessment("Test project", metal).await.unwrap()
    }
}
