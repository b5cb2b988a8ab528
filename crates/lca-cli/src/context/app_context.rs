use anyhow::Context;
use lca_config::LcaConfig;
use lca_db::service::LcaService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LcaService,
    pub config: LcaConfig,
}

impl AppContext {
    /// Open the assessment store. `--db` wins over `database.path`.
    pub async fn init(config: LcaConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let db_path = flags.db.as_deref().unwrap_or(&config.database.path);

        let service = LcaService::new_local(db_path)
            .await
            .with_context(|| format!("failed to open assessment store at '{db_path}'"))?;

        Ok(Self { service, config })
    }

    /// Jitter seed: `--seed` first, then `estimation.seed`.
    #[must_use]
    pub fn seed(&self, flags: &GlobalFlags) -> Option<u64> {
        flags.seed.or(self.config.estimation.seed)
    }
}
