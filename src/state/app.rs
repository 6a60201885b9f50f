use std::sync::Arc;

use crate::config::settings::Settings;
use crate::error::OjError;
use crate::metrics::Metrics;
use crate::problems::catalog::ProblemCatalog;
use crate::profiles::store::{MemoryProfileStore, ProfileStore};

/// Application-wide state container.
/// Stores are read-only snapshots; handlers take what they need per request.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub profiles: Arc<dyn ProfileStore>,
    pub catalog: Arc<ProblemCatalog>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(settings: Settings, profiles: Arc<dyn ProfileStore>, catalog: ProblemCatalog) -> Self {
        AppState {
            settings,
            profiles,
            catalog: Arc::new(catalog),
            metrics: Metrics::new(),
        }
    }

    /// Load both stores from the paths in `settings.data`
    pub async fn load(settings: Settings) -> Result<Self, OjError> {
        let profiles = MemoryProfileStore::load_json(&settings.data.profiles_path).await?;
        let catalog = ProblemCatalog::load_dir(&settings.data.problems_dir).await?;
        Ok(Self::new(settings, Arc::new(profiles), catalog))
    }
}
