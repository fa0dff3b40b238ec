use std::sync::Arc;

use brushquote_core::{CalculationSettings, PricingSettings};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// The engine configuration held by the service.
///
/// Both settings live behind one lock so a computation never mixes an old
/// calculation snapshot with a new pricing snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineSettings {
    pub calculation: CalculationSettings,
    pub pricing: PricingSettings,
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Current engine settings.
    pub settings: Arc<RwLock<EngineSettings>>,
}

impl AppState {
    pub fn new(config: ServerConfig, settings: EngineSettings) -> Self {
        Self {
            config: Arc::new(config),
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    /// Clone one consistent settings snapshot for a computation.
    pub async fn settings_snapshot(&self) -> EngineSettings {
        self.settings.read().await.clone()
    }
}
