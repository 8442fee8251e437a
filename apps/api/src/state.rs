use crate::config::Config;
use crate::storage::SlotRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Typed access to the configured slot store.
    pub slots: SlotRepository,
    pub config: Config,
}
