pub mod config;
pub mod error;
pub mod identity;
pub mod ids;
pub mod notes;
pub mod responses;
pub mod store;
pub mod types;

use config::Config;
use ids::IdGenerator;
use std::sync::Arc;
use store::NoteStore;

/// Shared application state, built once per cold start
pub struct AppState {
    pub store: Arc<dyn NoteStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        store: Arc<dyn NoteStore>,
        ids: Arc<dyn IdGenerator>,
        config: Config,
    ) -> Arc<Self> {
        Arc::new(Self { store, ids, config })
    }
}
