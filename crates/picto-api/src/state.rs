//! Application state shared by all handlers.
//!
//! Both members are created once during setup and are safe for concurrent use; handlers
//! only ever read them.

use picto_storage::ImageStorage;
use picto_translate::Translator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ImageStorage>,
    pub translator: Arc<dyn Translator>,
}

impl AppState {
    pub fn new(storage: Arc<dyn ImageStorage>, translator: Arc<dyn Translator>) -> Self {
        Self {
            storage,
            translator,
        }
    }
}
