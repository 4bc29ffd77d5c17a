//! API server state

use std::sync::Arc;

use crate::menu::MenuStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// The menu resource manager
    pub store: Arc<MenuStore>,
}

impl AppState {
    pub fn new(store: Arc<MenuStore>) -> Self {
        Self { store }
    }
}
