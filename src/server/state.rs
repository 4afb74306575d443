use std::sync::Arc;

use crate::animal::AnimalStore;

/// Shared state handed to every request.
///
/// The store handle is the only resource shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnimalStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AnimalStore>) -> Self {
        Self { store }
    }
}
