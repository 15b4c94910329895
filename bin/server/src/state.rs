//! Server application state

use std::sync::Arc;
use xmlcheck::XmlValidator;

/// Shared handler state: the validator every upload is checked with
pub struct AppState {
    pub validator: Arc<dyn XmlValidator>,
}

impl AppState {
    pub fn new(validator: Arc<dyn XmlValidator>) -> Self {
        Self { validator }
    }
}
