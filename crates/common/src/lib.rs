pub mod file_utils;

use serde::{Deserialize, Serialize};

/// Response from the health check endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String, // "ok" when healthy
}
