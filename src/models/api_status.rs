use serde::{Deserialize, Serialize};

/// Backend health and quota snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    pub api_calls: u64,
    pub max_api_calls: u64,
    pub timestamp: String,
    /// True when the backend is serving fabricated rather than live market data
    pub synthetic_data_mode: bool,
}
