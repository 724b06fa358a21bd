//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration for the fixture server.
///
/// The fixture has no config files, flags, or environment variables;
/// `Default` is the only constructor exercised in practice. The struct
/// still derives Serde so embedders can deserialize one if they want.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}
