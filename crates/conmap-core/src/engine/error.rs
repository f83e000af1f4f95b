use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::error::ModelError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Model invariant violated: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Contact map '{map_id}' is empty")]
    EmptyContactMap { map_id: String },
}
