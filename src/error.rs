//! Startup error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("unknown asset: {0}")]
    Unknown(String),
    #[error("asset {0} produced an empty mesh")]
    Empty(&'static str),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing DOM element: {0}")]
    MissingElement(&'static str),
    #[error("failed to load assets: {0}")]
    Assets(#[from] AssetError),
    #[error("graphics setup failed: {0}")]
    Graphics(String),
}
