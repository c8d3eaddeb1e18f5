use std::io::Read;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::page::RecommendPage;
use crate::recommendations::RecommendClient;
use crate::voice::RecognizerConfig;

pub mod config;
pub mod page;
pub mod recommendations;

pub use config::*;
pub use page::*;
pub use recommendations::*;

/// Config file + env, then the command-line endpoint on top.
pub fn load_config(endpoint: Option<&str>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(endpoint) = endpoint {
        config.apply_endpoint(endpoint);
    }
    Ok(config)
}

/// A page backed by the HTTP recommender. The terminal has no speech input.
pub fn build_page(config: &AppConfig) -> Result<RecommendPage, AppError> {
    let client = RecommendClient::new(config)?;
    log::debug!("Using recommendation endpoint {}", client.endpoint());
    Ok(RecommendPage::new(
        Arc::new(client),
        None,
        RecognizerConfig::from(config),
    ))
}

/// The positional text, or all of stdin when it was left out.
pub fn read_input(text: Option<String>) -> Result<String, AppError> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
