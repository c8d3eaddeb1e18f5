pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod page;
pub mod recommendations;
pub mod render;
pub mod voice;

pub use config::AppConfig;
pub use errors::AppError;
pub use page::RecommendPage;
pub use recommendations::{DispatchError, RecommendClient, Recommender};
