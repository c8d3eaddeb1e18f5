//! Request dispatch to the external recommendation service.
//!
//! The service itself (tag extraction, ranking, storage) lives behind
//! `POST /api/recommend`; this side only sends text and reads tracks back.

pub mod client;
pub mod errors;
pub mod traits;

pub use client::RecommendClient;
pub use errors::DispatchError;
pub use traits::Recommender;
