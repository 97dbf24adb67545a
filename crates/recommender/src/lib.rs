//! Recommender crate for the phone recommendation engine.
//!
//! This crate contains the service that coordinates all components
//! of the recommendation pipeline.

pub mod service;

pub use service::{PhoneRecommendation, RecommendError, RecommendationService};
