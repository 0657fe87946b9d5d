//! Core types and service wiring for the EcoDev waste classifier.

/// Stub sign-in for the demo user.
pub mod auth;
/// Name-based quick search over common items.
pub mod catalogue;
/// In-memory submission history.
pub mod history;
/// Ordered knowledge base of waste categories.
pub mod knowledge;
/// First-match keyword classifier.
pub mod matcher;
/// Domain models shared by the core and front-ends.
pub mod model;
/// Text folding applied before matching.
pub mod normalizer;
/// Trait describing the classification seam.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use auth::*;
pub use catalogue::*;
pub use history::*;
pub use knowledge::*;
pub use matcher::*;
pub use model::*;
pub use normalizer::*;
pub use ports::*;
pub use service::*;
