//! # factlens-verify
//!
//! The verification engine: keyword extraction, the domain trust registry,
//! query construction, the two-stage source matcher, tier-weighted scoring
//! with temporal decay, and verdict classification.
//!
//! One verification is a stateless, single-fact operation: data flows
//! extract → gate → query → search → prioritize → check → score → classify,
//! and nothing survives the call.

pub mod classify;
pub mod engine;
pub mod keywords;
pub mod matcher;
pub mod query;
pub mod registry;
pub mod scoring;

pub use engine::VerificationEngine;
pub use registry::{DomainRegistry, TrustedDomain};
