//! Version resolution against a package registry
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│   Fetcher   │────▶│  Registries │
//! │ (pick tag)  │     │   (trait)   │     │   (npm)     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types for registry and resolution failures
//! - [`metadata`]: Package metadata document returned by the registry
//! - [`registry`]: Trait for fetching package metadata
//! - [`registries`]: Concrete registry implementations
//! - [`resolver`]: Picks the version a migration should target

pub mod error;
pub mod metadata;
pub mod registries;
pub mod registry;
pub mod resolver;
