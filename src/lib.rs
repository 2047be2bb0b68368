//! Resolve the package version a migration command should target.
//!
//! ```no_run
//! use migrate_version::config::RegistrySettings;
//! use migrate_version::version::resolver::{MigrateOptions, get_latest_version};
//!
//! # async fn run() -> Result<(), migrate_version::version::error::ResolveError> {
//! let version = get_latest_version(&RegistrySettings::default(), &MigrateOptions::default()).await?;
//! println!("{version}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod version;
