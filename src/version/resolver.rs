//! Target version resolver for migrations
//!
//! Decides which published version a migration should move to: either the
//! tag the caller asked for, or the registry's `latest` dist-tag.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::RegistrySettings;
use crate::version::error::ResolveError;
use crate::version::registries::NpmRegistry;
use crate::version::registry::MetadataFetcher;

/// Options of the migrate command that affect version selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Explicit tag to migrate to
    pub to: Option<String>,
}

impl MigrateOptions {
    pub fn to(tag: impl Into<String>) -> Self {
        Self {
            to: Some(tag.into()),
        }
    }

    /// Requested tag, with an empty string treated as no request
    fn requested_tag(&self) -> Option<&str> {
        self.to.as_deref().filter(|tag| !tag.is_empty())
    }
}

pub struct VersionResolver {
    fetcher: Arc<dyn MetadataFetcher>,
    package_name: String,
}

impl VersionResolver {
    pub fn new(fetcher: Arc<dyn MetadataFetcher>, package_name: impl Into<String>) -> Self {
        Self {
            fetcher,
            package_name: package_name.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Resolves the version a migration should target.
    ///
    /// A requested tag is returned unchanged when the package metadata has it
    /// as a top-level key. Without one, `dist-tags.latest` is returned.
    pub async fn resolve(&self, options: &MigrateOptions) -> Result<String, ResolveError> {
        let metadata = self
            .fetcher
            .fetch_metadata(&self.package_name)
            .await
            .map_err(|source| ResolveError::Fetch {
                package: self.package_name.clone(),
                source,
            })?;

        if let Some(tag) = options.requested_tag() {
            if !metadata.has_tag(tag) {
                return Err(ResolveError::TagNotFound {
                    package: self.package_name.clone(),
                    tag: tag.to_string(),
                });
            }
            debug!("{}@{} found in registry metadata", self.package_name, tag);
            return Ok(tag.to_string());
        }

        let latest = metadata
            .dist_tag("latest")
            .ok_or_else(|| ResolveError::MissingLatest {
                package: self.package_name.clone(),
            })?;

        info!("Latest version of {} is {}", self.package_name, latest);
        Ok(latest.to_string())
    }
}

/// Resolves the target version using the npm registry described by `settings`.
pub async fn get_latest_version(
    settings: &RegistrySettings,
    options: &MigrateOptions,
) -> Result<String, ResolveError> {
    let registry =
        NpmRegistry::new(&settings.registry_url).map_err(|source| ResolveError::Fetch {
            package: settings.package_name.clone(),
            source,
        })?;

    VersionResolver::new(Arc::new(registry), settings.package_name.as_str())
        .resolve(options)
        .await
}
