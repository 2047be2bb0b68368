//! Trait for fetching package metadata from a registry

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::metadata::PackageMetadata;

/// Trait for fetching package metadata from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetches the full metadata document for a package
    ///
    /// # Arguments
    /// * `package_name` - The name of the package (e.g., "turbo" or "@scope/name")
    ///
    /// # Returns
    /// * `Ok(PackageMetadata)` - The metadata object as served by the registry
    /// * `Err(RegistryError)` - If the request fails or the body is not a JSON object
    async fn fetch_metadata(&self, package_name: &str) -> Result<PackageMetadata, RegistryError>;
}
