//! npm registry API implementation

use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::metadata::PackageMetadata;
use crate::version::registry::MetadataFetcher;

/// Registry implementation for the npm registry API
#[derive(Clone)]
pub struct NpmRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry with a custom base URL
    pub fn new(base_url: &str) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent("migrate-version")
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a new NpmRegistry reusing an existing HTTP client
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Encode package name for URL (handles scoped packages)
    fn encode_package_name(package_name: &str) -> String {
        if package_name.starts_with('@') {
            // Scoped package: @scope/name -> @scope%2Fname
            package_name.replace('/', "%2F")
        } else {
            package_name.to_string()
        }
    }

    fn package_url(&self, package_name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url,
            Self::encode_package_name(package_name)
        )
    }
}

#[async_trait::async_trait]
impl MetadataFetcher for NpmRegistry {
    async fn fetch_metadata(&self, package_name: &str) -> Result<PackageMetadata, RegistryError> {
        let url = self.package_url(package_name);
        debug!("Fetching package metadata: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if !status.is_success() {
            warn!("npm registry returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json::<PackageMetadata>().await.map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_metadata_returns_dist_tags_and_top_level_keys() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/turbo")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "name": "turbo",
                    "dist-tags": { "latest": "2.1.0", "canary": "2.2.0-canary.1" },
                    "canary": "2.2.0-canary.1"
                }"#,
            )
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("turbo").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.dist_tag("latest"), Some("2.1.0"));
        assert!(result.has_tag("canary"));
    }

    #[tokio::test]
    async fn fetch_metadata_returns_not_found_for_nonexistent_package() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/nonexistent-package")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Not found"}"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("nonexistent-package").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }

    #[tokio::test]
    async fn fetch_metadata_returns_invalid_response_on_server_error() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/turbo")
            .with_status(503)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("turbo").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_metadata_rejects_non_object_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/turbo")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["2.1.0"]"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("turbo").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_metadata_handles_scoped_package() {
        let mut server = Server::new_async().await;

        // Scoped packages use URL encoding: @turbo/codemod -> @turbo%2Fcodemod
        let mock = server
            .mock("GET", "/@turbo%2Fcodemod")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{ "dist-tags": { "latest": "2.1.0" } }"#)
            .create_async()
            .await;

        let registry = NpmRegistry::new(&server.url()).unwrap();
        let result = registry.fetch_metadata("@turbo/codemod").await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.dist_tag("latest"), Some("2.1.0"));
    }

    #[test]
    fn new_strips_trailing_slash_from_base_url() {
        let registry = NpmRegistry::new("https://registry.example.com/").unwrap();

        assert_eq!(registry.base_url(), "https://registry.example.com");
        assert_eq!(
            registry.package_url("turbo"),
            "https://registry.example.com/turbo"
        );
    }
}
