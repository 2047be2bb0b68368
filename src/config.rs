/// Default base URL for the npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Package whose versions the migration targets
pub const DEFAULT_PACKAGE_NAME: &str = "turbo";

/// Environment variable overriding the registry base URL
pub const REGISTRY_URL_ENV: &str = "MIGRATE_VERSION_REGISTRY";

/// Where to look up versions, and for which package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySettings {
    pub registry_url: String,
    pub package_name: String,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
        }
    }
}

impl RegistrySettings {
    /// Builds settings from the process environment.
    /// Uses $MIGRATE_VERSION_REGISTRY as the registry URL if set and non-empty.
    pub fn from_env() -> Self {
        Self::from_env_with(std::env::var(REGISTRY_URL_ENV).ok())
    }

    fn from_env_with(registry_url: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            registry_url: registry_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.registry_url),
            ..defaults
        }
    }

    /// Applies explicit overrides on top of the current values
    pub fn with_overrides(self, registry_url: Option<String>, package_name: Option<String>) -> Self {
        Self {
            registry_url: registry_url.unwrap_or(self.registry_url),
            package_name: package_name.unwrap_or(self.package_name),
        }
    }
}
