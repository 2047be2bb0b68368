use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failures surfaced by the version resolver. None of them carry a fallback.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Unable to fetch the latest version of {package}")]
    Fetch {
        package: String,
        #[source]
        source: RegistryError,
    },

    #[error("{package}@{tag} does not exist")]
    TagNotFound { package: String, tag: String },

    #[error("{package} has no \"latest\" dist-tag")]
    MissingLatest { package: String },
}
