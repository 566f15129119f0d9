use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    #[error("Unrecognized version scheme: {version}")]
    UnrecognizedVersionScheme { version: String },
}

/// A scheme name that is not one of the known schemes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown version scheme: {name}")]
pub struct UnknownSchemeError {
    pub name: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to read batch file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid batch file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
