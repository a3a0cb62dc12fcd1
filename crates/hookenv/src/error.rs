use std::path::PathBuf;

/// Stable, substring-matched error taxonomy for the environment manager.
///
/// Downstream callers match on the rendered message, not the variant, so the
/// wording here is load-bearing: do not reword an existing `#[error(...)]`
/// string without checking every place in `languages/` that constructs it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{language} runtime not found in PATH")]
    ToolchainAbsent { language: &'static str },

    #[error("{language} runtime not found")]
    ToolchainAbsentShort { language: &'static str },

    #[error("{language} runtime not available")]
    ToolchainUnavailable { language: &'static str },

    #[error("{language} language requires {file} file: {path}")]
    ConfigurationMissing {
        language: &'static str,
        file: &'static str,
        path: PathBuf,
    },

    #[error("failed to create {language} environment directory")]
    DirectoryCreation {
        language: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove broken environment")]
    BrokenEnvironmentRemoval {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install {language} dependencies")]
    DependencyInstallation {
        language: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to install {language} {kind} {item}")]
    DependencyItemInstallation {
        language: &'static str,
        kind: &'static str,
        item: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{message}")]
    HealthVerification {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("both cacheDir and repoPath are empty")]
    UsageError,
}

pub type Result<T> = std::result::Result<T, anyhow::Error>;
