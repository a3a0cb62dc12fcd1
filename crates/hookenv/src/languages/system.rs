use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::descriptor::{Base, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler};

/// Hooks that invoke whatever is already on the host's `PATH`, with no
/// environment of its own. Always available; `SetupEnvironmentWithRepo`
/// returns the repo path unchanged and never creates a directory.
pub struct System;

pub static SYSTEM: System = System;

const BASE: Base = Base::new("System", "system", "", "", "");

impl LanguageHandler for System {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::System
    }

    async fn is_runtime_available(&self) -> bool {
        true
    }

    async fn check_health(&self, _env_path: &Path, _version: &str) -> Result<()> {
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        ctx.root().map(Path::to_path_buf).ok_or_else(|| Error::UsageError.into())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn setup_returns_repo_path_verbatim() {
        let repo = tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: None,
            version: "whatever",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let env_path = SYSTEM.setup_environment_with_repo(&ctx).await.unwrap();
        assert_eq!(env_path, repo.path());
        // No subdirectory was created.
        assert_eq!(std::fs::read_dir(repo.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn runtime_is_always_available() {
        assert!(SYSTEM.is_runtime_available().await);
    }
}
