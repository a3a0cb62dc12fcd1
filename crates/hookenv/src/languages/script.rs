use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::descriptor::{Base, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler};

/// An arbitrary executable script checked into the repo. Always available,
/// no environment.
pub struct Script;

pub static SCRIPT: Script = Script;

const BASE: Base = Base::new("Script", "script", "", "", "");

impl LanguageHandler for Script {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Script
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
            version: "",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let env_path = SCRIPT.setup_environment_with_repo(&ctx).await.unwrap();
        assert_eq!(env_path, repo.path());
    }
}
