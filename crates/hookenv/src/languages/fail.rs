use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::descriptor::{Base, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler};

/// The hook that always fails its check at run time (used to enforce a
/// "this should never match" policy upstream). No environment is needed to
/// report that failure, so setup is as trivial as `System`/`Script`.
pub struct Fail;

pub static FAIL: Fail = Fail;

const BASE: Base = Base::new("Fail", "fail", "", "", "");

impl LanguageHandler for Fail {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Fail
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
        let env_path = FAIL.setup_environment_with_repo(&ctx).await.unwrap();
        assert_eq!(env_path, repo.path());
    }
}
