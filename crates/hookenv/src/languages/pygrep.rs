use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler, create_environment_directory, resolve_env_path};

/// A Python-executed grep-like matcher. The "environment" is conceptual: at
/// the canonical `default` version there is none at all (the host's Python
/// is invoked directly against the repo); anything else gets a bare
/// `py_env-<version>` marker directory. No package manager ever runs here —
/// Python itself is never installed by this handler.
pub struct Pygrep;

pub static PYGREP: Pygrep = Pygrep;

const BASE: Base = Base::new("Pygrep", "python", "python", "--version", "");

impl LanguageHandler for Pygrep {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Pygrep
    }

    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        if !self.is_runtime_available().await {
            anyhow::bail!(Error::ToolchainAbsent { language: "python" });
        }
        if !env_path.as_os_str().is_empty() && !env_path.is_dir() {
            anyhow::bail!(Error::HealthVerification {
                message: "Pygrep environment directory is missing".to_string(),
                source: None,
            });
        }
        Ok(())
    }

    async fn install_dependencies(&self, _env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        if !deps.is_empty() {
            warn!("pygrep does not support additional dependencies; ignoring {} entries", deps.len());
        }
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        let name = crate::name::repository_environment_name(self.language(), ctx.version);
        if name.is_empty() {
            return ctx.root().map(Path::to_path_buf).ok_or_else(|| Error::UsageError.into());
        }

        if which("python").is_err() {
            anyhow::bail!(Error::ToolchainAbsent { language: "python" });
        }

        let env_path = resolve_env_path(ctx, self.language(), ctx.version)?;
        create_environment_directory(self.get_name(), &env_path).await?;
        Ok(env_path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn default_version_passes_repo_path_through_with_no_directory() {
        let repo = tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: Some(Path::new("/cache")),
            version: "",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let env_path = PYGREP.setup_environment_with_repo(&ctx).await.unwrap();
        assert_eq!(env_path, repo.path());
        assert!(!repo.path().join("py_env-default").exists());
    }

    #[tokio::test]
    async fn no_op_deps_warn_but_do_not_fail() {
        let deps = vec![DependencySpec::new("regex")];
        PYGREP
            .install_dependencies(Path::new("/irrelevant"), &deps)
            .await
            .unwrap();
    }
}
