use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hookenv_consts::env_vars::EnvVars;
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler, resolve_env_path};
use crate::process::Cmd;

/// The conda/mamba/micromamba family, selected once per call by environment
/// toggle. `check_health` is a deliberate no-op; the real verification lives
/// in `check_environment_health_at`'s `conda-meta` check, which is strict.
/// This lazy-probe-vs-strict-scan asymmetry is intentional and preserved
/// verbatim rather than unified.
pub struct Conda;

pub static CONDA: Conda = Conda;

const BASE: Base = Base::new("Conda", "conda", "conda", "--version", "");

fn selected_executable() -> &'static str {
    if EnvVars::is_set(EnvVars::PRE_COMMIT_USE_MICROMAMBA) {
        "micromamba"
    } else if EnvVars::is_set(EnvVars::PRE_COMMIT_USE_MAMBA) {
        "mamba"
    } else {
        "conda"
    }
}

impl LanguageHandler for Conda {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Conda
    }

    async fn is_runtime_available(&self) -> bool {
        which(selected_executable()).is_ok()
    }

    async fn check_health(&self, _env_path: &Path, _version: &str) -> Result<()> {
        Ok(())
    }

    async fn check_environment_health_at(&self, env_path: &Path, _version: &str) -> bool {
        fs_err::tokio::try_exists(env_path.join("conda-meta"))
            .await
            .unwrap_or(false)
    }

    async fn install_dependencies(&self, env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        if deps.is_empty() {
            return Ok(());
        }
        let exe = selected_executable();
        let mut cmd = Cmd::new(exe, "conda install additional dependencies");
        cmd.arg("install").arg("--prefix").arg(env_path);
        for dep in deps {
            cmd.arg(dep.as_str());
        }
        cmd.output().await.context("failed to install additional conda dependencies")?;
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        let root = ctx.root().ok_or(Error::UsageError)?;
        let environment_yml = root.join("environment.yml");
        if !fs_err::tokio::try_exists(&environment_yml).await.unwrap_or(false) {
            anyhow::bail!(Error::ConfigurationMissing {
                language: "conda",
                file: "environment.yml",
                path: environment_yml,
            });
        }

        if !self.is_runtime_available().await {
            anyhow::bail!(Error::ToolchainUnavailable { language: "conda" });
        }

        let env_path = resolve_env_path(ctx, self.language(), ctx.version)?;
        if self.check_environment_health_at(&env_path, ctx.version).await {
            return Ok(env_path);
        }

        if fs_err::tokio::try_exists(&env_path).await.unwrap_or(false) {
            fs_err::tokio::remove_dir_all(&env_path)
                .await
                .map_err(|source| Error::BrokenEnvironmentRemoval { source })?;
        }

        let exe = selected_executable();
        Cmd::new(exe, "conda env create")
            .arg("env")
            .arg("create")
            .arg("--file")
            .arg(&environment_yml)
            .arg("--prefix")
            .arg(&env_path)
            .current_dir(root)
            .output()
            .await
            .context("conda env create failed")?;

        if !ctx.additional_deps.is_empty() {
            self.install_dependencies(&env_path, ctx.additional_deps)
                .await
                .map_err(|source| Error::DependencyInstallation {
                    language: self.get_name(),
                    source,
                })?;
        }

        Ok(env_path)
    }

    fn environment_bin_path(&self, env_path: &Path) -> PathBuf {
        if cfg!(windows) {
            env_path.to_path_buf()
        } else {
            env_path.join("bin")
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn missing_environment_yml_fails_before_any_directory_creation() {
        let repo = tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: None,
            version: "3.8",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let err = CONDA.setup_environment_with_repo(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("conda language requires environment.yml file"));
        assert_eq!(std::fs::read_dir(repo.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn check_health_is_an_unconditional_no_op() {
        CONDA.check_health(Path::new("/does/not/exist"), "anything").await.unwrap();
    }

    #[tokio::test]
    async fn check_environment_health_requires_conda_meta() {
        let env = tempdir().unwrap();
        assert!(!CONDA.check_environment_health_at(env.path(), "default").await);
        fs_err::tokio::create_dir_all(env.path().join("conda-meta")).await.unwrap();
        assert!(CONDA.check_environment_health_at(env.path(), "default").await);
    }

    #[test]
    fn micromamba_takes_priority_over_mamba() {
        unsafe {
            std::env::set_var(EnvVars::PRE_COMMIT_USE_MICROMAMBA, "1");
            std::env::set_var(EnvVars::PRE_COMMIT_USE_MAMBA, "1");
        }
        assert_eq!(selected_executable(), "micromamba");
        unsafe {
            std::env::remove_var(EnvVars::PRE_COMMIT_USE_MICROMAMBA);
            std::env::remove_var(EnvVars::PRE_COMMIT_USE_MAMBA);
        }
    }
}
