use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler, create_environment_directory, resolve_env_path};
use crate::name::canonicalize_version;
use crate::process::Cmd;

/// A deliberate asymmetry lives here: `RepositoryEnvironmentName` accepts
/// both `default` and `system`, but [`R::check_health`] only ever accepts
/// `default` — `system` is a valid directory name that can never pass
/// health verification.
pub struct R;

pub static R: R = R;

const BASE: Base = Base::new("R", "r", "Rscript", "--version", "");

impl LanguageHandler for R {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::R
    }

    async fn check_health(&self, env_path: &Path, version: &str) -> Result<()> {
        if version != "default" {
            anyhow::bail!(Error::HealthVerification {
                message: "r only supports version 'default'".to_string(),
                source: None,
            });
        }
        if !env_path.is_dir() {
            anyhow::bail!(Error::HealthVerification {
                message: "R environment directory is missing".to_string(),
                source: None,
            });
        }
        if which("Rscript").is_err() {
            anyhow::bail!(Error::ToolchainAbsentShort { language: "r" });
        }
        Cmd::new("Rscript", "check Rscript version")
            .arg("--version")
            .output()
            .await
            .map_err(|source| Error::HealthVerification {
                message: "Rscript --version failed".to_string(),
                source: Some(source.into()),
            })?;
        Ok(())
    }

    async fn install_dependencies(&self, env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        if deps.is_empty() {
            return Ok(());
        }
        let library = env_path.join("library");
        fs_err::tokio::create_dir_all(&library)
            .await
            .context("failed to create R library directory")?;

        for dep in deps {
            let (name, version) = dep.parse();
            let expr = match version {
                Some(v) => format!(
                    ".libPaths(c('{lib}', .libPaths())); remotes::install_version('{name}', version='{v}', lib='{lib}')",
                    lib = library.display(),
                ),
                None => format!(
                    ".libPaths(c('{lib}', .libPaths())); install.packages('{name}', lib='{lib}', repos='https://cloud.r-project.org')",
                    lib = library.display(),
                ),
            };
            Cmd::new("R", format!("install R package {dep}"))
                .arg("--vanilla")
                .arg("-e")
                .arg(expr)
                .output()
                .await
                .map_err(|source| Error::DependencyItemInstallation {
                    language: self.get_name(),
                    kind: "package",
                    item: dep.to_string(),
                    source: source.into(),
                })?;
        }
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        let env_path = resolve_env_path(ctx, self.language(), ctx.version)?;
        let canonical = canonicalize_version(self.language(), ctx.version);

        if self.check_environment_health_at(&env_path, &canonical).await {
            return Ok(env_path);
        }

        if fs_err::tokio::try_exists(&env_path).await.unwrap_or(false) {
            fs_err::tokio::remove_dir_all(&env_path)
                .await
                .map_err(|source| Error::BrokenEnvironmentRemoval { source })?;
        }

        if which("Rscript").is_err() {
            anyhow::bail!(Error::ToolchainAbsentShort { language: "r" });
        }

        create_environment_directory(self.get_name(), &env_path).await?;

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
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn no_op_deps_do_not_touch_the_filesystem() {
        let env = tempdir().unwrap();
        let env_path = env.path().join("renv-default");
        R.install_dependencies(&env_path, &[]).await.unwrap();
        assert!(!env_path.exists());
    }

    #[tokio::test]
    async fn non_default_version_fails_health_regardless_of_directory_state() {
        let err = R.check_health(Path::new("/does/not/matter"), "4.2.0").await.unwrap_err();
        assert!(err.to_string().contains("r only supports version 'default'"));
    }

    #[tokio::test]
    async fn naming_accepts_system_but_health_rejects_it() {
        let repo = tempdir().unwrap();
        let env_path = resolve_env_path(
            &SetupContext {
                cache_dir: None,
                version: "system",
                repo_path: Some(repo.path()),
                repo_url: "",
                additional_deps: &[],
            },
            Language::R,
            "system",
        )
        .unwrap();
        assert_eq!(env_path, repo.path().join("renv-system"));

        fs_err::tokio::create_dir_all(&env_path).await.unwrap();
        let err = R.check_health(&env_path, "system").await.unwrap_err();
        assert!(err.to_string().contains("r only supports version 'default'"));
    }
}
