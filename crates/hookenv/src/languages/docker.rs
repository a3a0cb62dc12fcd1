use std::path::{Path, PathBuf};

use anyhow::Result;
use which::which;

use crate::descriptor::{Base, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler, create_environment_directory};
use crate::name::{canonicalize_version, repository_environment_name};
use crate::process::Cmd;

/// A stub environment rooted under the cache directory, existing only so
/// the daemon-accessibility check has somewhere to be reported against.
/// Setup never talks to the daemon or pulls an image; it just materializes
/// a directory. Unlike [`super::docker_image::DockerImage`], the repo
/// itself is never the root.
pub struct Docker;

pub static DOCKER: Docker = Docker;

const BASE: Base = Base::new("Docker", "docker", "docker", "--version", "");

impl LanguageHandler for Docker {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Docker
    }

    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        if !env_path.is_dir() {
            anyhow::bail!(Error::HealthVerification {
                message: "Docker environment directory is missing".to_string(),
                source: None,
            });
        }
        if which("docker").is_err() {
            anyhow::bail!(Error::ToolchainAbsent { language: "docker" });
        }
        Cmd::new("docker", "docker info")
            .arg("info")
            .output()
            .await
            .map_err(|_| anyhow::anyhow!("docker daemon is not accessible"))?;
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        let root = ctx.cache_dir.or(ctx.repo_path).ok_or(Error::UsageError)?;
        let name = repository_environment_name(self.language(), ctx.version);
        let env_path = root.join(name);
        let canonical = canonicalize_version(self.language(), ctx.version);

        if self.check_environment_health_at(&env_path, &canonical).await {
            return Ok(env_path);
        }

        if fs_err::tokio::try_exists(&env_path).await.unwrap_or(false) {
            fs_err::tokio::remove_dir_all(&env_path)
                .await
                .map_err(|source| Error::BrokenEnvironmentRemoval { source })?;
        }

        create_environment_directory(self.get_name(), &env_path).await?;
        Ok(env_path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn setup_creates_a_stub_directory_under_the_cache() {
        let cache = tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: Some(cache.path()),
            version: "",
            repo_path: None,
            repo_url: "",
            additional_deps: &[],
        };
        let env_path = DOCKER.setup_environment_with_repo(&ctx).await.unwrap();
        assert!(env_path.starts_with(cache.path()));
        assert!(env_path.is_dir());
    }

    #[tokio::test]
    async fn setup_fails_with_usage_error_when_both_roots_are_absent() {
        let ctx = SetupContext {
            cache_dir: None,
            version: "",
            repo_path: None,
            repo_url: "",
            additional_deps: &[],
        };
        let err = DOCKER.setup_environment_with_repo(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("cacheDir and repoPath"));
    }

    #[tokio::test]
    async fn check_health_requires_an_existing_directory_before_probing_docker() {
        let missing = std::env::temp_dir().join("hookenv-docker-missing-dir");
        let err = DOCKER.check_health(&missing, "default").await.unwrap_err();
        assert!(err.to_string().contains("environment directory is missing"));
    }
}
