use std::path::{Path, PathBuf};

use anyhow::Result;
use which::which;

use crate::descriptor::{Base, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler};
use crate::process::Cmd;

/// References a pre-built image and never materializes an environment
/// directory of its own; `setup_environment_with_repo` returns the repo
/// root unchanged once the `docker` executable is confirmed present.
/// `check_health` additionally confirms the daemon itself is reachable.
pub struct DockerImage;

pub static DOCKER_IMAGE: DockerImage = DockerImage;

const BASE: Base = Base::new("Docker-Image", "docker", "docker", "--version", "");

impl LanguageHandler for DockerImage {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::DockerImage
    }

    async fn check_health(&self, _env_path: &Path, _version: &str) -> Result<()> {
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
        if which("docker").is_err() {
            anyhow::bail!(Error::ToolchainAbsent { language: "docker" });
        }
        ctx.root().map(Path::to_path_buf).ok_or_else(|| Error::UsageError.into())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn setup_returns_the_repo_root_unchanged_when_docker_is_present() {
        if which("docker").is_err() {
            return;
        }
        let repo = tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: None,
            version: "",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let env_path = DOCKER_IMAGE.setup_environment_with_repo(&ctx).await.unwrap();
        assert_eq!(env_path, repo.path());
        assert_eq!(std::fs::read_dir(repo.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn setup_fails_with_usage_error_when_both_roots_are_absent() {
        if which("docker").is_err() {
            return;
        }
        let ctx = SetupContext {
            cache_dir: None,
            version: "",
            repo_path: None,
            repo_url: "",
            additional_deps: &[],
        };
        let err = DOCKER_IMAGE.setup_environment_with_repo(&ctx).await.unwrap_err();
        assert!(err.to_string().contains("cacheDir and repoPath"));
    }
}
