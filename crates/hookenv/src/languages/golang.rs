use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler, create_environment_directory};
use crate::name::repository_environment_name;
use crate::process::Cmd;

/// Bridges hooks that want a pinned `go`/`gofmt` pair without this crate
/// installing the Go toolchain itself: the system binaries are symlinked
/// into a per-cache environment directory, which exists only to carry a
/// private `GOCACHE`/`GOPATH`.
pub struct Golang;

pub static GOLANG: Golang = Golang;

const BASE: Base = Base::new("Go", "go", "go", "version", "");

#[cfg(unix)]
async fn symlink_exe(original: &Path, link: &Path) -> std::io::Result<()> {
    tokio::fs::symlink(original, link).await
}

#[cfg(windows)]
async fn symlink_exe(original: &Path, link: &Path) -> std::io::Result<()> {
    tokio::fs::symlink_file(original, link).await
}

impl Golang {
    fn bin_dir(env_path: &Path) -> PathBuf {
        env_path.join("bin")
    }

    async fn relink(go_link: &Path) -> Result<()> {
        let system_go = which("go").map_err(|_| Error::ToolchainAbsent { language: "go" })?;
        if fs_err::tokio::try_exists(go_link).await.unwrap_or(false) {
            fs_err::tokio::remove_file(go_link).await?;
        }
        symlink_exe(&system_go, go_link).await?;
        Ok(())
    }
}

impl LanguageHandler for Golang {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Golang
    }

    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        let go_link = Self::bin_dir(env_path).join("go");

        // A symlink whose target vanished still satisfies `try_exists` as
        // false via `fs::metadata`; repair it before probing.
        let broken = fs_err::tokio::symlink_metadata(&go_link).await.is_ok()
            && fs_err::tokio::metadata(&go_link).await.is_err();
        if broken {
            Self::relink(&go_link).await?;
        }
        if !go_link.exists() {
            anyhow::bail!(Error::HealthVerification {
                message: "Go environment bin/go is missing".to_string(),
                source: None,
            });
        }

        let gocache = env_path.join("gocache");
        let gopath = env_path.join("gopath");
        create_environment_directory(self.get_name(), &gocache).await?;
        create_environment_directory(self.get_name(), &gopath).await?;

        Cmd::new(&go_link, "go version")
            .arg("version")
            .env("GOCACHE", &gocache)
            .env("GOPATH", &gopath)
            .output()
            .await
            .map_err(|source| Error::HealthVerification {
                message: "go version check failed".to_string(),
                source: Some(source.into()),
            })?;
        Ok(())
    }

    async fn install_dependencies(&self, _env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        if !deps.is_empty() {
            warn!(
                "golang handler does not install additional dependencies; ignoring {} entries",
                deps.len()
            );
        }
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        let root = ctx.cache_dir.or(ctx.repo_path).ok_or(Error::UsageError)?;
        let name = repository_environment_name(self.language(), ctx.version);
        let env_path = root.join(name);

        if self.check_environment_health_at(&env_path, ctx.version).await {
            return Ok(env_path);
        }

        if fs_err::tokio::try_exists(&env_path).await.unwrap_or(false) {
            fs_err::tokio::remove_dir_all(&env_path)
                .await
                .map_err(|source| Error::BrokenEnvironmentRemoval { source })?;
        }

        if which("go").is_err() {
            anyhow::bail!(Error::ToolchainAbsent { language: "go" });
        }

        let bin_dir = Self::bin_dir(&env_path);
        create_environment_directory(self.get_name(), &bin_dir).await?;
        Self::relink(&bin_dir.join("go")).await?;
        if let Ok(system_gofmt) = which("gofmt") {
            let _ = symlink_exe(&system_gofmt, &bin_dir.join("gofmt")).await;
        }

        if !ctx.additional_deps.is_empty() {
            self.install_dependencies(&env_path, ctx.additional_deps).await?;
        }

        Ok(env_path)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn additional_deps_are_ignored_with_a_warning_not_an_error() {
        let deps = vec![DependencySpec::new("golang.org/x/tools/cmd/goimports")];
        GOLANG
            .install_dependencies(Path::new("/irrelevant"), &deps)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn missing_go_binary_fails_health_check() {
        let env = tempdir().unwrap();
        let err = GOLANG.check_health(env.path(), "default").await.unwrap_err();
        assert!(err.to_string().contains("bin/go is missing"));
    }
}
