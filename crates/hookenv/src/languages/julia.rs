use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler, reuse_remove_recreate, resolve_env_path};
use crate::process::Cmd;

/// Manages a `Project.toml`/`Manifest.toml` pair the way `Pkg.jl` itself
/// would. When a handler reuses an environment with no
/// `Project.toml` at all (no deps were ever installed into it), health
/// verification stops at "the directory exists" rather than invoking Julia.
pub struct Julia;

pub static JULIA: Julia = Julia;

const BASE: Base = Base::new("Julia", "julia", "julia", "--version", "");

impl LanguageHandler for Julia {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Julia
    }

    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        if !env_path.is_dir() {
            anyhow::bail!(Error::HealthVerification {
                message: "Julia environment directory is missing".to_string(),
                source: None,
            });
        }

        let project_toml = env_path.join("Project.toml");
        if !fs_err::tokio::try_exists(&project_toml).await.unwrap_or(false) {
            return Ok(());
        }

        let manifest_toml = env_path.join("Manifest.toml");
        if !fs_err::tokio::try_exists(&manifest_toml).await.unwrap_or(false) {
            anyhow::bail!("Manifest.toml missing");
        }

        Cmd::new("julia", "verify julia project")
            .arg(format!("--project={}", env_path.display()))
            .arg("-e")
            .arg("using Pkg; Pkg.status()")
            .output()
            .await
            .context("julia project verification failed")?;
        Ok(())
    }

    async fn install_dependencies(&self, env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        let project_toml = env_path.join("Project.toml");
        let mut contents = String::from("[deps]\n");
        for dep in deps {
            contents.push_str(&format!("{dep} = \"*\"\n"));
        }
        fs_err::tokio::write(&project_toml, contents)
            .await
            .context("failed to create Project.toml")?;

        Cmd::new("julia", "julia Pkg.instantiate")
            .arg(format!("--project={}", env_path.display()))
            .arg("-e")
            .arg("using Pkg; Pkg.instantiate()")
            .output()
            .await
            .context("failed to instantiate Julia project")?;
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        let env_path = resolve_env_path(ctx, self.language(), ctx.version)?;
        reuse_remove_recreate(self, &env_path, ctx.version, ctx.additional_deps).await
    }
}
