use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{Language, LanguageHandler, reuse_remove_recreate, resolve_env_path};
use crate::process::Cmd;

/// Installs CPAN modules into a `local::lib`-style tree under the
/// environment directory, preferring `cpanm` over plain `cpan` when both are
/// present.
pub struct Perl;

pub static PERL: Perl = Perl;

const BASE: Base = Base::new("Perl", "perl", "perl", "--version", "");

fn lib_dir(env_path: &Path) -> PathBuf {
    env_path.join("lib").join("perl5")
}

impl LanguageHandler for Perl {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Perl
    }

    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        let lib = lib_dir(env_path);
        if !lib.is_dir() {
            anyhow::bail!(Error::HealthVerification {
                message: "Perl environment lib/perl5 is missing".to_string(),
                source: None,
            });
        }
        let perl = self.environment_bin_path(env_path).join("perl");
        let perl = if perl.exists() { perl } else { PathBuf::from("perl") };
        Cmd::new(&perl, "verify perl5 include path")
            .arg("-I")
            .arg(&lib)
            .arg("-e")
            .arg("1")
            .output()
            .await
            .map_err(|source| Error::HealthVerification {
                message: "perl -I lib/perl5 -e 1 failed".to_string(),
                source: Some(source.into()),
            })?;
        Ok(())
    }

    async fn install_dependencies(&self, env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        if deps.is_empty() {
            return Ok(());
        }
        let lib = lib_dir(env_path);
        fs_err::tokio::create_dir_all(&lib)
            .await
            .context("failed to create lib directory")?;

        let installer = if which("cpanm").is_ok() {
            "cpanm"
        } else if which("cpan").is_ok() {
            "cpan"
        } else {
            anyhow::bail!("neither cpanm nor cpan found");
        };

        for dep in deps {
            let mut cmd = Cmd::new(installer, format!("install Perl module {dep}"));
            if installer == "cpanm" {
                cmd.arg(format!("--local-lib={}", env_path.display()))
                    .arg("--notest")
                    .arg(dep.as_str());
            } else {
                cmd.env("PERL_MM_OPT", format!("INSTALL_BASE={}", env_path.display()))
                    .arg(dep.as_str());
            }
            cmd.output().await.map_err(|source| Error::DependencyItemInstallation {
                language: self.get_name(),
                kind: "module",
                item: dep.to_string(),
                source: source.into(),
            })?;
        }
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        let env_path = resolve_env_path(ctx, self.language(), ctx.version)?;
        reuse_remove_recreate(self, &env_path, ctx.version, ctx.additional_deps).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn no_op_deps_do_not_touch_the_filesystem() {
        let env = tempdir().unwrap();
        let env_path = env.path().join("perlenv-default");
        PERL.install_dependencies(&env_path, &[]).await.unwrap();
        assert!(!env_path.exists());
    }

    #[tokio::test]
    async fn env_path_uses_the_perlenv_prefix() {
        let repo = tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: None,
            version: "default",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let env_path = resolve_env_path(&ctx, Language::Perl, ctx.version).unwrap();
        assert_eq!(env_path, repo.path().join("perlenv-default"));
    }

    #[tokio::test]
    async fn missing_lib_dir_fails_health_check() {
        let env = tempdir().unwrap();
        let err = PERL.check_health(env.path(), "default").await.unwrap_err();
        assert!(err.to_string().contains("lib/perl5 is missing"));
    }

    #[tokio::test]
    async fn reuse_preserves_a_healthy_environment() {
        let repo = tempdir().unwrap();
        let env_path = repo.path().join("perlenv-default");
        let bin = env_path.join("bin");
        fs_err::tokio::create_dir_all(&bin).await.unwrap();
        fs_err::tokio::create_dir_all(lib_dir(&env_path)).await.unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let script = bin.join("perl");
            fs_err::tokio::write(&script, "#!/bin/sh\nexit 0\n").await.unwrap();
            let mut perms = fs_err::tokio::metadata(&script).await.unwrap().permissions();
            perms.set_mode(0o755);
            fs_err::tokio::set_permissions(&script, perms).await.unwrap();

            let ctx = SetupContext {
                cache_dir: None,
                version: "default",
                repo_path: Some(repo.path()),
                repo_url: "",
                additional_deps: &[],
            };
            let returned = PERL.setup_environment_with_repo(&ctx).await.unwrap();
            assert_eq!(returned, env_path);
        }
    }
}
