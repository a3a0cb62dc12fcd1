use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{
    Language, LanguageHandler, install_test_mode_enabled, reuse_remove_recreate, resolve_env_path,
};
use crate::process::Cmd;

/// The ABI directory component luarocks trees use (`lua_modules/share/lua/<ver>/...`).
/// Fabrication in test mode doesn't query the host Lua, so it stands in for
/// whatever the real `lua -v` would report.
const LUA_ABI_VERSION: &str = "5.1";

/// Installs rocks into a private `lua_modules` tree via `luarocks --tree`.
/// Shares the Swift test-mode fabrication short-circuit.
pub struct Lua;

pub static LUA: Lua = Lua;

const BASE: Base = Base::new("Lua", "lua", "lua", "-v", "");

fn lua_modules_dir(env_path: &Path) -> PathBuf {
    env_path.join("lua_modules")
}

impl LanguageHandler for Lua {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Lua
    }

    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        if which("lua").is_err() {
            anyhow::bail!(Error::ToolchainAbsent { language: "lua" });
        }
        if !env_path.is_dir() {
            anyhow::bail!(Error::HealthVerification {
                message: "Lua environment directory is missing".to_string(),
                source: None,
            });
        }
        let modules = lua_modules_dir(env_path);
        if fs_err::tokio::try_exists(&modules).await.unwrap_or(false) {
            let modules_lib = modules.join("lib").join("lua");
            if !fs_err::tokio::try_exists(&modules_lib).await.unwrap_or(false) {
                anyhow::bail!(Error::HealthVerification {
                    message: "Lua environment lua_modules/lib/lua is missing".to_string(),
                    source: None,
                });
            }
        }
        Ok(())
    }

    async fn install_dependencies(&self, env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        if deps.is_empty() {
            return Ok(());
        }
        if which("luarocks").is_err() {
            anyhow::bail!("luarocks not found");
        }
        let modules = lua_modules_dir(env_path);
        fs_err::tokio::create_dir_all(&modules)
            .await
            .context("failed to create lua_modules directory")?;

        for dep in deps {
            let (name, version) = dep.parse();

            if install_test_mode_enabled(env_path) {
                let stub_dir = modules.join("share").join("lua").join(LUA_ABI_VERSION);
                fs_err::tokio::create_dir_all(&stub_dir)
                    .await
                    .context("failed to fabricate lua_modules/share tree")?;
                fs_err::tokio::write(stub_dir.join(format!("{name}.lua")), "-- fabricated by test mode\n")
                    .await
                    .context("failed to fabricate lua module stub")?;
                continue;
            }

            let mut cmd = Cmd::new("luarocks", format!("install Lua rock {dep}"));
            cmd.arg("--tree").arg(&modules).arg("install").arg(name);
            if let Some(version) = version {
                cmd.arg(version);
            }
            cmd.output().await.map_err(|source| Error::DependencyItemInstallation {
                language: self.get_name(),
                kind: "rock",
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
        let env_path = env.path().join("lua-default");
        LUA.install_dependencies(&env_path, &[]).await.unwrap();
        assert!(!env_path.exists());
    }

    #[tokio::test]
    async fn lua_modules_absent_is_healthy_when_directory_and_runtime_exist() {
        let env = tempdir().unwrap();
        if which("lua").is_ok() {
            LUA.check_health(env.path(), "default").await.unwrap();
        }
    }

    #[tokio::test]
    async fn lua_modules_without_lib_lua_fails_health() {
        let env = tempdir().unwrap();
        fs_err::tokio::create_dir_all(lua_modules_dir(env.path())).await.unwrap();
        if which("lua").is_ok() {
            let err = LUA.check_health(env.path(), "default").await.unwrap_err();
            assert!(err.to_string().contains("lua_modules/lib/lua is missing"));
        }
    }

    #[tokio::test]
    async fn test_mode_fabricates_one_file_per_dependency() {
        unsafe { std::env::set_var(hookenv_consts::env_vars::EnvVars::GO_PRE_COMMIT_TEST_MODE, "true") };
        let env = tempdir().unwrap();
        let deps = vec![DependencySpec::new("luasocket"), DependencySpec::new("luafilesystem==1.8.0")];
        LUA.install_dependencies(env.path(), &deps).await.unwrap();

        let stub_dir = lua_modules_dir(env.path()).join("share").join("lua").join(LUA_ABI_VERSION);
        assert!(stub_dir.join("luasocket.lua").is_file());
        assert!(stub_dir.join("luafilesystem.lua").is_file());
        unsafe { std::env::remove_var(hookenv_consts::env_vars::EnvVars::GO_PRE_COMMIT_TEST_MODE) };
    }
}
