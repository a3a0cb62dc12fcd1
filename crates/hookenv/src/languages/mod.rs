use std::path::{Path, PathBuf};

use anyhow::Result;
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::name::repository_environment_name;

pub mod conda;
pub mod docker;
pub mod docker_image;
pub mod fail;
pub mod generic;
pub mod golang;
pub mod julia;
pub mod lua;
pub mod perl;
pub mod pygrep;
pub mod r;
pub mod script;
pub mod swift;
pub mod system;

/// `pre-commit`-style language support this crate implements. Languages whose
/// handler installs the language runtime itself (Python, Ruby, Node, Rust)
/// are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Language {
    Perl,
    Julia,
    R,
    Swift,
    Golang,
    Lua,
    Conda,
    Docker,
    DockerImage,
    Pygrep,
    System,
    Generic,
    Script,
    Fail,
}

/// Every `LanguageHandler` method is `async fn`, which desugars to a
/// return-position `impl Future` and is not object-safe: `&dyn
/// LanguageHandler` can't be formed on stable Rust without boxing the
/// futures. Instead of boxing, `Language` dispatches each operation itself
/// by matching over the concrete `static` handler instances and `.await`ing
/// per arm, the same way `prek::languages::Language` matches over its own
/// `static` handlers rather than returning a trait object.
impl Language {
    /// Whether this language ever produces a separate on-disk environment.
    pub fn needs_environment_setup(self) -> bool {
        match self {
            Language::Perl => perl::PERL.needs_environment_setup(),
            Language::Julia => julia::JULIA.needs_environment_setup(),
            Language::R => r::R.needs_environment_setup(),
            Language::Swift => swift::SWIFT.needs_environment_setup(),
            Language::Golang => golang::GOLANG.needs_environment_setup(),
            Language::Lua => lua::LUA.needs_environment_setup(),
            Language::Conda => conda::CONDA.needs_environment_setup(),
            Language::Docker => docker::DOCKER.needs_environment_setup(),
            Language::DockerImage => docker_image::DOCKER_IMAGE.needs_environment_setup(),
            Language::Pygrep => pygrep::PYGREP.needs_environment_setup(),
            Language::System => system::SYSTEM.needs_environment_setup(),
            Language::Generic => generic::GENERIC.needs_environment_setup(),
            Language::Script => script::SCRIPT.needs_environment_setup(),
            Language::Fail => fail::FAIL.needs_environment_setup(),
        }
    }

    /// `IsRuntimeAvailable`: whether this language's probe executable
    /// resolves in the host's search path.
    pub async fn is_runtime_available(self) -> bool {
        match self {
            Language::Perl => perl::PERL.is_runtime_available().await,
            Language::Julia => julia::JULIA.is_runtime_available().await,
            Language::R => r::R.is_runtime_available().await,
            Language::Swift => swift::SWIFT.is_runtime_available().await,
            Language::Golang => golang::GOLANG.is_runtime_available().await,
            Language::Lua => lua::LUA.is_runtime_available().await,
            Language::Conda => conda::CONDA.is_runtime_available().await,
            Language::Docker => docker::DOCKER.is_runtime_available().await,
            Language::DockerImage => docker_image::DOCKER_IMAGE.is_runtime_available().await,
            Language::Pygrep => pygrep::PYGREP.is_runtime_available().await,
            Language::System => system::SYSTEM.is_runtime_available().await,
            Language::Generic => generic::GENERIC.is_runtime_available().await,
            Language::Script => script::SCRIPT.is_runtime_available().await,
            Language::Fail => fail::FAIL.is_runtime_available().await,
        }
    }

    /// `CheckHealth`.
    pub async fn check_health(self, env_path: &Path, version: &str) -> Result<()> {
        match self {
            Language::Perl => perl::PERL.check_health(env_path, version).await,
            Language::Julia => julia::JULIA.check_health(env_path, version).await,
            Language::R => r::R.check_health(env_path, version).await,
            Language::Swift => swift::SWIFT.check_health(env_path, version).await,
            Language::Golang => golang::GOLANG.check_health(env_path, version).await,
            Language::Lua => lua::LUA.check_health(env_path, version).await,
            Language::Conda => conda::CONDA.check_health(env_path, version).await,
            Language::Docker => docker::DOCKER.check_health(env_path, version).await,
            Language::DockerImage => docker_image::DOCKER_IMAGE.check_health(env_path, version).await,
            Language::Pygrep => pygrep::PYGREP.check_health(env_path, version).await,
            Language::System => system::SYSTEM.check_health(env_path, version).await,
            Language::Generic => generic::GENERIC.check_health(env_path, version).await,
            Language::Script => script::SCRIPT.check_health(env_path, version).await,
            Language::Fail => fail::FAIL.check_health(env_path, version).await,
        }
    }

    /// Internal reuse-decision probe: runs [`Language::check_health`] and
    /// downgrades any error to `false`.
    pub async fn check_environment_health_at(self, env_path: &Path, version: &str) -> bool {
        match self {
            Language::Perl => perl::PERL.check_environment_health_at(env_path, version).await,
            Language::Julia => julia::JULIA.check_environment_health_at(env_path, version).await,
            Language::R => r::R.check_environment_health_at(env_path, version).await,
            Language::Swift => swift::SWIFT.check_environment_health_at(env_path, version).await,
            Language::Golang => golang::GOLANG.check_environment_health_at(env_path, version).await,
            Language::Lua => lua::LUA.check_environment_health_at(env_path, version).await,
            Language::Conda => conda::CONDA.check_environment_health_at(env_path, version).await,
            Language::Docker => docker::DOCKER.check_environment_health_at(env_path, version).await,
            Language::DockerImage => {
                docker_image::DOCKER_IMAGE.check_environment_health_at(env_path, version).await
            }
            Language::Pygrep => pygrep::PYGREP.check_environment_health_at(env_path, version).await,
            Language::System => system::SYSTEM.check_environment_health_at(env_path, version).await,
            Language::Generic => generic::GENERIC.check_environment_health_at(env_path, version).await,
            Language::Script => script::SCRIPT.check_environment_health_at(env_path, version).await,
            Language::Fail => fail::FAIL.check_environment_health_at(env_path, version).await,
        }
    }

    /// `CheckEnvironmentHealth`: assumes the canonical `"default"` version.
    pub async fn check_environment_health(self, env_path: &Path) -> bool {
        match self {
            Language::Perl => perl::PERL.check_environment_health(env_path).await,
            Language::Julia => julia::JULIA.check_environment_health(env_path).await,
            Language::R => r::R.check_environment_health(env_path).await,
            Language::Swift => swift::SWIFT.check_environment_health(env_path).await,
            Language::Golang => golang::GOLANG.check_environment_health(env_path).await,
            Language::Lua => lua::LUA.check_environment_health(env_path).await,
            Language::Conda => conda::CONDA.check_environment_health(env_path).await,
            Language::Docker => docker::DOCKER.check_environment_health(env_path).await,
            Language::DockerImage => docker_image::DOCKER_IMAGE.check_environment_health(env_path).await,
            Language::Pygrep => pygrep::PYGREP.check_environment_health(env_path).await,
            Language::System => system::SYSTEM.check_environment_health(env_path).await,
            Language::Generic => generic::GENERIC.check_environment_health(env_path).await,
            Language::Script => script::SCRIPT.check_environment_health(env_path).await,
            Language::Fail => fail::FAIL.check_environment_health(env_path).await,
        }
    }

    /// No-op for every handler today; intended for cache accounting by the
    /// orchestrator.
    pub async fn pre_initialize_environment_with_repo_info(self, ctx: &SetupContext<'_>) -> Result<()> {
        match self {
            Language::Perl => perl::PERL.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Julia => julia::JULIA.pre_initialize_environment_with_repo_info(ctx).await,
            Language::R => r::R.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Swift => swift::SWIFT.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Golang => golang::GOLANG.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Lua => lua::LUA.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Conda => conda::CONDA.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Docker => docker::DOCKER.pre_initialize_environment_with_repo_info(ctx).await,
            Language::DockerImage => {
                docker_image::DOCKER_IMAGE.pre_initialize_environment_with_repo_info(ctx).await
            }
            Language::Pygrep => pygrep::PYGREP.pre_initialize_environment_with_repo_info(ctx).await,
            Language::System => system::SYSTEM.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Generic => generic::GENERIC.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Script => script::SCRIPT.pre_initialize_environment_with_repo_info(ctx).await,
            Language::Fail => fail::FAIL.pre_initialize_environment_with_repo_info(ctx).await,
        }
    }

    /// `InstallDependencies`.
    pub async fn install_dependencies(self, env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        match self {
            Language::Perl => perl::PERL.install_dependencies(env_path, deps).await,
            Language::Julia => julia::JULIA.install_dependencies(env_path, deps).await,
            Language::R => r::R.install_dependencies(env_path, deps).await,
            Language::Swift => swift::SWIFT.install_dependencies(env_path, deps).await,
            Language::Golang => golang::GOLANG.install_dependencies(env_path, deps).await,
            Language::Lua => lua::LUA.install_dependencies(env_path, deps).await,
            Language::Conda => conda::CONDA.install_dependencies(env_path, deps).await,
            Language::Docker => docker::DOCKER.install_dependencies(env_path, deps).await,
            Language::DockerImage => docker_image::DOCKER_IMAGE.install_dependencies(env_path, deps).await,
            Language::Pygrep => pygrep::PYGREP.install_dependencies(env_path, deps).await,
            Language::System => system::SYSTEM.install_dependencies(env_path, deps).await,
            Language::Generic => generic::GENERIC.install_dependencies(env_path, deps).await,
            Language::Script => script::SCRIPT.install_dependencies(env_path, deps).await,
            Language::Fail => fail::FAIL.install_dependencies(env_path, deps).await,
        }
    }

    /// `SetupEnvironmentWithRepo`.
    pub async fn setup_environment_with_repo(self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        match self {
            Language::Perl => perl::PERL.setup_environment_with_repo(ctx).await,
            Language::Julia => julia::JULIA.setup_environment_with_repo(ctx).await,
            Language::R => r::R.setup_environment_with_repo(ctx).await,
            Language::Swift => swift::SWIFT.setup_environment_with_repo(ctx).await,
            Language::Golang => golang::GOLANG.setup_environment_with_repo(ctx).await,
            Language::Lua => lua::LUA.setup_environment_with_repo(ctx).await,
            Language::Conda => conda::CONDA.setup_environment_with_repo(ctx).await,
            Language::Docker => docker::DOCKER.setup_environment_with_repo(ctx).await,
            Language::DockerImage => docker_image::DOCKER_IMAGE.setup_environment_with_repo(ctx).await,
            Language::Pygrep => pygrep::PYGREP.setup_environment_with_repo(ctx).await,
            Language::System => system::SYSTEM.setup_environment_with_repo(ctx).await,
            Language::Generic => generic::GENERIC.setup_environment_with_repo(ctx).await,
            Language::Script => script::SCRIPT.setup_environment_with_repo(ctx).await,
            Language::Fail => fail::FAIL.setup_environment_with_repo(ctx).await,
        }
    }

    /// `SetupEnvironmentWithRepoInfo`: defaults to `setup_environment_with_repo`.
    pub async fn setup_environment_with_repo_info(self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        match self {
            Language::Perl => perl::PERL.setup_environment_with_repo_info(ctx).await,
            Language::Julia => julia::JULIA.setup_environment_with_repo_info(ctx).await,
            Language::R => r::R.setup_environment_with_repo_info(ctx).await,
            Language::Swift => swift::SWIFT.setup_environment_with_repo_info(ctx).await,
            Language::Golang => golang::GOLANG.setup_environment_with_repo_info(ctx).await,
            Language::Lua => lua::LUA.setup_environment_with_repo_info(ctx).await,
            Language::Conda => conda::CONDA.setup_environment_with_repo_info(ctx).await,
            Language::Docker => docker::DOCKER.setup_environment_with_repo_info(ctx).await,
            Language::DockerImage => docker_image::DOCKER_IMAGE.setup_environment_with_repo_info(ctx).await,
            Language::Pygrep => pygrep::PYGREP.setup_environment_with_repo_info(ctx).await,
            Language::System => system::SYSTEM.setup_environment_with_repo_info(ctx).await,
            Language::Generic => generic::GENERIC.setup_environment_with_repo_info(ctx).await,
            Language::Script => script::SCRIPT.setup_environment_with_repo_info(ctx).await,
            Language::Fail => fail::FAIL.setup_environment_with_repo_info(ctx).await,
        }
    }

    /// `GetEnvironmentBinPath`.
    pub fn environment_bin_path(self, env_path: &Path) -> PathBuf {
        match self {
            Language::Perl => perl::PERL.environment_bin_path(env_path),
            Language::Julia => julia::JULIA.environment_bin_path(env_path),
            Language::R => r::R.environment_bin_path(env_path),
            Language::Swift => swift::SWIFT.environment_bin_path(env_path),
            Language::Golang => golang::GOLANG.environment_bin_path(env_path),
            Language::Lua => lua::LUA.environment_bin_path(env_path),
            Language::Conda => conda::CONDA.environment_bin_path(env_path),
            Language::Docker => docker::DOCKER.environment_bin_path(env_path),
            Language::DockerImage => docker_image::DOCKER_IMAGE.environment_bin_path(env_path),
            Language::Pygrep => pygrep::PYGREP.environment_bin_path(env_path),
            Language::System => system::SYSTEM.environment_bin_path(env_path),
            Language::Generic => generic::GENERIC.environment_bin_path(env_path),
            Language::Script => script::SCRIPT.environment_bin_path(env_path),
            Language::Fail => fail::FAIL.environment_bin_path(env_path),
        }
    }

    /// `GetName`.
    pub fn get_name(self) -> &'static str {
        match self {
            Language::Perl => perl::PERL.get_name(),
            Language::Julia => julia::JULIA.get_name(),
            Language::R => r::R.get_name(),
            Language::Swift => swift::SWIFT.get_name(),
            Language::Golang => golang::GOLANG.get_name(),
            Language::Lua => lua::LUA.get_name(),
            Language::Conda => conda::CONDA.get_name(),
            Language::Docker => docker::DOCKER.get_name(),
            Language::DockerImage => docker_image::DOCKER_IMAGE.get_name(),
            Language::Pygrep => pygrep::PYGREP.get_name(),
            Language::System => system::SYSTEM.get_name(),
            Language::Generic => generic::GENERIC.get_name(),
            Language::Script => script::SCRIPT.get_name(),
            Language::Fail => fail::FAIL.get_name(),
        }
    }

    /// `GetExecutableName`.
    pub fn get_executable_name(self) -> &'static str {
        match self {
            Language::Perl => perl::PERL.get_executable_name(),
            Language::Julia => julia::JULIA.get_executable_name(),
            Language::R => r::R.get_executable_name(),
            Language::Swift => swift::SWIFT.get_executable_name(),
            Language::Golang => golang::GOLANG.get_executable_name(),
            Language::Lua => lua::LUA.get_executable_name(),
            Language::Conda => conda::CONDA.get_executable_name(),
            Language::Docker => docker::DOCKER.get_executable_name(),
            Language::DockerImage => docker_image::DOCKER_IMAGE.get_executable_name(),
            Language::Pygrep => pygrep::PYGREP.get_executable_name(),
            Language::System => system::SYSTEM.get_executable_name(),
            Language::Generic => generic::GENERIC.get_executable_name(),
            Language::Script => script::SCRIPT.get_executable_name(),
            Language::Fail => fail::FAIL.get_executable_name(),
        }
    }
}

/// The capability set every language handler exposes.
///
/// `Base` is embedded by value in every implementor rather than being a
/// trait supertype, since Rust has no implementation inheritance; the
/// default method bodies below call through [`LanguageHandler::base`] to get
/// the shared policy, and a handler overrides only the operations where its
/// language differs.
pub trait LanguageHandler: Send + Sync {
    fn base(&self) -> &Base;
    fn language(&self) -> Language;

    /// Whether this language ever produces a separate on-disk environment.
    fn needs_environment_setup(&self) -> bool {
        !repository_environment_name(self.language(), "default").is_empty()
    }

    /// True iff the probe executable resolves in the host's search path.
    /// Handlers with an empty `executable_name` return `false` by default;
    /// `System`/`Script`/`Fail` override to `true`.
    async fn is_runtime_available(&self) -> bool {
        let exe = self.base().executable_name;
        if exe.is_empty() {
            return false;
        }
        which(exe).is_ok()
    }

    /// The per-language, fallible health probe. Empty `env_path` is an error
    /// for path-based variants. The default implements the generic contract
    /// shared by every handler that doesn't override it: if `executable_name`
    /// is empty, the environment directory merely has to exist; otherwise the probe
    /// executable (preferring the copy under the environment's own bin
    /// directory, falling back to the one on `PATH`) must run successfully
    /// with `version_flag`. Handlers with richer health criteria (Perl,
    /// Julia, R, Swift, Golang, Lua, Conda, Docker, Pygrep) override this.
    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        let base = self.base();
        if env_path.as_os_str().is_empty() {
            anyhow::bail!(Error::HealthVerification {
                message: format!("{} environment path is empty", base.name),
                source: None,
            });
        }
        if base.executable_name.is_empty() {
            if env_path.is_dir() {
                return Ok(());
            }
            anyhow::bail!(Error::HealthVerification {
                message: format!("{} environment directory is missing", base.name),
                source: None,
            });
        }

        let local = self.environment_bin_path(env_path).join(base.executable_name);
        let exe = if local.exists() { local } else { PathBuf::from(base.executable_name) };
        crate::process::Cmd::new(&exe, format!("probe {}", base.name))
            .arg(base.version_flag)
            .output()
            .await
            .map_err(|source| Error::HealthVerification {
                message: format!("{} health probe failed", base.name),
                source: Some(source.into()),
            })?;
        Ok(())
    }

    /// Runs [`LanguageHandler::check_health`] against a specific canonical
    /// version and downgrades any error to `false`. Internal to
    /// `setup_environment_with_repo`, not part of the external contract
    /// (callers with only a path, no version, use
    /// [`LanguageHandler::check_environment_health`] instead).
    async fn check_environment_health_at(&self, env_path: &Path, version: &str) -> bool {
        self.check_health(env_path, version).await.is_ok()
    }

    /// `CheckEnvironmentHealth`: assumes the canonical `"default"` version.
    async fn check_environment_health(&self, env_path: &Path) -> bool {
        self.check_environment_health_at(env_path, "default").await
    }

    /// No-op by default; intended for cache accounting by the orchestrator.
    async fn pre_initialize_environment_with_repo_info(
        &self,
        _ctx: &SetupContext<'_>,
    ) -> Result<()> {
        Ok(())
    }

    /// No-op by default; handlers that
    /// actually install packages (Perl, Julia, R, Swift, Golang's warning,
    /// Lua, Conda) override this.
    async fn install_dependencies(&self, _env_path: &Path, _deps: &[DependencySpec]) -> Result<()> {
        Ok(())
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<PathBuf>;

    /// Default: delegates to `setup_environment_with_repo`.
    async fn setup_environment_with_repo_info(&self, ctx: &SetupContext<'_>) -> Result<PathBuf> {
        self.setup_environment_with_repo(ctx).await
    }

    /// On Windows, most toolchains place executables at the environment
    /// root rather than under `bin/`; handlers that differ (Conda) override
    /// this.
    fn environment_bin_path(&self, env_path: &Path) -> PathBuf {
        if cfg!(windows) {
            env_path.to_path_buf()
        } else {
            env_path.join("bin")
        }
    }

    fn get_name(&self) -> &'static str {
        self.base().name
    }

    fn get_executable_name(&self) -> &'static str {
        self.base().executable_name
    }
}

/// Shared reuse/remove/recreate protocol: health-probe,
/// conditional `RemoveAll`, `CreateEnvironmentDirectory`, and (conditionally)
/// `InstallDependencies`, in that strict order. Every directory-backed
/// handler (Perl, Julia, R, Swift, Lua, Conda, Docker) drives its
/// `setup_environment_with_repo` through this.
pub(crate) async fn reuse_remove_recreate(
    handler: &impl LanguageHandler,
    env_path: &Path,
    version: &str,
    deps: &[DependencySpec],
) -> Result<PathBuf> {
    if handler.check_environment_health_at(env_path, version).await {
        return Ok(env_path.to_path_buf());
    }

    if fs_err::tokio::try_exists(env_path).await.unwrap_or(false) {
        fs_err::tokio::remove_dir_all(env_path)
            .await
            .map_err(|source| Error::BrokenEnvironmentRemoval { source })?;
    }

    create_environment_directory(handler.get_name(), env_path).await?;

    if !deps.is_empty() {
        handler
            .install_dependencies(env_path, deps)
            .await
            .map_err(|source| Error::DependencyInstallation {
                language: handler.get_name(),
                source,
            })?;
    }

    Ok(env_path.to_path_buf())
}

/// Resolves the directory a given (language, version) pair maps to under
/// this call's `SetupContext`, or `Error::UsageError` when both `repo_path`
/// and `cache_dir` are `None`. An empty `RepositoryEnvironmentName` yields
/// the root itself, for languages that never get a separate environment.
pub(crate) fn resolve_env_path(
    ctx: &SetupContext<'_>,
    language: Language,
    version: &str,
) -> Result<PathBuf> {
    let name = repository_environment_name(language, version);
    ctx.join(&name).ok_or_else(|| Error::UsageError.into())
}

pub(crate) async fn create_environment_directory(language: &'static str, path: &Path) -> Result<()> {
    fs_err::tokio::create_dir_all(path)
        .await
        .map_err(|source| Error::DirectoryCreation { language, source })?;
    Ok(())
}

/// `GO_PRE_COMMIT_TEST_MODE` enables Swift's and Lua's install-dependency
/// fabrication short-circuit unless `env_path` looks deliberately adversarial
/// (contains `empty`, `fail`, or `error`), so the orchestrator's own
/// failure-path tests aren't swallowed by the toggle.
pub(crate) fn install_test_mode_enabled(env_path: &Path) -> bool {
    use hookenv_consts::env_vars::EnvVars;

    if !EnvVars::is_set(EnvVars::GO_PRE_COMMIT_TEST_MODE) {
        return false;
    }
    let path = env_path.to_string_lossy();
    !["empty", "fail", "error"].iter().any(|marker| path.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_static_handler_reports_its_own_matching_enum_variant() {
        assert_eq!(perl::PERL.language(), Language::Perl);
        assert_eq!(julia::JULIA.language(), Language::Julia);
        assert_eq!(r::R.language(), Language::R);
        assert_eq!(swift::SWIFT.language(), Language::Swift);
        assert_eq!(golang::GOLANG.language(), Language::Golang);
        assert_eq!(lua::LUA.language(), Language::Lua);
        assert_eq!(conda::CONDA.language(), Language::Conda);
        assert_eq!(docker::DOCKER.language(), Language::Docker);
        assert_eq!(docker_image::DOCKER_IMAGE.language(), Language::DockerImage);
        assert_eq!(pygrep::PYGREP.language(), Language::Pygrep);
        assert_eq!(system::SYSTEM.language(), Language::System);
        assert_eq!(generic::GENERIC.language(), Language::Generic);
        assert_eq!(script::SCRIPT.language(), Language::Script);
        assert_eq!(fail::FAIL.language(), Language::Fail);
    }

    #[tokio::test]
    async fn language_dispatch_matches_the_underlying_static_handler() {
        let repo = tempfile::tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: None,
            version: "",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let via_language = Language::System.setup_environment_with_repo(&ctx).await.unwrap();
        let via_static = system::SYSTEM.setup_environment_with_repo(&ctx).await.unwrap();
        assert_eq!(via_language, via_static);
        assert_eq!(Language::System.get_name(), system::SYSTEM.get_name());
    }
}
