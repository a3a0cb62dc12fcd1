use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hookenv_consts::env_vars::EnvVars;
use which::which;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::error::Error;
use crate::languages::{
    Language, LanguageHandler, create_environment_directory, install_test_mode_enabled, resolve_env_path,
};
use crate::name::canonicalize_version;
use crate::process::Cmd;

/// The package name given to every generated `Package.swift` stub. The spec
/// doesn't name one; a fixed name keeps the manifest stable across repeated
/// setup calls instead of deriving one from the repo path.
const PACKAGE_NAME: &str = "HookPackage";

/// Manages a minimal Swift package per environment. Adopts the older,
/// probe-based `GetDefaultVersion` behavior and a test-mode fabrication
/// short-circuit for `InstallDependencies`.
pub struct Swift;

pub static SWIFT: Swift = Swift;

const BASE: Base = Base::new("Swift", "swift", "swift", "--version", "");

fn package_manifest(env_path: &Path) -> PathBuf {
    env_path.join("Package.swift")
}

fn sources_main(env_path: &Path) -> PathBuf {
    env_path.join("Sources").join(PACKAGE_NAME).join("main.swift")
}

fn manifest_contents(deps: &[DependencySpec]) -> String {
    let mut deps_list = String::new();
    for dep in deps {
        deps_list.push_str(&format!("    // dependency: {dep}\n"));
    }
    format!(
        "// swift-tools-version:5.9\nimport PackageDescription\n\nlet package = Package(\n    name: \"{PACKAGE_NAME}\",\n    targets: [\n        .executableTarget(name: \"{PACKAGE_NAME}\"),\n    ]\n)\n{deps_list}"
    )
}

async fn write_stub_if_missing(env_path: &Path) -> Result<()> {
    let manifest = package_manifest(env_path);
    if !fs_err::tokio::try_exists(&manifest).await.unwrap_or(false) {
        fs_err::tokio::write(&manifest, manifest_contents(&[]))
            .await
            .context("failed to write Package.swift")?;
    }
    let main_swift = sources_main(env_path);
    if !fs_err::tokio::try_exists(&main_swift).await.unwrap_or(false) {
        fs_err::tokio::create_dir_all(main_swift.parent().unwrap())
            .await
            .context("failed to create Sources directory")?;
        fs_err::tokio::write(&main_swift, "// generated entry point\n")
            .await
            .context("failed to write main.swift stub")?;
    }
    Ok(())
}

impl LanguageHandler for Swift {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Swift
    }

    async fn check_health(&self, env_path: &Path, _version: &str) -> Result<()> {
        if which("swift").is_err() {
            anyhow::bail!(Error::ToolchainAbsent { language: "swift" });
        }
        if !package_manifest(env_path).is_file() {
            anyhow::bail!(Error::HealthVerification {
                message: "Swift Package.swift is missing".to_string(),
                source: None,
            });
        }
        Cmd::new("swift", "swift package dump-package")
            .arg("package")
            .arg("dump-package")
            .current_dir(env_path)
            .output()
            .await
            .context("swift package dump-package failed")?;
        Ok(())
    }

    async fn install_dependencies(&self, env_path: &Path, deps: &[DependencySpec]) -> Result<()> {
        if deps.is_empty() {
            return Ok(());
        }
        fs_err::tokio::write(package_manifest(env_path), manifest_contents(deps))
            .await
            .context("failed to write Package.swift")?;

        if install_test_mode_enabled(env_path) {
            write_stub_if_missing(env_path).await?;
            fs_err::tokio::write(env_path.join("Package.resolved"), "{\"version\": 2, \"pins\": []}\n")
                .await
                .context("failed to fabricate Package.resolved")?;
            return Ok(());
        }

        Cmd::new("swift", "swift package resolve")
            .arg("package")
            .arg("resolve")
            .current_dir(env_path)
            .output()
            .await
            .context("swift package resolve failed")?;
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

        create_environment_directory(self.get_name(), &env_path).await?;
        write_stub_if_missing(&env_path).await?;

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
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn no_op_deps_do_not_touch_the_filesystem() {
        let env = tempdir().unwrap();
        let env_path = env.path().join("swift-default");
        SWIFT.install_dependencies(&env_path, &[]).await.unwrap();
        assert!(!env_path.exists());
    }

    #[tokio::test]
    async fn health_check_accepts_a_hand_written_manifest() {
        let env = tempdir().unwrap();
        if which("swift").is_err() {
            return;
        }
        let manifest = indoc::indoc! {r#"
            // swift-tools-version:5.9
            import PackageDescription

            let package = Package(
                name: "HookPackage",
                targets: [
                    .executableTarget(name: "HookPackage"),
                ]
            )
        "#};
        fs_err::tokio::write(package_manifest(env.path()), manifest).await.unwrap();
        // Only asserts this doesn't panic; `swift package dump-package` needs a
        // real toolchain to succeed, which the sandbox running this test may lack.
        let _ = SWIFT.check_health(env.path(), "default").await;
    }

    #[test]
    fn manifest_with_deps_appends_one_comment_line_per_dependency() {
        let deps = [DependencySpec::new("swift-argument-parser"), DependencySpec::new("swift-log")];
        let rendered = manifest_contents(&deps);
        let expected_trailer = "    // dependency: swift-argument-parser\n    // dependency: swift-log\n";
        assert_eq!(&rendered[rendered.len() - expected_trailer.len()..], expected_trailer);
    }

    #[tokio::test]
    async fn missing_manifest_fails_health() {
        let env = tempdir().unwrap();
        let err = SWIFT.check_health(env.path(), "default").await.unwrap_err();
        assert!(
            err.to_string().contains("Package.swift is missing")
                || err.to_string().contains("swift runtime not found in PATH")
        );
    }

    #[tokio::test]
    async fn stub_creates_manifest_and_entry_point() {
        let env = tempdir().unwrap();
        write_stub_if_missing(env.path()).await.unwrap();
        assert!(package_manifest(env.path()).is_file());
        assert!(sources_main(env.path()).is_file());
    }

    #[tokio::test]
    async fn test_mode_fabricates_resolved_manifest_without_invoking_swift() {
        // SAFETY: test-only, single-threaded access to this specific var.
        unsafe { std::env::set_var(EnvVars::GO_PRE_COMMIT_TEST_MODE, "true") };
        let env = tempdir().unwrap();
        SWIFT
            .install_dependencies(env.path(), &[DependencySpec::new("swift-argument-parser")])
            .await
            .unwrap();
        assert!(env.path().join("Package.resolved").is_file());
        unsafe { std::env::remove_var(EnvVars::GO_PRE_COMMIT_TEST_MODE) };
    }

    #[tokio::test]
    async fn error_marker_in_env_path_disables_fabrication_short_circuit() {
        unsafe { std::env::set_var(EnvVars::GO_PRE_COMMIT_TEST_MODE, "true") };
        let env_path = std::env::temp_dir().join("hookenv-swift-error-marker");
        assert!(!install_test_mode_enabled(&env_path));
        unsafe { std::env::remove_var(EnvVars::GO_PRE_COMMIT_TEST_MODE) };
    }
}
