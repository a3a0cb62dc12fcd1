use std::path::Path;

use anyhow::Result;

use crate::descriptor::{Base, DependencySpec, SetupContext};
use crate::languages::{Language, LanguageHandler, reuse_remove_recreate, resolve_env_path};

/// The fallback handler for languages with no bespoke policy: a plain
/// directory, no package manager, Base's default health probe. Also covers
/// hook types like `coursier`/`dart`/`dotnet` that get no dedicated module,
/// since their only documented behavior ("only system version, support env,
/// support additional deps") is exactly what `Generic` already provides.
pub struct Generic;

pub static GENERIC: Generic = Generic;

const BASE: Base = Base::new("Generic", "generic", "", "", "");

impl LanguageHandler for Generic {
    fn base(&self) -> &Base {
        &BASE
    }

    fn language(&self) -> Language {
        Language::Generic
    }

    async fn setup_environment_with_repo(&self, ctx: &SetupContext<'_>) -> Result<std::path::PathBuf> {
        let env_path = resolve_env_path(ctx, self.language(), ctx.version)?;
        reuse_remove_recreate(self, &env_path, ctx.version, ctx.additional_deps).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn setup_creates_a_directory_inside_the_repo() {
        let repo = tempdir().unwrap();
        let ctx = SetupContext {
            cache_dir: None,
            version: "",
            repo_path: Some(repo.path()),
            repo_url: "",
            additional_deps: &[],
        };
        let env_path = GENERIC.setup_environment_with_repo(&ctx).await.unwrap();
        assert!(env_path.is_dir());
        assert_eq!(env_path, repo.path().join("generic-default"));
    }

    #[tokio::test]
    async fn no_op_deps_do_not_touch_the_filesystem() {
        let repo = tempdir().unwrap();
        let env_path = repo.path().join("scratch");
        GENERIC
            .install_dependencies(&env_path, &[] as &[DependencySpec])
            .await
            .unwrap();
        assert!(!env_path.exists());
    }
}
