use std::path::{Path, PathBuf};

use crate::languages::Language;

/// Immutable per-handler metadata: display name, probe executable, the flag
/// used to invoke it for a health probe, and the upstream install URL shown
/// in diagnostics. Every handler embeds one of these by value and exposes it
/// through `LanguageHandler::base`.
#[derive(Debug, Clone, Copy)]
pub struct Base {
    /// Capitalized display name, e.g. `"Perl"`. Used in the generic
    /// directory-creation / dependency-installation error wrappers.
    pub name: &'static str,
    /// Lowercase language token, e.g. `"perl"`. Used in toolchain-absence
    /// messages, which downstream callers substring-match.
    pub token: &'static str,
    pub executable_name: &'static str,
    pub version_flag: &'static str,
    pub install_url: &'static str,
}

impl Base {
    pub const fn new(
        name: &'static str,
        token: &'static str,
        executable_name: &'static str,
        version_flag: &'static str,
        install_url: &'static str,
    ) -> Self {
        Self {
            name,
            token,
            executable_name,
            version_flag,
            install_url,
        }
    }
}

/// An opaque dependency token in the form `name` or `name==version`.
///
/// Comparison is by raw string; only handlers that need a versioned install
/// (R, Lua, Conda) call [`DependencySpec::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencySpec(String);

impl DependencySpec {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split on the first `==`, returning `(name, Some(version))` or
    /// `(name, None)` when no version is present.
    pub fn parse(&self) -> (&str, Option<&str>) {
        match self.0.split_once("==") {
            Some((name, version)) => (name, Some(version)),
            None => (&self.0, None),
        }
    }
}

impl From<&str> for DependencySpec {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The logical (language, requested-version, additional-deps) triple that
/// [`crate::name::repository_environment_name`] lowers to a directory name.
///
/// Most call sites pass the three components positionally; this owned,
/// hashable form exists for callers that need to key a cache by descriptor,
/// the way an orchestrator's install-info matching would.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentDescriptor {
    pub language: Language,
    pub version: String,
    pub additional_deps: Vec<DependencySpec>,
}

impl EnvironmentDescriptor {
    pub fn new(language: Language, version: impl Into<String>, additional_deps: Vec<DependencySpec>) -> Self {
        Self {
            language,
            version: version.into(),
            additional_deps,
        }
    }
}

/// Inputs to `setup_environment_with_repo`/`setup_environment_with_repo_info`.
///
/// `cache_dir` and `repo_path` being both `None` is the one usage error this
/// subsystem detects at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct SetupContext<'a> {
    pub cache_dir: Option<&'a Path>,
    pub version: &'a str,
    pub repo_path: Option<&'a Path>,
    pub repo_url: &'a str,
    pub additional_deps: &'a [DependencySpec],
}

impl<'a> SetupContext<'a> {
    /// The directory under which a per-repo environment is rooted: prefers
    /// `repo_path`, falls back to `cache_dir`. Panics are never reached here
    /// because every caller checks [`SetupContext::root`] first and returns
    /// `Error::UsageError` when both are `None`.
    pub fn root(&self) -> Option<&'a Path> {
        self.repo_path.or(self.cache_dir)
    }

    pub fn join(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            self.root().map(Path::to_path_buf)
        } else {
            self.root().map(|root| root.join(name))
        }
    }
}
