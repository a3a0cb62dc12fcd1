use std::ffi::OsString;

/// Namespaced accessors for the environment variables the environment
/// manager reads. Production code only reads these; nothing in `hookenv`
/// mutates process environment variables at steady state.
pub struct EnvVars;

impl EnvVars {
    pub const PATH: &'static str = "PATH";
    pub const HOME: &'static str = "HOME";

    // Conda/mamba/micromamba executable selection, see `spec.md` §4.12.
    pub const PRE_COMMIT_USE_MICROMAMBA: &'static str = "PRE_COMMIT_USE_MICROMAMBA";
    pub const PRE_COMMIT_USE_MAMBA: &'static str = "PRE_COMMIT_USE_MAMBA";

    // Swift/Lua dependency-install fabrication short-circuit, see `spec.md` §4.9/§4.11.
    pub const GO_PRE_COMMIT_TEST_MODE: &'static str = "GO_PRE_COMMIT_TEST_MODE";

    // Go related.
    pub const GOCACHE: &'static str = "GOCACHE";
    pub const GOPATH: &'static str = "GOPATH";

    // Lua related.
    pub const LUA_PATH: &'static str = "LUA_PATH";
    pub const LUA_CPATH: &'static str = "LUA_CPATH";

    // Perl related.
    pub const PERL5LIB: &'static str = "PERL5LIB";
    pub const PERL_LOCAL_LIB_ROOT: &'static str = "PERL_LOCAL_LIB_ROOT";
}

impl EnvVars {
    /// Read an environment variable.
    pub fn var_os(name: &str) -> Option<OsString> {
        #[allow(clippy::disallowed_methods)]
        std::env::var_os(name)
    }

    pub fn is_set(name: &str) -> bool {
        Self::var_os(name).is_some_and(|v| !v.is_empty())
    }

    pub fn var(name: &str) -> Result<String, std::env::VarError> {
        match Self::var_os(name) {
            Some(s) => s.into_string().map_err(std::env::VarError::NotUnicode),
            None => Err(std::env::VarError::NotPresent),
        }
    }
}
