pub mod env_vars;

use std::ffi::OsString;
use std::path::Path;

use env_vars::EnvVars;

/// Prepend paths to the current $PATH, returning the joined result.
///
/// The resulting `OsString` can be used to set the `PATH` environment
/// variable for a subprocess without mutating the calling process's own
/// environment.
pub fn prepend_paths(paths: &[&Path]) -> Result<OsString, std::env::JoinPathsError> {
    std::env::join_paths(
        paths.iter().map(|p| p.to_path_buf()).chain(
            EnvVars::var_os(EnvVars::PATH)
                .as_ref()
                .iter()
                .flat_map(std::env::split_paths),
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::prepend_paths;

    #[test]
    fn prepend_paths_puts_new_entries_first() {
        let joined = prepend_paths(&[Path::new("/tmp/a"), Path::new("/tmp/b")]).unwrap();
        let joined = joined.to_string_lossy();
        let a_idx = joined.find("/tmp/a").unwrap();
        let b_idx = joined.find("/tmp/b").unwrap();
        assert!(a_idx < b_idx);
    }
}
