//! Pure environment-directory naming. No I/O, no errors: every function here
//! is a total function of its inputs, per the `RepositoryEnvironmentName`
//! contract.

use crate::languages::Language;

/// The set of version tokens a language's environment directory will ever
/// reflect literally; anything outside the set canonicalizes to `"default"`.
enum Acceptance {
    Fixed(&'static [&'static str]),
    Any,
}

fn accepted_versions(language: Language) -> Acceptance {
    match language {
        Language::Perl | Language::R | Language::Swift | Language::Lua => {
            Acceptance::Fixed(&["default", "system"])
        }
        Language::Julia
        | Language::Golang
        | Language::Generic
        | Language::Docker
        | Language::Pygrep
        | Language::System
        | Language::Script
        | Language::Fail
        | Language::DockerImage => Acceptance::Fixed(&["default"]),
        Language::Conda => Acceptance::Any,
    }
}

fn prefix(language: Language) -> &'static str {
    match language {
        Language::Perl => "perlenv",
        Language::Julia => "juliaenv",
        Language::R => "renv",
        Language::Swift => "swift",
        Language::Golang => "go",
        Language::Lua => "lua",
        Language::Conda => "conda",
        Language::Docker => "docker",
        Language::Generic => "generic",
        Language::Pygrep => "py_env",
        Language::System | Language::Script | Language::Fail | Language::DockerImage => "",
    }
}

/// Normalize a requested version: empty becomes `"default"`; anything the
/// language doesn't recognize also normalizes to `"default"`. Conda accepts
/// any non-empty token verbatim.
pub fn canonicalize_version(language: Language, version: &str) -> String {
    let version = if version.is_empty() { "default" } else { version };
    match accepted_versions(language) {
        Acceptance::Any => version.to_string(),
        Acceptance::Fixed(set) => {
            if set.contains(&version) {
                version.to_string()
            } else {
                "default".to_string()
            }
        }
    }
}

/// `RepositoryEnvironmentName(lang, version)`: the per-repo directory name,
/// or the empty string when the language needs no separate environment.
/// Callers treat an empty result as "use the repo path verbatim".
pub fn repository_environment_name(language: Language, version: &str) -> String {
    let canonical = canonicalize_version(language, version);
    match language {
        Language::System | Language::Script | Language::Fail | Language::DockerImage => {
            String::new()
        }
        Language::Pygrep => {
            if canonical == "default" {
                String::new()
            } else {
                format!("py_env-{canonical}")
            }
        }
        _ => format!("{}-{canonical}", prefix(language)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_version_becomes_default() {
        assert_eq!(
            repository_environment_name(Language::Perl, ""),
            "perlenv-default"
        );
    }

    #[test]
    fn unrecognized_version_normalizes_to_default() {
        assert_eq!(
            repository_environment_name(Language::Julia, "1.9"),
            "juliaenv-default"
        );
    }

    #[test]
    fn perl_accepts_system() {
        assert_eq!(
            repository_environment_name(Language::Perl, "system"),
            "perlenv-system"
        );
    }

    #[test]
    fn conda_accepts_any_token() {
        assert_eq!(
            repository_environment_name(Language::Conda, "3.11"),
            "conda-3.11"
        );
        assert_eq!(
            repository_environment_name(Language::Conda, ""),
            "conda-default"
        );
    }

    #[test]
    fn system_and_docker_image_never_need_a_directory() {
        assert_eq!(repository_environment_name(Language::System, "anything"), "");
        assert_eq!(repository_environment_name(Language::DockerImage, ""), "");
    }

    #[test]
    fn pygrep_is_pathless_only_at_default() {
        assert_eq!(repository_environment_name(Language::Pygrep, ""), "");
        assert_eq!(repository_environment_name(Language::Pygrep, "default"), "");
    }

    #[test]
    fn naming_is_pure() {
        let a = repository_environment_name(Language::R, "system");
        let b = repository_environment_name(Language::R, "system");
        assert_eq!(a, b);
    }
}
