//! Multi-language per-hook environment manager.
//!
//! Creates, heals, and reuses isolated toolchain environments for a
//! pre-commit-style hook runner, across a fixed set of language handlers
//! (Perl, Julia, R, Swift, Go, Lua, Conda, Docker, Docker-Image, a bare
//! System/Generic pair, and Pygrep). CLI parsing, hook-manifest config
//! parsing, git integration, and hook execution proper are all external
//! collaborators: this crate exposes [`languages::LanguageHandler`] and
//! [`languages::Language`] as the seam an orchestrator calls through.

pub mod descriptor;
pub mod error;
pub mod languages;
pub mod name;
pub mod process;

pub use descriptor::{Base, DependencySpec, EnvironmentDescriptor, SetupContext};
pub use languages::{Language, LanguageHandler};
