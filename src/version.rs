//! Build metadata for `--version` output and run logs.

use std::fmt;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const UNKNOWN: &str = "unknown";

/// Version and git provenance of this build, as emitted by `build.rs`.
///
/// Builds outside a git checkout report `unknown` for the git fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub branch: &'static str,
    pub sha: &'static str,
    pub dirty: bool,
    pub timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: PKG_VERSION,
            branch: option_env!("VERGEN_GIT_BRANCH").unwrap_or(UNKNOWN),
            sha: option_env!("VERGEN_GIT_SHA").unwrap_or(UNKNOWN),
            dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
            timestamp: option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
        }
    }

    /// Version string plus build time, for `--version`.
    pub fn long_version(&self) -> String {
        format!("{self} (built {})", self.timestamp)
    }

    /// Short commit id (at most 7 characters).
    pub fn short_sha(&self) -> &'static str {
        &self.sha[..7.min(self.sha.len())]
    }
}

/// `{version}+{branch}.{sha}`, with `.dirty` appended for modified trees.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}.{}", self.version, self.branch, self.short_sha())?;
        if self.dirty {
            f.write_str(".dirty")?;
        }
        Ok(())
    }
}

/// Full version string of the running build.
pub fn version_string() -> String {
    BuildInfo::current().to_string()
}

/// [`version_string`] with the build timestamp appended.
pub fn long_version_string() -> String {
    BuildInfo::current().long_version()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_pkg_version() {
        assert!(version_string().starts_with(PKG_VERSION));
    }

    #[test]
    fn display_format() {
        let info = BuildInfo {
            version: "1.2.3",
            branch: "main",
            sha: "abcdef0123456",
            dirty: true,
            timestamp: UNKNOWN,
        };
        assert_eq!(info.to_string(), "1.2.3+main.abcdef0.dirty");
    }

    #[test]
    fn long_version_shows_build_time() {
        let info = BuildInfo {
            version: "1.2.3",
            branch: "main",
            sha: "abcdef0",
            dirty: false,
            timestamp: "2026-01-02T03:04:05Z",
        };
        assert_eq!(info.long_version(), "1.2.3+main.abcdef0 (built 2026-01-02T03:04:05Z)");
        assert!(long_version_string().starts_with(&version_string()));
    }

    #[test]
    fn dirty_flag_matches_build_env() {
        assert_eq!(
            BuildInfo::current().dirty,
            option_env!("VERGEN_GIT_DIRTY") == Some("true")
        );
    }

    #[test]
    fn short_sha_of_unknown() {
        let info = BuildInfo {
            sha: UNKNOWN,
            ..BuildInfo::current()
        };
        assert_eq!(info.short_sha(), "unknown");
    }
}
