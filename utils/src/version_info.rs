//! Version information for the dashboard, populated at build time.
//!
//! Environment display format:
//! - Production: `stable:{version}`
//! - Staging: `staging:{date}`
//! - Internal: `internal:{commit}`
//! - Test: `test:{commit}`

/// Deployment environment selected by Cargo features at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildEnv {
    /// Production build (no environment feature).
    Prod,
    /// Staging build (`env_staging`).
    Staging,
    /// Internal back-office build (`env_internal`).
    Internal,
    /// Test build (`env_test`).
    Test,
}

impl BuildEnv {
    /// The environment this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(feature = "env_test") {
            Self::Test
        } else if cfg!(feature = "env_staging") {
            Self::Staging
        } else if cfg!(feature = "env_internal") {
            Self::Internal
        } else {
            Self::Prod
        }
    }

    /// Short label shown in the top bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prod => "stable",
            Self::Staging => "staging",
            Self::Internal => "internal",
            Self::Test => "test",
        }
    }
}

/// Get the build date in RFC3339 format
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns the environment label and version/info string for the current build.
pub fn env_version_info() -> (&'static str, &'static str) {
    let env = BuildEnv::current();
    let info = match env {
        BuildEnv::Prod => build_version(),
        BuildEnv::Staging => build_date(),
        BuildEnv::Internal | BuildEnv::Test => build_commit(),
    };
    (env.label(), info)
}

/// Format the environment and version info as a display string.
pub fn format_env_version() -> String {
    let (env_name, info) = env_version_info();
    // BUILD_DATE is RFC3339, keep only the date part
    if env_name == "staging" && info.len() >= 10 && info.is_ascii() {
        format!("{}:{}", env_name, &info[..10])
    } else {
        format!("{env_name}:{info}")
    }
}
