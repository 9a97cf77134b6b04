//! Property-test run profile read from the environment.
//!
//! Lets CI raise case counts or enable forking for every property suite in
//! the workspace without touching the suites themselves.

use std::env;
use std::fmt;

/// Environment variable overriding the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable enabling forked execution of property cases.
pub const SETCLUST_PBT_FORK_ENV_KEY: &str = "SETCLUST_PBT_FORK";

/// Case count and fork policy applied to a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, keeping the supplied defaults
    /// for unset or malformed overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use setclust_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(SETCLUST_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

/// Reason an override was ignored.
#[derive(Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber(String),
    ZeroCases,
    NotAFlag,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(detail) => write!(f, "not a case count: {detail}"),
            Self::ZeroCases => f.write_str("case count must be at least 1"),
            Self::NotAFlag => f.write_str("expected one of true/false/1/0/yes/no/on/off"),
        }
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: impl Fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::NotANumber(error.to_string())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotAFlag),
    }
}
