//! SonarCloud severity scale
//!
//! Total order BLOCKER > CRITICAL > MAJOR > MINOR > INFO, ranked 5..=1.
//! Severities the service may add later rank 0 and fall below any
//! configured threshold.

use std::fmt;
use std::str::FromStr;

/// Defect severity as reported by SonarCloud
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    /// Numeric rank, INFO = 1 through BLOCKER = 5
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Info => 1,
            Self::Minor => 2,
            Self::Major => 3,
            Self::Critical => 4,
            Self::Blocker => 5,
        }
    }

    /// Uppercase wire name used in SonarCloud query parameters
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
            Self::Blocker => "BLOCKER",
        }
    }

    /// Lowercase form used in issue labels
    #[must_use]
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
            Self::Blocker => "blocker",
        }
    }

    /// Rank of a raw severity string; unknown or missing values rank 0
    #[must_use]
    pub fn rank_of(raw: &str) -> u8 {
        raw.parse::<Self>().map_or(0, Self::rank)
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFO" => Ok(Self::Info),
            "MINOR" => Ok(Self::Minor),
            "MAJOR" => Ok(Self::Major),
            "CRITICAL" => Ok(Self::Critical),
            "BLOCKER" => Ok(Self::Blocker),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity threshold predicate.
///
/// A defect is kept when its severity ranks at or above the minimum; an
/// unset minimum keeps everything, including unknown severities.
#[must_use]
pub fn meets_threshold(raw_severity: &str, min: Option<Severity>) -> bool {
    match min {
        None => true,
        Some(min) => Severity::rank_of(raw_severity) >= min.rank(),
    }
}
