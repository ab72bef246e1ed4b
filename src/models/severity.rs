use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

/// Priority assumed when the attribute is missing or not a number.
pub const DEFAULT_PRIORITY: i64 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
}

impl Severity {
    /// Maps a PMD priority (1 = highest) onto a Sonar severity.
    ///
    /// Anything that does not parse as an integer counts as priority 3.
    /// Integers outside 1..=4 all land on `Info`, overflowing ones included.
    pub fn from_priority(priority: Option<&str>) -> Self {
        let p = match priority.map(|s| s.trim().parse::<i64>()) {
            None => DEFAULT_PRIORITY,
            Some(Ok(p)) => p,
            Some(Err(e)) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => return Severity::Info,
                _ => DEFAULT_PRIORITY,
            },
        };

        match p {
            1 => Severity::Blocker,
            2 => Severity::Critical,
            3 => Severity::Major,
            4 => Severity::Minor,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Blocker => "BLOCKER",
            Severity::Critical => "CRITICAL",
            Severity::Major => "MAJOR",
            Severity::Minor => "MINOR",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
