//! Interface filtering by name pattern and operational status.
//!
//! # Design
//!
//! - **Pure Matcher**: [`NetworkInterface::matches_pattern`] only answers
//!   "does this pattern occur in the name or display name?".
//! - **Pattern Filter**: [`PatternFilter`] applies include/exclude semantics:
//!   - Exclude: reject on ANY matching pattern (empty = keep all)
//!   - Include: accept on ANY matching pattern (empty = keep none)
//! - **Criteria**: [`FilterCriteria`] combines a pattern filter with the
//!   down-interface policy and reports a [`Decision`] per interface so callers
//!   can log why an interface was kept or dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::NetworkInterface;

/// Patterns excluded by default: container bridges, VPN tunnels and loopback.
pub const DEFAULT_EXCLUDE_PATTERNS: [&str; 7] =
    ["docker", "virbr", "veth", "tailscale", "dummy", "tun", "lo"];

/// Include-list or exclude-list of substring patterns.
///
/// The two modes are mutually exclusive. Patterns are matched case-sensitively
/// against both the interface name and its display name.
///
/// # Examples
///
/// ```
/// use iflist::network::NetworkInterface;
/// use iflist::network::filter::PatternFilter;
///
/// let eth0 = NetworkInterface::new("eth0", "Ethernet", true, vec![]);
/// let lo = NetworkInterface::new("lo", "Loopback", true, vec![]);
///
/// let exclude = PatternFilter::exclude(["lo"]);
/// assert!(exclude.matches(&eth0));
/// assert!(!exclude.matches(&lo));
///
/// let include = PatternFilter::include(["lo"]);
/// assert!(!include.matches(&eth0));
/// assert!(include.matches(&lo));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternFilter {
    /// Keep an interface unless it matches any pattern.
    Exclude(Vec<String>),
    /// Keep an interface only if it matches at least one pattern.
    Include(Vec<String>),
}

impl PatternFilter {
    /// Creates an exclude-mode filter.
    #[must_use]
    pub fn exclude<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exclude(patterns.into_iter().map(Into::into).collect())
    }

    /// Creates an include-mode filter.
    #[must_use]
    pub fn include<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Include(patterns.into_iter().map(Into::into).collect())
    }

    /// Returns the configured patterns.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        match self {
            Self::Exclude(patterns) | Self::Include(patterns) => patterns,
        }
    }

    /// Returns true in include mode.
    #[must_use]
    pub const fn is_include(&self) -> bool {
        matches!(self, Self::Include(_))
    }

    /// Returns the first pattern that occurs in the interface name or display name.
    #[must_use]
    pub fn first_match(&self, interface: &NetworkInterface) -> Option<&str> {
        self.patterns()
            .iter()
            .map(String::as_str)
            .find(|pattern| interface.matches_pattern(pattern))
    }

    /// Returns `true` if the interface passes this filter.
    #[must_use]
    pub fn matches(&self, interface: &NetworkInterface) -> bool {
        let hit = self.first_match(interface).is_some();
        if self.is_include() { hit } else { !hit }
    }
}

impl Default for PatternFilter {
    fn default() -> Self {
        Self::exclude(DEFAULT_EXCLUDE_PATTERNS)
    }
}

impl fmt::Display for PatternFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.is_include() { "include" } else { "exclude" };
        write!(f, "{mode} {:?}", self.patterns())
    }
}

/// Outcome of evaluating one interface against [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'a> {
    /// Kept. In include mode, carries the pattern that matched.
    Included {
        /// The include pattern that matched, if any.
        pattern: Option<&'a str>,
    },
    /// Dropped because an exclude pattern matched.
    Excluded {
        /// The exclude pattern that matched.
        pattern: &'a str,
    },
    /// Dropped because no include pattern matched.
    NotMatched,
    /// Dropped because the interface is down and down interfaces are excluded.
    Down,
}

impl Decision<'_> {
    /// Returns true if the interface survives the filter.
    #[must_use]
    pub const fn is_included(&self) -> bool {
        matches!(self, Self::Included { .. })
    }
}

/// Per-call filtering criteria.
///
/// # Defaults
///
/// [`FilterCriteria::default`] excludes [`DEFAULT_EXCLUDE_PATTERNS`] and
/// drops interfaces that are down.
///
/// # Evaluation Order
///
/// 1. Pattern filter (exclude or include)
/// 2. Down-state policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Include or exclude patterns.
    pub patterns: PatternFilter,
    /// Drop interfaces the OS reports as not up.
    pub exclude_down: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            patterns: PatternFilter::default(),
            exclude_down: true,
        }
    }
}

impl FilterCriteria {
    /// Exclude-mode criteria keeping down interfaces.
    #[must_use]
    pub fn exclude<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: PatternFilter::exclude(patterns),
            exclude_down: false,
        }
    }

    /// Include-mode criteria keeping down interfaces.
    #[must_use]
    pub fn include<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: PatternFilter::include(patterns),
            exclude_down: false,
        }
    }

    /// Criteria that keep every interface, up or down.
    #[must_use]
    pub fn all() -> Self {
        Self::exclude(std::iter::empty::<String>())
    }

    /// Sets the down-interface policy (builder pattern).
    #[must_use]
    pub const fn with_exclude_down(mut self, exclude_down: bool) -> Self {
        self.exclude_down = exclude_down;
        self
    }

    /// Evaluates a single interface.
    #[must_use]
    pub fn evaluate<'a>(&'a self, interface: &NetworkInterface) -> Decision<'a> {
        let hit = self.patterns.first_match(interface);

        let pattern = match (&self.patterns, hit) {
            (PatternFilter::Exclude(_), Some(pattern)) => return Decision::Excluded { pattern },
            (PatternFilter::Include(_), None) => return Decision::NotMatched,
            (_, hit) => hit,
        };

        if self.exclude_down && !interface.is_up {
            return Decision::Down;
        }

        Decision::Included { pattern }
    }

    /// Returns `true` if the interface survives the filter.
    #[must_use]
    pub fn matches(&self, interface: &NetworkInterface) -> bool {
        self.evaluate(interface).is_included()
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, exclude_down: {}", self.patterns, self.exclude_down)
    }
}
