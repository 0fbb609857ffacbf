use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which backend produced (or will receive) a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Remote,
    Local,
    Demo,
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataOrigin::Remote => "remote",
            DataOrigin::Local => "local",
            DataOrigin::Demo => "demo",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStatus {
    /// Backend that is authoritative for reads and writes this session.
    pub active: DataOrigin,
    /// Cleared by a failed probe or by any failed read.
    pub api_available: bool,
    pub last_probe_at: Option<DateTime<Utc>>,
}

impl SourceStatus {
    pub fn unprobed() -> Self {
        Self {
            active: DataOrigin::Demo,
            api_available: false,
            last_probe_at: None,
        }
    }

    pub fn accepts_writes(&self) -> bool {
        match self.active {
            DataOrigin::Remote => self.api_available,
            DataOrigin::Local => true,
            DataOrigin::Demo => false,
        }
    }

    /// Informational banner text; `None` when everything is live.
    pub fn banner(&self) -> Option<&'static str> {
        match (self.active, self.api_available) {
            (DataOrigin::Remote, true) => None,
            (DataOrigin::Remote, false) => {
                Some("Content API is partially unavailable; some sections show demo content.")
            }
            (DataOrigin::Local, _) => {
                Some("Content API is unavailable; content is served from local storage.")
            }
            (DataOrigin::Demo, _) => Some("Demo mode: content is read-only."),
        }
    }
}

/// Result of a read that never fails: either live data or the demo set.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub data: T,
    pub origin: DataOrigin,
    /// True when the active source failed and demo data was substituted.
    pub fallback: bool,
}

impl<T> Fetched<T> {
    pub fn live(data: T, origin: DataOrigin) -> Self {
        Self {
            data,
            origin,
            fallback: false,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            origin: DataOrigin::Demo,
            fallback: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(active: DataOrigin, api_available: bool) -> SourceStatus {
        SourceStatus {
            active,
            api_available,
            last_probe_at: None,
        }
    }

    #[test]
    fn write_acceptance_follows_active_source() {
        assert!(status(DataOrigin::Remote, true).accepts_writes());
        assert!(!status(DataOrigin::Remote, false).accepts_writes());
        assert!(status(DataOrigin::Local, false).accepts_writes());
        assert!(!status(DataOrigin::Demo, false).accepts_writes());
    }

    #[test]
    fn banner_only_when_degraded() {
        assert!(status(DataOrigin::Remote, true).banner().is_none());
        assert!(status(DataOrigin::Local, false).banner().is_some());
        assert!(SourceStatus::unprobed().banner().is_some());
    }
}
