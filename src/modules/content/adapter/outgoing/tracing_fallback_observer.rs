use std::str::FromStr;
use tracing::{debug, error, info, warn};

use crate::modules::content::application::ports::outgoing::{FallbackEvent, FallbackObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackLogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
}

impl FromStr for FallbackLogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(format!("unknown fallback log level '{other}'")),
        }
    }
}

/// Reports fallbacks through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFallbackObserver {
    level: FallbackLogLevel,
}

impl TracingFallbackObserver {
    pub fn new(level: FallbackLogLevel) -> Self {
        Self { level }
    }

    pub fn level(&self) -> FallbackLogLevel {
        self.level
    }
}

impl FallbackObserver for TracingFallbackObserver {
    fn on_fallback(&self, event: &FallbackEvent) {
        let entity = event.entity.label();
        let source = event.failed_source;
        let reason = event.reason.as_str();

        match self.level {
            FallbackLogLevel::Off => {}
            FallbackLogLevel::Error => {
                error!(entity, %source, reason, "Serving demo content after source failure")
            }
            FallbackLogLevel::Warn => {
                warn!(entity, %source, reason, "Serving demo content after source failure")
            }
            FallbackLogLevel::Info => {
                info!(entity, %source, reason, "Serving demo content after source failure")
            }
            FallbackLogLevel::Debug => {
                debug!(entity, %source, reason, "Serving demo content after source failure")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::entities::EntityKind;
    use crate::modules::content::domain::source::DataOrigin;

    #[test]
    fn parses_levels() {
        assert_eq!("WARN".parse::<FallbackLogLevel>(), Ok(FallbackLogLevel::Warn));
        assert_eq!("off".parse::<FallbackLogLevel>(), Ok(FallbackLogLevel::Off));
        assert!("loud".parse::<FallbackLogLevel>().is_err());
    }

    #[test]
    fn every_level_accepts_events() {
        let event = FallbackEvent {
            entity: EntityKind::Skill,
            failed_source: DataOrigin::Remote,
            reason: "timeout".to_string(),
        };

        for level in [
            FallbackLogLevel::Off,
            FallbackLogLevel::Error,
            FallbackLogLevel::Warn,
            FallbackLogLevel::Info,
            FallbackLogLevel::Debug,
        ] {
            TracingFallbackObserver::new(level).on_fallback(&event);
        }
    }
}
