use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::core::error::LogError;
use crate::loggers::{Logger, Severity};

/// Section of the host application's configuration read by [`LoggerSettings::from_figment`].
pub const SETTINGS_KEY: &str = "logger";

/// Logger settings as they appear in a host configuration. Every field is
/// optional; missing ones leave the logger as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerSettings {
    pub level: Option<String>,
    pub time_format: Option<String>,
    pub component: Option<String>,
}

impl LoggerSettings {
    /// Extracts the `logger` section of an already assembled figment. A missing
    /// section yields empty settings. Nothing is read from disk or the
    /// environment here; the host decides which providers to merge.
    pub fn from_figment(figment: &Figment) -> Result<Self, LogError> {
        Ok(figment.focus(SETTINGS_KEY).extract()?)
    }

    /// Parsed level, if one is set.
    pub fn severity(&self) -> Result<Option<Severity>, LogError> {
        self.level.as_deref().map(str::parse).transpose()
    }

    /// Applies the settings. The level is validated first; if it is invalid
    /// nothing is applied.
    pub fn apply(&self, logger: &Logger) -> Result<(), LogError> {
        let severity = self.severity()?;
        if let Some(severity) = severity {
            logger.set_severity(severity);
        }
        if let Some(pattern) = &self.time_format {
            logger.set_time_format(pattern.as_str());
        }
        if let Some(component) = &self.component {
            logger.set_component(component.as_str());
        }
        Ok(())
    }
}
