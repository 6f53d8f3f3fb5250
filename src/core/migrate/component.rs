use serde::Serialize;
use std::str::FromStr;

use super::plan::MigrationPlan;
use super::{capture_zone, sessions_zone};
use crate::error::Error;

/// Components with a known migration plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Component {
    SessionsZone,
    CaptureZone,
}

impl Component {
    pub const ALL: [Component; 2] = [Component::SessionsZone, Component::CaptureZone];

    pub fn name(&self) -> &'static str {
        match self {
            Component::SessionsZone => "SessionsZone",
            Component::CaptureZone => "CaptureZone",
        }
    }

    pub fn supported_names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.name().to_string()).collect()
    }

    /// Source file name, e.g. `SessionsZone.tsx`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.name(), extension)
    }

    pub fn plan(&self) -> MigrationPlan {
        match self {
            Component::SessionsZone => sessions_zone::plan(),
            Component::CaptureZone => capture_zone::plan(),
        }
    }
}

impl FromStr for Component {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| {
                Error::validation_invalid_argument(
                    "component",
                    format!("Unknown component: {}", s),
                    Some(s.to_string()),
                    Some(Self::supported_names()),
                )
                .with_hint(format!(
                    "Supported components: {}",
                    Self::supported_names().join(", ")
                ))
            })
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
