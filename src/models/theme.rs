use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Theme preference stored under the `tema` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Claro,
    Oscuro,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Claro => "claro",
            Theme::Oscuro => "oscuro",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Claro => Theme::Oscuro,
            Theme::Oscuro => Theme::Claro,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claro" => Ok(Theme::Claro),
            "oscuro" => Ok(Theme::Oscuro),
            _ => Err(()),
        }
    }
}
