use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::UnsupportedThemeError;

/// Display library used by the client to pop notifications.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// jQuery Growl, <http://ksylvest.github.io/jquery-growl/>
    #[default]
    Growl,
    /// Noty, <http://ned.im/noty/>
    Noty,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Growl, Self::Noty];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Growl => "growl",
            Self::Noty => "noty",
        }
    }

    /// Checks a theme name against the built-in themes.
    ///
    /// Only exact names are accepted: `"Growl"` or `" growl"` are rejected
    /// just like any other unknown value.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedThemeError`] carrying `name` if it is not one of
    /// the built-in theme names.
    pub fn validate(name: &str) -> Result<Self, UnsupportedThemeError> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == name)
            .ok_or_else(|| UnsupportedThemeError(name.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnsupportedThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}
