//! Mock configuration.
//!
//! The only behavior that varies between harnesses is what `NewString` does.
//! Two profiles exist in the wild: one copies the characters into a fresh
//! NUL-terminated buffer, the other is a no-op that returns null. Neither is
//! canonical, so both are kept and selected here.

use std::env::VarError;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Environment variable consulted by [`MockConfig::from_env`].
pub const STRING_PROFILE_VAR: &str = "MOCKJNI_STRING_PROFILE";

/// Behavior of the built-in `NewString` stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringProfile {
    /// Allocate a NUL-terminated copy and return its address as the handle.
    #[default]
    Copy,
    /// Return null without allocating.
    Null,
}

impl FromStr for StringProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "copy" => Ok(StringProfile::Copy),
            "null" => Ok(StringProfile::Null),
            _ => Err(Error::Config {
                key: STRING_PROFILE_VAR,
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    pub string_profile: StringProfile,
}

impl MockConfig {
    /// Reads `MOCKJNI_STRING_PROFILE` (`copy` or `null`). Unset means default;
    /// a value that is not valid Unicode is an error.
    pub fn from_env() -> Result<Self> {
        let string_profile = match std::env::var(STRING_PROFILE_VAR) {
            Ok(value) => value.parse()?,
            Err(VarError::NotPresent) => StringProfile::default(),
            Err(VarError::NotUnicode(value)) => {
                return Err(Error::Config {
                    key: STRING_PROFILE_VAR,
                    value: value.to_string_lossy().into_owned(),
                })
            }
        };
        log::debug!("mock config: string_profile={string_profile:?}");
        Ok(MockConfig { string_profile })
    }

    pub fn string_profile(mut self, profile: StringProfile) -> Self {
        self.string_profile = profile;
        self
    }
}
