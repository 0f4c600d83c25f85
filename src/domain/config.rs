//! Runtime configuration keys and values.
//!
//! Settings are stored as rows of `(key, value)` strings and decoded at the
//! read boundary into a tagged [`ConfigValue`]. Well-known settings have a
//! [`SettingKey`] variant; plugin and operator-defined settings use free-form
//! string keys. Both forms canonicalise into [`ConfigKey`] so that
//! `SettingKey::EventName` and `"event_name"` address the same row and the
//! same cache slot.

use std::fmt;

use serde::Serialize;

/// Well-known platform settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    EventName,
    EventDescription,
    Theme,
    StartAt,
    EndAt,
    Paused,
    RegistrationOpen,
    SetupComplete,
    PlatformVersion,
}

impl SettingKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::EventName => "event_name",
            SettingKey::EventDescription => "event_description",
            SettingKey::Theme => "theme",
            SettingKey::StartAt => "start_at",
            SettingKey::EndAt => "end_at",
            SettingKey::Paused => "paused",
            SettingKey::RegistrationOpen => "registration_open",
            SettingKey::SetupComplete => "setup_complete",
            SettingKey::PlatformVersion => "platform_version",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical form of a configuration key.
///
/// Lookup, storage, and cache invalidation all operate on this type, so a
/// setting addressed by enum in one call site and by string in another
/// resolves to a single row and a single cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<SettingKey> for ConfigKey {
    fn from(key: SettingKey) -> Self {
        ConfigKey(key.as_str().to_string())
    }
}

impl From<&str> for ConfigKey {
    fn from(key: &str) -> Self {
        ConfigKey(key.to_string())
    }
}

impl From<String> for ConfigKey {
    fn from(key: String) -> Self {
        ConfigKey(key)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One persisted configuration row. `value` is nullable in storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRecord {
    pub key: String,
    pub value: Option<String>,
}

/// A decoded configuration value.
///
/// Storage holds plain strings; this is the public read-side contract:
/// digit-only strings decode as integers, `true`/`false` (any case) as
/// booleans, everything else as the verbatim string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl ConfigValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

/// Decode a stored string into its [`ConfigValue`].
///
/// Returns `None` for the empty string: an empty stored value reads as
/// absent, indistinguishable from a key that was never set. Digit strings
/// that overflow `i64` fall through to `Str`.
pub fn decode_config_value(raw: &str) -> Option<ConfigValue> {
    if raw.is_empty() {
        return None;
    }
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<i64>() {
            return Some(ConfigValue::Int(n));
        }
    }
    if raw.eq_ignore_ascii_case("true") {
        Some(ConfigValue::Bool(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Some(ConfigValue::Bool(false))
    } else {
        Some(ConfigValue::Str(raw.to_string()))
    }
}
