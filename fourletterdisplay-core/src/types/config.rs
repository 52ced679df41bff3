//! Display configuration types

use serde_json::{Map, Value};

/// Lowest brightness the device accepts
pub const MIN_BRIGHTNESS: i64 = 0;
/// Highest brightness the device accepts
pub const MAX_BRIGHTNESS: i64 = 15;

/// Backend display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Day brightness (0..=15)
    pub brightness: i64,
    /// Whether brightness drops to `nightbrightness` between sunset and sunrise
    pub nightmode: bool,
    /// Night brightness (0..=15)
    pub nightbrightness: i64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: MAX_BRIGHTNESS,
            nightmode: false,
            nightbrightness: 4,
        }
    }
}

impl DisplayConfig {
    /// Brightness the device should currently use
    #[must_use]
    pub fn effective_brightness(&self, is_night: bool) -> i64 {
        if self.nightmode && is_night {
            self.nightbrightness
        } else {
            self.brightness
        }
    }
}

/// Controller-local copy of the backend configuration.
///
/// Holds the raw object so backend-owned fields survive untouched. Only
/// [`ConfigMirror::merge`] writes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMirror {
    fields: Map<String, Value>,
}

impl ConfigMirror {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a snapshot into the mirror.
    ///
    /// Returns `false` (and leaves the mirror alone) for `None`, non-object and
    /// empty-object snapshots.
    pub fn merge(&mut self, snapshot: Option<&Value>) -> bool {
        let Some(Value::Object(fields)) = snapshot else {
            return false;
        };
        if fields.is_empty() {
            return false;
        }
        for (key, value) in fields {
            self.fields.insert(key.clone(), value.clone());
        }
        true
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn brightness(&self) -> Option<i64> {
        self.fields.get("brightness").and_then(Value::as_i64)
    }

    #[must_use]
    pub fn nightmode(&self) -> Option<bool> {
        self.fields.get("nightmode").and_then(Value::as_bool)
    }

    #[must_use]
    pub fn nightbrightness(&self) -> Option<i64> {
        self.fields.get("nightbrightness").and_then(Value::as_i64)
    }

    /// Typed view, missing fields fall back to the backend defaults
    #[must_use]
    pub fn to_display_config(&self) -> DisplayConfig {
        let defaults = DisplayConfig::default();
        DisplayConfig {
            brightness: self.brightness().unwrap_or(defaults.brightness),
            nightmode: self.nightmode().unwrap_or(defaults.nightmode),
            nightbrightness: self.nightbrightness().unwrap_or(defaults.nightbrightness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_matches_backend() {
        let c = DisplayConfig::default();
        assert_eq!(c.brightness, 15);
        assert!(!c.nightmode);
        assert_eq!(c.nightbrightness, 4);
    }

    #[test]
    fn effective_brightness_only_dims_at_night_with_nightmode() {
        let mut c = DisplayConfig::default();
        assert_eq!(c.effective_brightness(true), 15);
        c.nightmode = true;
        assert_eq!(c.effective_brightness(false), 15);
        assert_eq!(c.effective_brightness(true), 4);
    }

    #[test]
    fn merge_ignores_null_and_empty() {
        let mut m = ConfigMirror::new();
        assert!(!m.merge(None));
        assert!(!m.merge(Some(&Value::Null)));
        assert!(!m.merge(Some(&json!({}))));
        assert!(!m.merge(Some(&json!([1, 2]))));
        assert!(m.is_empty());
    }

    #[test]
    fn merge_sequence_keeps_earlier_fields() {
        let mut m = ConfigMirror::new();
        m.merge(Some(&Value::Null));
        m.merge(Some(&json!({})));
        m.merge(Some(&json!({ "brightness": 5 })));
        m.merge(Some(&json!({ "nightmode": true })));
        assert_eq!(
            Value::Object(m.as_map().clone()),
            json!({ "brightness": 5, "nightmode": true })
        );
    }

    #[test]
    fn merge_overwrites_existing_keys() {
        let mut m = ConfigMirror::new();
        m.merge(Some(&json!({ "brightness": 5, "extra": "kept" })));
        m.merge(Some(&json!({ "brightness": 9 })));
        assert_eq!(m.brightness(), Some(9));
        assert_eq!(m.get("extra"), Some(&json!("kept")));
    }

    #[test]
    fn typed_view_uses_defaults_for_missing_fields() {
        let mut m = ConfigMirror::new();
        m.merge(Some(&json!({ "nightmode": true })));
        assert_eq!(
            m.to_display_config(),
            DisplayConfig {
                brightness: 15,
                nightmode: true,
                nightbrightness: 4,
            }
        );
    }

    #[test]
    fn typed_view_falls_back_per_field_on_wrong_type() {
        let mut m = ConfigMirror::new();
        m.merge(Some(&json!({ "brightness": "high", "nightbrightness": 2 })));
        let config = m.to_display_config();
        assert_eq!(config.brightness, 15);
        assert_eq!(config.nightbrightness, 2);
    }
}
