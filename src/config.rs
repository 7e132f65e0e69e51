//! Runtime configuration from environment variables.
//!
//! - `BATTLECITY_MAP_SIZE`: map edge length (default 13, clamped to `1..=MAX_MAP_SIZE`)
//! - `BATTLECITY_FRAME_MS`: frame interval in milliseconds (default 16)
//! - `BATTLECITY_GLYPH_RATIO`: terminal glyph height over width (default 2)
//! - `BATTLECITY_LOG_PATH`: write logs to this file
//! - `BATTLECITY_PLAIN_MAP`: "1" or "true" for an all-floor map
//! - `BATTLECITY_HUD`: "0" or "false" hides the status line

use std::str::FromStr;
use std::time::Duration;

use crate::types::{DEFAULT_GLYPH_RATIO, DEFAULT_MAP_SIZE, FRAME_MS, MAX_MAP_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub map_size: usize,
    pub frame_ms: u32,
    pub glyph_ratio: u16,
    pub log_path: Option<String>,
    pub plain_map: bool,
    pub show_hud: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_MAP_SIZE,
            frame_ms: FRAME_MS,
            glyph_ratio: DEFAULT_GLYPH_RATIO,
            log_path: None,
            plain_map: false,
            show_hud: true,
        }
    }
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup. Bad values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let mut map_size = parse_or(&lookup, "BATTLECITY_MAP_SIZE", defaults.map_size).max(1);
        if map_size > MAX_MAP_SIZE {
            log::warn!(
                "BATTLECITY_MAP_SIZE={} is too large, using {}",
                map_size,
                MAX_MAP_SIZE
            );
            map_size = MAX_MAP_SIZE;
        }
        let frame_ms = parse_or(&lookup, "BATTLECITY_FRAME_MS", defaults.frame_ms).max(1);
        let glyph_ratio = parse_or(&lookup, "BATTLECITY_GLYPH_RATIO", defaults.glyph_ratio).max(1);

        let log_path = lookup("BATTLECITY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let plain_map = lookup("BATTLECITY_PLAIN_MAP")
            .map(|v| is_truthy(&v))
            .unwrap_or(defaults.plain_map);
        let show_hud = lookup("BATTLECITY_HUD")
            .map(|v| is_truthy(&v))
            .unwrap_or(defaults.show_hud);

        Self {
            map_size,
            frame_ms,
            glyph_ratio,
            log_path,
            plain_map,
            show_hud,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms as u64)
    }
}

fn is_truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring invalid {}={:?}", key, raw);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
        assert_eq!(Config::default().frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn values_are_parsed() {
        let cfg = Config::from_lookup(lookup(&[
            ("BATTLECITY_MAP_SIZE", " 26 "),
            ("BATTLECITY_FRAME_MS", "33"),
            ("BATTLECITY_GLYPH_RATIO", "3"),
            ("BATTLECITY_LOG_PATH", "/tmp/battlecity.log"),
            ("BATTLECITY_PLAIN_MAP", "TRUE"),
            ("BATTLECITY_HUD", "0"),
        ]));
        assert_eq!(cfg.map_size, 26);
        assert_eq!(cfg.frame_ms, 33);
        assert_eq!(cfg.glyph_ratio, 3);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/battlecity.log"));
        assert!(cfg.plain_map);
        assert!(!cfg.show_hud);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = Config::from_lookup(lookup(&[
            ("BATTLECITY_MAP_SIZE", "huge"),
            ("BATTLECITY_FRAME_MS", "-5"),
            ("BATTLECITY_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.map_size, DEFAULT_MAP_SIZE);
        assert_eq!(cfg.frame_ms, FRAME_MS);
        assert_eq!(cfg.log_path, None);
    }

    #[test]
    fn zero_values_are_raised_to_one() {
        let cfg = Config::from_lookup(lookup(&[
            ("BATTLECITY_MAP_SIZE", "0"),
            ("BATTLECITY_GLYPH_RATIO", "0"),
        ]));
        assert_eq!(cfg.map_size, 1);
        assert_eq!(cfg.glyph_ratio, 1);
    }

    #[test]
    fn oversized_map_size_is_clamped() {
        for raw in ["100000", "4294967296"] {
            let cfg = Config::from_lookup(lookup(&[("BATTLECITY_MAP_SIZE", raw)]));
            assert_eq!(cfg.map_size, MAX_MAP_SIZE);
        }
        let cfg = Config::from_lookup(lookup(&[("BATTLECITY_MAP_SIZE", "256")]));
        assert_eq!(cfg.map_size, 256);
    }
}
