//! Display settings
//!
//! Read from LocalStorage if present, then overridden by URL query parameters.
//! Nothing is written back.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Segments per circle when building round meshes
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 8,
            QualityPreset::Medium => 16,
            QualityPreset::High => 32,
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mesh detail
    pub quality: QualityPreset,
    /// Draw the translucent heading line ahead of the plane
    pub guide_line: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Show the control hints
    pub show_instructions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            guide_line: true,
            show_fps: false,
            show_instructions: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "sky_trail_settings";

    /// Apply `?quality=low&guide=0&fps=1&help=0` style overrides.
    /// Unknown keys and unparsable values are skipped.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, "1"));
            match key {
                "quality" => {
                    if let Some(q) = QualityPreset::from_str(value) {
                        self.quality = q;
                    }
                }
                "guide" => {
                    if let Some(on) = parse_flag(value) {
                        self.guide_line = on;
                    }
                }
                "fps" => {
                    if let Some(on) = parse_flag(value) {
                        self.show_fps = on;
                    }
                }
                "help" => {
                    if let Some(on) = parse_flag(value) {
                        self.show_instructions = on;
                    }
                }
                _ => log::debug!("Ignoring unknown setting: {}", key),
            }
        }
    }

    /// Parse stored JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Load settings from LocalStorage and the page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();

        let mut settings = window
            .as_ref()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|json| Self::from_json(&json))
            .unwrap_or_else(|| {
                log::info!("Using default settings");
                Self::default()
            });

        if let Some(search) = window.and_then(|w| w.location().search().ok()) {
            settings.apply_query(&search);
        }

        log::info!("Settings: quality {}", settings.quality.as_str());
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_overrides() {
        let mut settings = Settings::default();
        settings.apply_query("?quality=high&guide=0&fps=1&help=off");
        assert_eq!(settings.quality, QualityPreset::High);
        assert!(!settings.guide_line);
        assert!(settings.show_fps);
        assert!(!settings.show_instructions);
    }

    #[test]
    fn test_query_ignores_junk() {
        let mut settings = Settings::default();
        settings.apply_query("quality=ultra&guide=maybe&&volume=11");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_bare_key_enables_flag() {
        let mut settings = Settings::default();
        settings.apply_query("?fps");
        assert!(settings.show_fps);
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let settings = Settings::from_json(r#"{"quality":"Low"}"#).unwrap();
        assert_eq!(settings.quality, QualityPreset::Low);
        assert!(settings.guide_line);
        assert!(Settings::from_json("not json").is_none());
    }
}
