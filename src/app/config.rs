use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::error::AppError;
use super::presets::Preset;

/// A4 sheet dimensions in millimeters.
pub const A4_WIDTH_MM: u32 = 210;
pub const A4_HEIGHT_MM: u32 = 297;

pub const COLUMNS_RANGE: (u32, u32) = (1, 4);
pub const MARGIN_RANGE_MM: (u32, u32) = (5, 25);
pub const GAP_RANGE_MM: (u32, u32) = (4, 20);
pub const FONT_RANGE_PX: (u32, u32) = (9, 16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Keyword used in the generated `@page` rule and toolbar text.
    pub fn as_css(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Physical page size in millimeters (width, height).
    pub fn page_size_mm(self) -> (u32, u32) {
        match self {
            Orientation::Portrait => (A4_WIDTH_MM, A4_HEIGHT_MM),
            Orientation::Landscape => (A4_HEIGHT_MM, A4_WIDTH_MM),
        }
    }
}

/// Current page layout. Owned by the application state and passed by
/// reference to the assembler; the Markdown text itself lives in the
/// editor's buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,

    #[serde(default = "default_columns")]
    pub columns: u32,

    #[serde(default = "default_margin_mm")]
    pub margin_mm: u32,

    #[serde(default = "default_gap_mm")]
    pub gap_mm: u32,

    #[serde(default = "default_font_px")]
    pub font_px: u32,

    #[serde(default = "default_show_guides")]
    pub show_guides: bool,

    #[serde(default = "default_show_print_button")]
    pub show_print_button: bool,
}

fn default_orientation() -> Orientation {
    Orientation::Portrait
}

fn default_columns() -> u32 {
    2
}

fn default_margin_mm() -> u32 {
    12
}

fn default_gap_mm() -> u32 {
    8
}

fn default_font_px() -> u32 {
    11
}

fn default_show_guides() -> bool {
    true
}

fn default_show_print_button() -> bool {
    true
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            orientation: default_orientation(),
            columns: default_columns(),
            margin_mm: default_margin_mm(),
            gap_mm: default_gap_mm(),
            font_px: default_font_px(),
            show_guides: default_show_guides(),
            show_print_button: default_show_print_button(),
        }
    }
}

fn clamp(value: u32, (lo, hi): (u32, u32)) -> u32 {
    value.clamp(lo, hi)
}

impl PageConfig {
    // The UI controls are bounded to the same ranges, so clamping here is
    // normally a no-op; it keeps values loaded from an edited config file
    // inside the layout's limits too.

    pub fn set_columns(&mut self, columns: u32) {
        self.columns = clamp(columns, COLUMNS_RANGE);
    }

    pub fn set_margin_mm(&mut self, margin_mm: u32) {
        self.margin_mm = clamp(margin_mm, MARGIN_RANGE_MM);
    }

    pub fn set_gap_mm(&mut self, gap_mm: u32) {
        self.gap_mm = clamp(gap_mm, GAP_RANGE_MM);
    }

    pub fn set_font_px(&mut self, font_px: u32) {
        self.font_px = clamp(font_px, FONT_RANGE_PX);
    }

    /// Bulk-set the layout fields a preset carries.
    pub fn apply_preset(&mut self, preset: Preset) {
        let v = preset.values();
        self.columns = v.columns;
        self.margin_mm = v.margin_mm;
        self.gap_mm = v.gap_mm;
        self.font_px = v.font_px;
        self.show_guides = v.show_guides;
    }

    /// Load the last-used layout from disk, or defaults if not present.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str::<PageConfig>(&contents) {
                Ok(mut config) => {
                    config.clamp_all();
                    config
                }
                Err(e) => {
                    eprintln!("Failed to parse layout config: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save the current layout to disk.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;

        Ok(())
    }

    /// Config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("pagepress");
        path.push("settings.json");
        path
    }

    fn clamp_all(&mut self) {
        self.columns = clamp(self.columns, COLUMNS_RANGE);
        self.margin_mm = clamp(self.margin_mm, MARGIN_RANGE_MM);
        self.gap_mm = clamp(self.gap_mm, GAP_RANGE_MM);
        self.font_px = clamp(self.font_px, FONT_RANGE_PX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageConfig::default();
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.columns, 2);
        assert_eq!(config.margin_mm, 12);
        assert_eq!(config.gap_mm, 8);
        assert_eq!(config.font_px, 11);
        assert!(config.show_guides);
        assert!(config.show_print_button);
    }

    #[test]
    fn test_page_size_portrait() {
        assert_eq!(Orientation::Portrait.page_size_mm(), (210, 297));
    }

    #[test]
    fn test_page_size_landscape() {
        assert_eq!(Orientation::Landscape.page_size_mm(), (297, 210));
    }

    #[test]
    fn test_setters_clamp_low() {
        let mut config = PageConfig::default();
        config.set_columns(0);
        config.set_margin_mm(1);
        config.set_gap_mm(0);
        config.set_font_px(4);
        assert_eq!(config.columns, 1);
        assert_eq!(config.margin_mm, 5);
        assert_eq!(config.gap_mm, 4);
        assert_eq!(config.font_px, 9);
    }

    #[test]
    fn test_setters_clamp_high() {
        let mut config = PageConfig::default();
        config.set_columns(9);
        config.set_margin_mm(100);
        config.set_gap_mm(50);
        config.set_font_px(40);
        assert_eq!(config.columns, 4);
        assert_eq!(config.margin_mm, 25);
        assert_eq!(config.gap_mm, 20);
        assert_eq!(config.font_px, 16);
    }

    #[test]
    fn test_setters_keep_in_range_values() {
        let mut config = PageConfig::default();
        config.set_columns(3);
        config.set_margin_mm(15);
        assert_eq!(config.columns, 3);
        assert_eq!(config.margin_mm, 15);
    }

    #[test]
    fn test_apply_preset() {
        let mut config = PageConfig {
            orientation: Orientation::Landscape,
            ..Default::default()
        };
        config.apply_preset(Preset::ThreeUp);
        assert_eq!(config.columns, 3);
        assert_eq!(config.margin_mm, 12);
        assert_eq!(config.gap_mm, 8);
        assert_eq!(config.font_px, 10);
        assert!(config.show_guides);
        // Presets never change the orientation
        assert_eq!(config.orientation, Orientation::Landscape);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = PageConfig {
            orientation: Orientation::Landscape,
            columns: 4,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: PageConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate an old config missing new fields
        let json = r#"{"columns": 3}"#;
        let config: PageConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.columns, 3);
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.margin_mm, 12);
        assert!(config.show_print_button);
    }

    #[test]
    fn test_orientation_serialization() {
        let config = PageConfig {
            orientation: Orientation::Landscape,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"Landscape\""));
    }
}
