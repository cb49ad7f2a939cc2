/// Layout values applied in bulk by a preset. Orientation and the document
/// text are never touched by a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetValues {
    pub columns: u32,
    pub margin_mm: u32,
    pub gap_mm: u32,
    pub font_px: u32,
    pub show_guides: bool,
}

/// Quick n-up layouts offered as one-click buttons in the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    TwoUp,
    ThreeUp,
    FourUp,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[Preset::TwoUp, Preset::ThreeUp, Preset::FourUp]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Preset::TwoUp => "2-up",
            Preset::ThreeUp => "3-up",
            Preset::FourUp => "4-up",
        }
    }

    pub fn values(self) -> PresetValues {
        match self {
            Preset::TwoUp => PresetValues {
                columns: 2,
                margin_mm: 12,
                gap_mm: 10,
                font_px: 11,
                show_guides: true,
            },
            Preset::ThreeUp => PresetValues {
                columns: 3,
                margin_mm: 12,
                gap_mm: 8,
                font_px: 10,
                show_guides: true,
            },
            Preset::FourUp => PresetValues {
                columns: 4,
                margin_mm: 10,
                gap_mm: 6,
                font_px: 10,
                show_guides: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_up_values() {
        let v = Preset::TwoUp.values();
        assert_eq!(v.columns, 2);
        assert_eq!(v.margin_mm, 12);
        assert_eq!(v.gap_mm, 10);
        assert_eq!(v.font_px, 11);
        assert!(v.show_guides);
    }

    #[test]
    fn test_three_up_values() {
        let v = Preset::ThreeUp.values();
        assert_eq!(v.columns, 3);
        assert_eq!(v.margin_mm, 12);
        assert_eq!(v.gap_mm, 8);
        assert_eq!(v.font_px, 10);
        assert!(v.show_guides);
    }

    #[test]
    fn test_four_up_values() {
        let v = Preset::FourUp.values();
        assert_eq!(v.columns, 4);
        assert_eq!(v.margin_mm, 10);
        assert_eq!(v.gap_mm, 6);
        assert_eq!(v.font_px, 10);
        assert!(v.show_guides);
    }

    #[test]
    fn test_display_names() {
        let names: Vec<&str> = Preset::all().iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["2-up", "3-up", "4-up"]);
    }
}
