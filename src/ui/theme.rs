use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Chart series colors
    pub chart_primary: ColorSpec,
    pub chart_secondary: ColorSpec,
    pub chart_tertiary: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// Midnight theme (dark).
    ///
    pub fn midnight() -> Self {
        Theme {
            name: "midnight".to_string(),
            primary: ColorSpec {
                r: 102,
                g: 126,
                b: 234,
            }, // Indigo
            secondary: ColorSpec {
                r: 118,
                g: 75,
                b: 162,
            }, // Violet
            accent: ColorSpec {
                r: 79,
                g: 172,
                b: 254,
            }, // Sky
            text: ColorSpec {
                r: 224,
                g: 224,
                b: 235,
            }, // Foreground
            text_secondary: ColorSpec {
                r: 170,
                g: 175,
                b: 200,
            }, // Subtext
            text_muted: ColorSpec {
                r: 110,
                g: 115,
                b: 141,
            }, // Muted
            background: ColorSpec {
                r: 22,
                g: 24,
                b: 35,
            }, // Base
            surface: ColorSpec {
                r: 32,
                g: 35,
                b: 52,
            }, // Surface
            success: ColorSpec {
                r: 67,
                g: 233,
                b: 123,
            }, // Green
            warning: ColorSpec {
                r: 246,
                g: 211,
                b: 101,
            }, // Gold
            error: ColorSpec {
                r: 245,
                g: 87,
                b: 108,
            }, // Red
            info: ColorSpec {
                r: 79,
                g: 172,
                b: 254,
            }, // Sky
            border_active: ColorSpec {
                r: 102,
                g: 126,
                b: 234,
            }, // Indigo
            border_normal: ColorSpec {
                r: 110,
                g: 115,
                b: 141,
            }, // Muted
            highlight_bg: ColorSpec {
                r: 102,
                g: 126,
                b: 234,
            }, // Indigo
            highlight_fg: ColorSpec {
                r: 22,
                g: 24,
                b: 35,
            }, // Base
            chart_primary: ColorSpec {
                r: 245,
                g: 87,
                b: 108,
            }, // Red
            chart_secondary: ColorSpec {
                r: 79,
                g: 172,
                b: 254,
            }, // Sky
            chart_tertiary: ColorSpec {
                r: 67,
                g: 233,
                b: 123,
            }, // Green
        }
    }

    /// Daylight theme (light).
    ///
    pub fn daylight() -> Self {
        Theme {
            name: "daylight".to_string(),
            primary: ColorSpec {
                r: 102,
                g: 126,
                b: 234,
            }, // Indigo
            secondary: ColorSpec {
                r: 118,
                g: 75,
                b: 162,
            }, // Violet
            accent: ColorSpec {
                r: 2,
                g: 132,
                b: 199,
            }, // Sky
            text: ColorSpec {
                r: 44,
                g: 48,
                b: 66,
            }, // Foreground
            text_secondary: ColorSpec {
                r: 90,
                g: 96,
                b: 120,
            }, // Subtext
            text_muted: ColorSpec {
                r: 140,
                g: 146,
                b: 168,
            }, // Muted
            background: ColorSpec {
                r: 245,
                g: 247,
                b: 250,
            }, // Base
            surface: ColorSpec {
                r: 255,
                g: 255,
                b: 255,
            }, // Surface
            success: ColorSpec {
                r: 22,
                g: 163,
                b: 74,
            }, // Green
            warning: ColorSpec {
                r: 202,
                g: 138,
                b: 4,
            }, // Gold
            error: ColorSpec {
                r: 220,
                g: 38,
                b: 38,
            }, // Red
            info: ColorSpec {
                r: 2,
                g: 132,
                b: 199,
            }, // Sky
            border_active: ColorSpec {
                r: 102,
                g: 126,
                b: 234,
            }, // Indigo
            border_normal: ColorSpec {
                r: 140,
                g: 146,
                b: 168,
            }, // Muted
            highlight_bg: ColorSpec {
                r: 102,
                g: 126,
                b: 234,
            }, // Indigo
            highlight_fg: ColorSpec {
                r: 245,
                g: 247,
                b: 250,
            }, // Base
            chart_primary: ColorSpec {
                r: 220,
                g: 38,
                b: 38,
            }, // Red
            chart_secondary: ColorSpec {
                r: 2,
                g: 132,
                b: 199,
            }, // Sky
            chart_tertiary: ColorSpec {
                r: 22,
                g: 163,
                b: 74,
            }, // Green
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "midnight" => Some(Self::midnight()),
            "daylight" => Some(Self::daylight()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["midnight".to_string(), "daylight".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_resolves_known_themes() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown_theme() {
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn test_color_spec_to_color() {
        let spec = ColorSpec { r: 1, g: 2, b: 3 };
        assert_eq!(spec.to_color(), Color::Rgb(1, 2, 3));
    }
}
