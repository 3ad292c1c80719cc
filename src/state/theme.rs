//! Light/dark theme preference and the palettes it selects

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Persisted theme choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Navbar icon: offers the opposite mode
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

/// Colors used by every page section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub bar_track: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 252),
        surface: Color::Rgb(236, 238, 244),
        text: Color::Rgb(33, 37, 41),
        muted: Color::Rgb(108, 117, 125),
        accent: Color::Rgb(59, 91, 219),
        border: Color::Rgb(206, 212, 218),
        error: Color::Rgb(201, 42, 42),
        success: Color::Rgb(43, 138, 62),
        bar_track: Color::Rgb(222, 226, 230),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(18, 18, 24),
        surface: Color::Rgb(30, 32, 40),
        text: Color::Rgb(233, 236, 239),
        muted: Color::Rgb(134, 142, 150),
        accent: Color::Rgb(116, 143, 252),
        border: Color::Rgb(73, 80, 87),
        error: Color::Rgb(255, 107, 107),
        success: Color::Rgb(105, 219, 124),
        bar_track: Color::Rgb(52, 58, 64),
    };
}

/// Linear blend between two colors; non-RGB colors snap at the midpoint
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemePreference::default(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_round_trips() {
        let theme = ThemePreference::Light;
        assert_eq!(theme.toggle(), ThemePreference::Dark);
        assert_eq!(theme.toggle().toggle(), ThemePreference::Light);
    }

    #[test]
    fn test_icon_switches_between_moon_and_sun() {
        assert_eq!(ThemePreference::Light.icon(), "☾");
        assert_eq!(ThemePreference::Dark.icon(), "☀");
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
        let parsed: ThemePreference = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemePreference::Light);
    }

    #[test]
    fn test_unknown_value_fails_to_parse() {
        assert!(serde_json::from_str::<ThemePreference>("\"sepia\"").is_err());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemePreference::Light.palette(), ThemePreference::Dark.palette());
    }

    #[test]
    fn test_blend_endpoints_and_midpoint() {
        let black = Color::Rgb(0, 0, 0);
        let white = Color::Rgb(255, 255, 255);
        assert_eq!(blend(black, white, 0.0), black);
        assert_eq!(blend(black, white, 1.0), white);
        assert_eq!(blend(black, white, 0.5), Color::Rgb(128, 128, 128));
        assert_eq!(blend(black, white, 7.0), white);
    }

    #[test]
    fn test_blend_non_rgb_snaps() {
        assert_eq!(blend(Color::Red, Color::Blue, 0.2), Color::Red);
        assert_eq!(blend(Color::Red, Color::Blue, 0.8), Color::Blue);
    }
}
