//! Theme table for TreadMarket
//!
//! The theme is an explicitly constructed, immutable configuration object:
//! built once at process start by [`Theme::new`] and threaded by reference
//! into every component that needs it. There is no module-level singleton
//! and no write path after construction; a consumer needing different
//! values derives a new table instead of patching the shared one.
//!
//! # Usage
//!
//! ```rust
//! use market_ui::theme::Theme;
//!
//! let theme = Theme::new();
//! assert_eq!(theme.colors.primary, "#5B7560");
//! assert_eq!(theme.spacing.md, 16.0);
//! ```

use crate::tokens::{radius, spacing, TokenError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB hex string (e.g. "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components.
///
/// Returns `None` for anything that is not a 6-digit hex color, including
/// multi-byte input that does not split on the digit boundaries.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Color Group
// =============================================================================

/// Text color scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    /// Primary body text
    pub primary: Color,
    /// Secondary/supporting text
    pub secondary: Color,
    /// Light text for filled surfaces
    pub light: Color,
    /// Muted/disabled text
    pub muted: Color,
}

/// Semantic color tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    /// App background
    pub background: Color,
    /// Primary brand color (forest green)
    pub primary: Color,
    /// Secondary brand color (deep green)
    pub secondary: Color,
    /// Accent color (gold)
    pub accent: Color,
    /// Text color scale
    pub text: TextColors,
    /// Default border color
    pub border: Color,
    /// Neutral tag/chip background
    pub tag: Color,
    /// Elevated surface color (cards, popups)
    pub surface: Color,
}

// =============================================================================
// Spacing Group
// =============================================================================

/// Six-step spacing scale, strictly increasing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Extra small step
    pub xs: f32,
    /// Small step
    pub sm: f32,
    /// Medium step
    pub md: f32,
    /// Large step
    pub lg: f32,
    /// Extra large step
    pub xl: f32,
    /// 2x large step
    pub xxl: f32,
}

impl SpacingScale {
    /// The scale in defined order, smallest first
    pub fn steps(&self) -> [f32; 6] {
        [self.xs, self.sm, self.md, self.lg, self.xl, self.xxl]
    }

    /// Look up a step by name
    pub fn get(&self, name: &str) -> Result<f32, TokenError> {
        match name {
            "xs" => Ok(self.xs),
            "sm" => Ok(self.sm),
            "md" => Ok(self.md),
            "lg" => Ok(self.lg),
            "xl" => Ok(self.xl),
            "xxl" => Ok(self.xxl),
            _ => Err(TokenError {
                group: "spacing",
                name: name.to_string(),
            }),
        }
    }
}

// =============================================================================
// Border Radius Group
// =============================================================================

/// Named border radii
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    /// Small radius
    pub sm: f32,
    /// Medium radius
    pub md: f32,
    /// Large radius
    pub lg: f32,
    /// Pill/circle radius, large enough to round any element fully
    pub round: f32,
}

// =============================================================================
// Typography Group
// =============================================================================

/// Six-step font size scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Extra small (12px)
    pub xs: f32,
    /// Small (14px)
    pub sm: f32,
    /// Medium (16px)
    pub md: f32,
    /// Large (18px)
    pub lg: f32,
    /// Extra large (24px)
    pub xl: f32,
    /// 2x large (32px)
    pub xxl: f32,
}

/// Named font weight strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontWeights {
    /// Regular ("400")
    pub regular: String,
    /// Medium ("500")
    pub medium: String,
    /// Semi-bold ("600")
    pub semi_bold: String,
    /// Bold ("700")
    pub bold: String,
}

/// Typography token group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Font family fallback chain
    pub font_family: String,
    /// Font size scale
    pub font_size: FontSizes,
    /// Font weight names
    pub font_weight: FontWeights,
}

// =============================================================================
// Theme
// =============================================================================

/// Complete theme table: four read-only token groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Semantic colors
    pub colors: Colors,
    /// Spacing scale
    pub spacing: SpacingScale,
    /// Border radii
    pub radius: RadiusScale,
    /// Typography tokens
    pub typography: Typography,
}

impl Theme {
    /// Build the marketplace theme table
    pub fn new() -> Self {
        Self {
            colors: Colors {
                background: "#F5F5F5".to_string(),
                primary: "#5B7560".to_string(),
                secondary: "#344E41".to_string(),
                accent: "#AB9404".to_string(),
                text: TextColors {
                    primary: "#2B2B2B".to_string(),
                    secondary: "#6B6B6B".to_string(),
                    light: "#FFFFFF".to_string(),
                    muted: "#969696".to_string(),
                },
                border: "#E6E6E6".to_string(),
                tag: "#EBEEEC".to_string(),
                surface: "#FFFFFF".to_string(),
            },
            spacing: SpacingScale {
                xs: spacing::XS,
                sm: spacing::SM,
                md: spacing::MD,
                lg: spacing::LG,
                xl: spacing::XL,
                xxl: spacing::XXL,
            },
            radius: RadiusScale {
                sm: radius::SM,
                md: radius::MD,
                lg: radius::LG,
                round: radius::ROUND,
            },
            typography: Typography {
                font_family: "Inter, -apple-system, Roboto, Helvetica, sans-serif".to_string(),
                font_size: FontSizes {
                    xs: 12.0,
                    sm: 14.0,
                    md: 16.0,
                    lg: 18.0,
                    xl: 24.0,
                    xxl: 32.0,
                },
                font_weight: FontWeights {
                    regular: "400".to_string(),
                    medium: "500".to_string(),
                    semi_bold: "600".to_string(),
                    bold: "700".to_string(),
                },
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#5B7560"), Some((91, 117, 96)));
        assert_eq!(parse_hex_color("5B7560"), Some((91, 117, 96)));
        assert_eq!(parse_hex_color("#FF"), None);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        // Multi-byte input must return None, not trip a slice boundary
        assert_eq!(parse_hex_color("日本語"), None);
        assert_eq!(parse_hex_color("#日本語入力"), None);
        assert_eq!(parse_hex_color("ZZZZZZ"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 255, 255), "#FFFFFF");
        assert_eq!(rgb_to_hex(91, 117, 96), "#5B7560");
    }

    #[test]
    fn test_theme_colors() {
        let theme = Theme::new();
        assert_eq!(theme.colors.background, "#F5F5F5");
        assert_eq!(theme.colors.primary, "#5B7560");
        assert_eq!(theme.colors.secondary, "#344E41");
        assert_eq!(theme.colors.accent, "#AB9404");
        assert_eq!(theme.colors.border, "#E6E6E6");
        assert_eq!(theme.colors.tag, "#EBEEEC");
        assert_eq!(theme.colors.surface, "#FFFFFF");
    }

    #[test]
    fn test_theme_text_scale() {
        let theme = Theme::new();
        assert_eq!(theme.colors.text.primary, "#2B2B2B");
        assert_eq!(theme.colors.text.secondary, "#6B6B6B");
        assert_eq!(theme.colors.text.light, "#FFFFFF");
        assert_eq!(theme.colors.text.muted, "#969696");
    }

    #[test]
    fn test_theme_spacing_exact_values() {
        let theme = Theme::new();
        assert_eq!(theme.spacing.xs, 4.0);
        assert_eq!(theme.spacing.sm, 8.0);
        assert_eq!(theme.spacing.md, 16.0);
        assert_eq!(theme.spacing.lg, 24.0);
        assert_eq!(theme.spacing.xl, 32.0);
        assert_eq!(theme.spacing.xxl, 48.0);
    }

    #[test]
    fn test_theme_spacing_strictly_increasing() {
        let theme = Theme::new();
        for pair in theme.spacing.steps().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_theme_spacing_get() {
        let theme = Theme::new();
        assert_eq!(theme.spacing.get("md"), Ok(16.0));
        assert!(theme.spacing.get("giant").is_err());
    }

    #[test]
    fn test_theme_radius() {
        let theme = Theme::new();
        assert_eq!(theme.radius.sm, 4.0);
        assert_eq!(theme.radius.md, 6.0);
        assert_eq!(theme.radius.lg, 8.0);
        assert!(theme.radius.round >= 9999.0);
    }

    #[test]
    fn test_theme_typography() {
        let theme = Theme::new();
        assert!(theme.typography.font_family.starts_with("Inter"));
        assert_eq!(theme.typography.font_size.xs, 12.0);
        assert_eq!(theme.typography.font_size.xxl, 32.0);
        assert_eq!(theme.typography.font_weight.regular, "400");
        assert_eq!(theme.typography.font_weight.medium, "500");
        assert_eq!(theme.typography.font_weight.semi_bold, "600");
        assert_eq!(theme.typography.font_weight.bold, "700");
    }

    #[test]
    fn test_font_sizes_strictly_increasing() {
        let fs = Theme::new().typography.font_size;
        let steps = [fs.xs, fs.sm, fs.md, fs.lg, fs.xl, fs.xxl];
        for pair in steps.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_all_theme_colors_are_valid_hex() {
        let theme = Theme::new();
        let colors = [
            &theme.colors.background,
            &theme.colors.primary,
            &theme.colors.secondary,
            &theme.colors.accent,
            &theme.colors.text.primary,
            &theme.colors.text.secondary,
            &theme.colors.text.light,
            &theme.colors.text.muted,
            &theme.colors.border,
            &theme.colors.tag,
            &theme.colors.surface,
        ];
        for color in colors {
            assert!(parse_hex_color(color).is_some(), "invalid color {color}");
        }
    }

    #[test]
    fn test_text_background_contrast() {
        let theme = Theme::new();
        let bg = parse_hex_color(&theme.colors.background).unwrap();
        let text = parse_hex_color(&theme.colors.text.primary).unwrap();

        let bg_lum = (bg.0 as u32 + bg.1 as u32 + bg.2 as u32) / 3;
        let text_lum = (text.0 as u32 + text.1 as u32 + text.2 as u32) / 3;
        let diff = bg_lum.abs_diff(text_lum);

        assert!(diff > 100, "insufficient text contrast: {diff}");
    }

    #[test]
    fn test_theme_serialization_round_trip() {
        let theme = Theme::new();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn test_derived_theme_leaves_shared_table_untouched() {
        let theme = Theme::new();
        let mut branded = theme.clone();
        branded.colors.primary = "#3A5A40".to_string();
        assert_eq!(theme.colors.primary, "#5B7560");
        assert_eq!(branded.colors.primary, "#3A5A40");
    }
}
