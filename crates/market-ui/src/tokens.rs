//! Design tokens for TreadMarket
//!
//! Raw constant scales that the [`crate::theme::Theme`] table is built from:
//! spacing, border radii, shadows, and responsive breakpoints. Components
//! never read these modules directly; they go through an injected `Theme`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for string-keyed token lookups.
///
/// Typed access through `Theme` fields cannot fail; this error only exists
/// at the dynamic-name boundary and is never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {group} token: {name}")]
pub struct TokenError {
    /// Token group that was queried (e.g. "spacing")
    pub group: &'static str,
    /// The unrecognized token name
    pub name: String,
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels, six strictly increasing t-shirt steps
pub mod spacing {
    use super::TokenError;

    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 16px - Medium
    pub const MD: f32 = 16.0;
    /// 24px - Large
    pub const LG: f32 = 24.0;
    /// 32px - Extra large
    pub const XL: f32 = 32.0;
    /// 48px - 2x large
    pub const XXL: f32 = 48.0;

    /// The scale in defined order, smallest first
    pub const SCALE: [f32; 6] = [XS, SM, MD, LG, XL, XXL];

    /// Look up a spacing value by name
    pub fn get(name: &str) -> Result<f32, TokenError> {
        match name {
            "xs" => Ok(XS),
            "sm" => Ok(SM),
            "md" => Ok(MD),
            "lg" => Ok(LG),
            "xl" => Ok(XL),
            "xxl" => Ok(XXL),
            _ => Err(TokenError {
                group: "spacing",
                name: name.to_string(),
            }),
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    use super::TokenError;

    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (6px)
    pub const MD: f32 = 6.0;
    /// Large radius (8px)
    pub const LG: f32 = 8.0;
    /// Full/pill radius (9999px) - forces a pill or circle at any size
    pub const ROUND: f32 = 9999.0;

    /// Look up a radius value by name
    pub fn get(name: &str) -> Result<f32, TokenError> {
        match name {
            "sm" => Ok(SM),
            "md" => Ok(MD),
            "lg" => Ok(LG),
            "round" => Ok(ROUND),
            _ => Err(TokenError {
                group: "radius",
                name: name.to_string(),
            }),
        }
    }
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// Hairline border (0.5px)
    pub const HAIRLINE: f32 = 0.5;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Medium border (2px)
    pub const MEDIUM: f32 = 2.0;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definition for floating elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Shadow color
    pub color: String,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, opacity: f32, color: &str) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            opacity,
            color: color.to_string(),
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, 0.0, "transparent")
    }

    /// Floating element shadow (overlay buttons, fabs)
    pub fn floating() -> Shadow {
        Shadow::new(0.0, 2.0, 3.84, 0.25, "#000000")
    }

    /// Card hover shadow
    pub fn card() -> Shadow {
        Shadow::new(0.0, 1.0, 3.0, 0.1, "#000000")
    }
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Screen size classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSize {
    /// Below the medium breakpoint
    Small,
    /// Between medium and large
    Medium,
    /// At or above the large breakpoint
    Large,
}

/// Responsive breakpoint widths
pub mod breakpoints {
    /// Small breakpoint (480px)
    pub const SMALL: u32 = 480;
    /// Medium breakpoint (768px)
    pub const MEDIUM: u32 = 768;
    /// Large breakpoint (1024px)
    pub const LARGE: u32 = 1024;

    /// Check if width classifies as a small screen
    pub fn is_small(width: u32) -> bool {
        width < MEDIUM
    }

    /// Check if width classifies as a medium screen
    pub fn is_medium(width: u32) -> bool {
        width >= MEDIUM && width < LARGE
    }

    /// Check if width classifies as a large screen
    pub fn is_large(width: u32) -> bool {
        width >= LARGE
    }

    /// Classify a width into a screen size
    pub fn screen_size(width: u32) -> super::ScreenSize {
        if is_large(width) {
            super::ScreenSize::Large
        } else if is_medium(width) {
            super::ScreenSize::Medium
        } else {
            super::ScreenSize::Small
        }
    }
}
