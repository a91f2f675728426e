//! User interface for TreadMarket
//!
//! This crate provides the UI layer for the tyre marketplace, including
//! components, screens, navigation, theming, and design system primitives.
//!
//! # Design System
//!
//! The design system is built around a muted forest palette:
//! - Primary: Sage green (#5B7560)
//! - Secondary: Deep pine (#344E41)
//! - Accent: Olive gold (#AB9404)
//!
//! A single light theme is provided through [`theme::Theme::new`]. The
//! theme is plain data handed to components by reference, so derived
//! themes are just edited copies.
//!
//! # Modules
//!
//! - [`theme`] - Theme table: colors, spacing, radii, typography
//! - [`tokens`] - Design tokens (spacing scale, radii, shadows, breakpoints)
//! - [`typography`] - Text variants and resolved text styles
//! - [`style`] - Style fragments and ordered merge resolution
//! - [`components`] - UI component library
//! - [`screens`] - Composed screens and overlays
//! - [`navigation`] - Routes, router, and navigation stack
//!
//! # Example
//!
//! ```rust
//! use market_ui::components::{Button, ButtonVariant};
//! use market_ui::theme::Theme;
//! use market_ui::tokens::spacing;
//!
//! let theme = Theme::new();
//!
//! // Resolve a button's style declaration
//! let button = Button::new("Buy now").with_variant(ButtonVariant::Secondary);
//! let style = button.computed_style(&theme);
//! assert_eq!(style.background_color, Some(theme.colors.tag.clone()));
//!
//! // Use design tokens directly
//! let gap = spacing::MD;
//! assert_eq!(gap, theme.spacing.md);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    parse_hex_color, rgb_to_hex, Color, Colors, FontSizes, FontWeights, RadiusScale,
    SpacingScale, TextColors, Theme, Typography,
};

pub use tokens::{
    border, breakpoints, radius, shadows, spacing, ScreenSize, Shadow, TokenError,
};

pub use style::{
    resolve, Alignment, Dimension, JustifyContent, Position, StyleFragment, StyleLayers,
};

pub use typography::{TextStyle, TextVariant};

pub use components::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle,
    EventHandler, PlatformProps, ProfileButton, ProfileButtonView, UnknownVariant,
    Visibility,
};

pub use screens::{listing_card, ListingCard, NotFoundScreen, SuccessPopup};

pub use navigation::{
    NavigationStack, Navigator, Route, RouteParams, Router, StackEntry,
};
