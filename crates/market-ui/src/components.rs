//! UI component library for TreadMarket
//!
//! Primitive components are stateless: they read their props for one
//! evaluation, resolve a style declaration against an injected [`Theme`],
//! and hand the result to the rendering primitive. Activation handling
//! belongs to the caller; the only component that talks to anything beyond
//! its props is [`ProfileButton`], which requests route changes through the
//! [`Navigator`] collaborator.
//!
//! # Available Components
//!
//! - [`Button`] - Pressable with primary/secondary variants
//! - [`Card`], [`CardHeader`], [`CardTitle`], [`CardContent`], [`CardFooter`]
//! - [`ProfileButton`] - Floating profile-entry button

use crate::navigation::{Navigator, Route};
use crate::style::{Alignment, Dimension, Position, StyleFragment, StyleLayers};
use crate::theme::Theme;
use crate::tokens::{border, shadows};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Common Types
// =============================================================================

/// Event handler callback, represented as a string identifier
pub type EventHandler = String;

/// Platform-level properties a component forwards to its rendering
/// primitive.
///
/// This is the full pass-through surface: a closed set of capabilities, not
/// an open-ended record of arbitrary keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformProps {
    /// Accessible label for screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
    /// Activation callback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Test ID for UI testing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

/// Error for unrecognized variant names at the string boundary.
///
/// Variants are closed enums, so this can only occur when parsing external
/// input; it fails loudly instead of degrading to the default variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

// =============================================================================
// Button
// =============================================================================

/// Button presentation variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled with the primary brand color
    #[default]
    Primary,
    /// Neutral tag background with brand-colored label
    Secondary,
}

impl FromStr for ButtonVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ButtonVariant::Primary),
            "secondary" => Ok(ButtonVariant::Secondary),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Pressable button component.
///
/// A dumb pressable wrapper: it resolves its style declaration and forwards
/// the label and platform props; what happens on activation is entirely the
/// caller's business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Label text (children)
    pub label: String,
    /// Presentation variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Caller style override, merged last
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_override: Option<StyleFragment>,
    /// Platform pass-through props
    #[serde(default)]
    pub platform: PlatformProps,
}

impl Button {
    /// Create a button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set a caller style override
    pub fn with_style_override(mut self, style: StyleFragment) -> Self {
        self.style_override = Some(style);
        self
    }

    /// Set the activation handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.platform.on_press = Some(handler.into());
        self
    }

    /// Set the accessible label
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.platform.accessibility_label = Some(label.into());
        self
    }

    /// Base fragment, applied for every variant
    fn base_fragment(theme: &Theme) -> StyleFragment {
        StyleFragment {
            background_color: Some(theme.colors.primary.clone()),
            padding: Some(12.0),
            border_radius: Some(theme.radius.lg),
            align_items: Some(Alignment::Center),
            text_color: Some(theme.colors.text.light.clone()),
            font_size: Some(theme.typography.font_size.md),
            font_weight: Some(theme.typography.font_weight.medium.clone()),
            ..Default::default()
        }
    }

    /// Variant override fragment, if this variant defines one
    fn variant_fragment(&self, theme: &Theme) -> Option<StyleFragment> {
        match self.variant {
            ButtonVariant::Primary => None,
            ButtonVariant::Secondary => Some(StyleFragment {
                background_color: Some(theme.colors.tag.clone()),
                text_color: Some(theme.colors.primary.clone()),
                ..Default::default()
            }),
        }
    }

    /// Resolve the final style declaration for this button
    pub fn computed_style(&self, theme: &Theme) -> StyleFragment {
        let mut layers = StyleLayers::new(Self::base_fragment(theme));
        if let Some(variant) = self.variant_fragment(theme) {
            layers = layers.with_variant(variant);
        }
        if let Some(caller) = &self.style_override {
            layers = layers.with_caller(caller.clone());
        }
        layers.resolve()
    }
}

// =============================================================================
// Card Family
// =============================================================================

/// Generic card container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Caller style override, merged after the base
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_override: Option<StyleFragment>,
    /// Platform pass-through props
    #[serde(default)]
    pub platform: PlatformProps,
}

impl Card {
    /// Create a card
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a caller style override
    pub fn with_style_override(mut self, style: StyleFragment) -> Self {
        self.style_override = Some(style);
        self
    }

    /// Resolve the final style declaration for this card
    pub fn computed_style(&self, theme: &Theme) -> StyleFragment {
        let base = StyleFragment {
            background_color: Some(theme.colors.surface.clone()),
            border_radius: Some(theme.radius.lg),
            padding: Some(theme.spacing.md),
            border_width: Some(border::THIN),
            border_color: Some(theme.colors.border.clone()),
            ..Default::default()
        };
        let mut layers = StyleLayers::new(base);
        if let Some(caller) = &self.style_override {
            layers = layers.with_caller(caller.clone());
        }
        layers.resolve()
    }
}

/// Card header: spaced off from the content below it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHeader;

impl CardHeader {
    /// Resolve the header's style declaration
    pub fn computed_style(theme: &Theme) -> StyleFragment {
        StyleFragment {
            margin_bottom: Some(theme.spacing.md),
            ..Default::default()
        }
    }
}

/// Card title: identity container.
///
/// Contributes no style of its own. The original design never gave the
/// title a distinguishing treatment; that gap is preserved here rather than
/// papered over with invented styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTitle;

impl CardTitle {
    /// Resolve the title's style declaration (always empty)
    pub fn computed_style(_theme: &Theme) -> StyleFragment {
        StyleFragment::default()
    }
}

/// Card content block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent;

impl CardContent {
    /// Resolve the content block's style declaration
    pub fn computed_style(theme: &Theme) -> StyleFragment {
        StyleFragment {
            margin_bottom: Some(theme.spacing.md),
            ..Default::default()
        }
    }
}

/// Card footer: pushed to the end of available space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFooter;

impl CardFooter {
    /// Resolve the footer's style declaration
    pub fn computed_style(_theme: &Theme) -> StyleFragment {
        StyleFragment {
            margin_top: Some(Dimension::Auto),
            ..Default::default()
        }
    }
}

// =============================================================================
// Profile Button
// =============================================================================

/// Visibility state of a conditionally rendered component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Rendered
    Visible,
    /// Not rendered at all
    Hidden,
}

/// Rendered output of a visible [`ProfileButton`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileButtonView {
    /// Resolved floating style
    pub style: StyleFragment,
    /// Route pushed on activation
    pub target: Route,
    /// Icon name for the rendering primitive
    pub icon: String,
}

/// Floating profile-entry button.
///
/// Hidden on the profile page itself; everywhere else it renders a floating
/// pressable that pushes the profile route on activation. It keeps no
/// navigation state of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileButton;

impl ProfileButton {
    /// The route this button both targets and hides on
    pub fn self_route() -> Route {
        Route::ProfileDetails
    }

    /// Compute visibility for the current route
    pub fn visibility(current: &Route) -> Visibility {
        if *current == Self::self_route() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// Render against the current route; `None` when hidden
    pub fn render(&self, theme: &Theme, current: &Route) -> Option<ProfileButtonView> {
        if Self::visibility(current) == Visibility::Hidden {
            return None;
        }
        Some(ProfileButtonView {
            style: StyleFragment {
                position: Some(Position::Absolute),
                top: Some(40.0),
                right: Some(theme.spacing.md),
                padding: Some(theme.spacing.sm),
                background_color: Some(theme.colors.surface.clone()),
                border_radius: Some(20.0),
                shadow: Some(shadows::floating()),
                ..Default::default()
            },
            target: Self::self_route(),
            icon: "user".to_string(),
        })
    }

    /// Request navigation to the profile route, fire-and-forget
    pub fn activate(&self, navigator: &mut dyn Navigator) {
        navigator.push(Self::self_route());
    }
}
