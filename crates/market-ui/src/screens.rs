//! Composed screens and overlays for TreadMarket
//!
//! Screens wire the primitive components together: they resolve the same
//! style declarations, compose the card family into listing summaries, and
//! route activations through the [`Navigator`] collaborator.

use crate::components::{Button, Card, CardContent, CardFooter, CardHeader, CardTitle};
use crate::navigation::{Navigator, Route};
use crate::style::{Alignment, Dimension, JustifyContent, StyleFragment};
use crate::theme::Theme;
use crate::tokens::radius;
use serde::{Deserialize, Serialize};

// =============================================================================
// Not Found Screen
// =============================================================================

/// Fallback screen for unmatched paths.
///
/// Shows a short message and a single link back into the app. The link is
/// the only interactive element; activating it replaces the dead end with
/// the login flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotFoundScreen;

impl NotFoundScreen {
    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        "This screen doesn't exist."
    }

    /// Link label
    pub fn link_label(&self) -> &'static str {
        "Go to home screen!"
    }

    /// Centered container style
    pub fn container_style(&self, _theme: &Theme) -> StyleFragment {
        StyleFragment {
            align_items: Some(Alignment::Center),
            justify_content: Some(JustifyContent::Center),
            padding: Some(20.0),
            ..Default::default()
        }
    }

    /// Link style, spaced off the message with a generous press target
    pub fn link_style(&self, _theme: &Theme) -> StyleFragment {
        StyleFragment {
            margin_top: Some(Dimension::px(15.0)),
            padding_vertical: Some(15.0),
            ..Default::default()
        }
    }

    /// Follow the escape link out of the dead end
    pub fn activate_link(&self, navigator: &mut dyn Navigator) {
        navigator.push(Route::Login);
    }
}

// =============================================================================
// Success Popup
// =============================================================================

/// Modal confirmation overlay shown after an action succeeds.
///
/// Invisible until explicitly shown; the message defaults to a generic
/// confirmation when the caller has nothing more specific to say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessPopup {
    /// Whether the overlay is currently shown
    pub visible: bool,
    /// Confirmation message
    pub message: String,
}

impl Default for SuccessPopup {
    fn default() -> Self {
        Self {
            visible: false,
            message: "Success".to_string(),
        }
    }
}

impl SuccessPopup {
    /// Create a hidden popup with the default message
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the popup with a message
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    /// Hide the popup
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Dimmed full-screen backdrop, centering its content
    pub fn overlay_style(&self, _theme: &Theme) -> StyleFragment {
        StyleFragment {
            background_color: Some("rgba(0, 0, 0, 0.5)".to_string()),
            align_items: Some(Alignment::Center),
            justify_content: Some(JustifyContent::Center),
            ..Default::default()
        }
    }

    /// White dialog container
    pub fn container_style(&self, theme: &Theme) -> StyleFragment {
        StyleFragment {
            background_color: Some(theme.colors.surface.clone()),
            border_radius: Some(12.0),
            padding: Some(24.0),
            align_items: Some(Alignment::Center),
            width: Some(Dimension::percent(80.0)),
            max_width: Some(400.0),
            ..Default::default()
        }
    }

    /// Circular green checkmark badge
    pub fn icon_style(&self, _theme: &Theme) -> StyleFragment {
        StyleFragment {
            width: Some(Dimension::px(80.0)),
            border_radius: Some(radius::ROUND),
            background_color: Some("#4CAF50".to_string()),
            margin_bottom: Some(16.0),
            align_items: Some(Alignment::Center),
            justify_content: Some(JustifyContent::Center),
            ..Default::default()
        }
    }

    /// Message title style
    pub fn title_style(&self, _theme: &Theme) -> StyleFragment {
        StyleFragment {
            font_size: Some(18.0),
            font_weight: Some("600".to_string()),
            text_color: Some("#333333".to_string()),
            ..Default::default()
        }
    }
}

// =============================================================================
// Listing Card
// =============================================================================

/// A listing summary rendered as a composed card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingCard {
    /// Listing title
    pub title: String,
    /// Price line, already formatted
    pub price: String,
    /// Short description
    pub description: String,
    /// Resolved card container style
    pub card_style: StyleFragment,
    /// Resolved header style
    pub header_style: StyleFragment,
    /// Resolved title style (currently empty)
    pub title_style: StyleFragment,
    /// Resolved content style
    pub content_style: StyleFragment,
    /// Resolved footer style
    pub footer_style: StyleFragment,
    /// Footer call-to-action
    pub action: Button,
}

/// Compose a listing summary from the card family and a footer button
pub fn listing_card(
    theme: &Theme,
    title: impl Into<String>,
    price: impl Into<String>,
    description: impl Into<String>,
) -> ListingCard {
    ListingCard {
        title: title.into(),
        price: price.into(),
        description: description.into(),
        card_style: Card::new().computed_style(theme),
        header_style: CardHeader::computed_style(theme),
        title_style: CardTitle::computed_style(theme),
        content_style: CardContent::computed_style(theme),
        footer_style: CardFooter::computed_style(theme),
        action: Button::new("View listing").on_press("open_listing"),
    }
}
