//! UI Integration Tests
//!
//! End-to-end tests for the marketplace UI layer: theme table through style
//! resolution, component composition, and navigation flows.

use market_ui::components::{Button, ButtonVariant, Card, ProfileButton};
use market_ui::navigation::{NavigationStack, Navigator, Route, Router};
use market_ui::screens::{listing_card, NotFoundScreen, SuccessPopup};
use market_ui::style::{Alignment, StyleFragment};
use market_ui::theme::Theme;
use market_ui::typography::TextVariant;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Full flow: resolve component styles against one theme, then against a
/// derived theme, and verify only the edited group changes.
#[test]
fn test_theme_to_component_pipeline() {
    init_tracing();
    let theme = Theme::new();

    let button_style = Button::new("Buy now").computed_style(&theme);
    assert_eq!(
        button_style.background_color,
        Some(theme.colors.primary.clone())
    );
    assert_eq!(button_style.border_radius, Some(theme.radius.lg));

    // Derived theme: brand color swap restyles buttons without touching layout
    let mut derived = Theme::new();
    derived.colors.primary = "#0A3D62".to_string();
    let derived_style = Button::new("Buy now").computed_style(&derived);

    assert_eq!(derived_style.background_color.as_deref(), Some("#0A3D62"));
    assert_eq!(derived_style.padding, button_style.padding);
    assert_eq!(derived_style.border_radius, button_style.border_radius);

    // The original theme is unaffected
    assert_eq!(theme.colors.primary, "#5B7560");
}

/// A listing summary composes the card family, the button and the text
/// variants into one consistent declaration set.
#[test]
fn test_listing_card_composition() {
    init_tracing();
    let theme = Theme::new();
    let card = listing_card(
        &theme,
        "Continental WinterContact",
        "95 EUR",
        "Pair, 6mm tread, one season",
    );

    assert_eq!(
        card.card_style.background_color,
        Some(theme.colors.surface.clone())
    );
    assert_eq!(card.header_style.margin_bottom, Some(theme.spacing.md));
    assert!(card.title_style.is_empty());

    let action_style = card.action.computed_style(&theme);
    assert_eq!(
        action_style.background_color,
        Some(theme.colors.primary.clone())
    );

    let label = TextVariant::Button.style(&theme);
    assert_eq!(action_style.font_size, Some(label.font_size));
    assert_eq!(action_style.font_weight, Some(label.font_weight));
}

/// Caller overrides win over variants everywhere, and applying the same
/// override twice changes nothing.
#[test]
fn test_override_precedence_across_components() {
    init_tracing();
    let theme = Theme::new();
    let override_ = StyleFragment::new()
        .with_background_color("#101010")
        .with_padding(4.0);

    for variant in [ButtonVariant::Primary, ButtonVariant::Secondary] {
        let once = Button::new("x")
            .with_variant(variant)
            .with_style_override(override_.clone())
            .computed_style(&theme);
        let twice = Button::new("x")
            .with_variant(variant)
            .with_style_override(override_.clone().merge(&override_))
            .computed_style(&theme);

        assert_eq!(once.background_color.as_deref(), Some("#101010"));
        assert_eq!(once.padding, Some(4.0));
        assert_eq!(once, twice);
    }

    let card = Card::new()
        .with_style_override(override_.clone())
        .computed_style(&theme);
    assert_eq!(card.background_color.as_deref(), Some("#101010"));
    assert_eq!(card.border_color, Some(theme.colors.border.clone()));
}

/// Browse, open the profile from a listing, come back. The profile button
/// hides itself while the profile route is current and reappears after pop.
#[test]
fn test_profile_button_navigation_flow() {
    init_tracing();
    let theme = Theme::new();
    let router = Router::new();
    let mut stack = NavigationStack::new(Route::Home);

    stack.push(Route::Listings);
    let current = router.match_path(&stack.current_path());
    assert_eq!(current, Route::Listings);

    // Visible on the listings screen; activating it pushes the profile route
    let view = ProfileButton.render(&theme, &current).unwrap();
    assert_eq!(view.target, Route::ProfileDetails);
    ProfileButton.activate(&mut stack);

    let current = router.match_path(&stack.current_path());
    assert_eq!(current, Route::ProfileDetails);
    assert!(ProfileButton.render(&theme, &current).is_none());

    // Pop back and the button reappears
    assert!(stack.pop());
    let current = router.match_path(&stack.current_path());
    assert_eq!(current, Route::Listings);
    assert!(ProfileButton.render(&theme, &current).is_some());
}

/// Dead ends route to the fallback screen, whose link leads back into the
/// app through the navigation stack.
#[test]
fn test_not_found_recovery_flow() {
    init_tracing();
    let theme = Theme::new();
    let router = Router::new();
    let mut stack = NavigationStack::new(Route::Home);

    let route = router.match_path("/definitely/not/a/page");
    assert_eq!(route, Route::NotFound);
    stack.push(route);

    let screen = NotFoundScreen;
    assert_eq!(
        screen.container_style(&theme).align_items,
        Some(Alignment::Center)
    );

    screen.activate_link(&mut stack);
    assert_eq!(*stack.current(), Route::Login);
    assert_eq!(stack.depth(), 3);
}

/// Publishing flow: sell screen, confirmation popup, back to the dashboard.
#[test]
fn test_publish_confirmation_flow() {
    init_tracing();
    let theme = Theme::new();
    let mut stack = NavigationStack::new(Route::Home);
    let mut popup = SuccessPopup::new();

    stack.push(Route::Sell);
    assert!(!popup.visible);

    popup.show("Listing published");
    assert!(popup.visible);
    assert_eq!(
        popup.overlay_style(&theme).background_color.as_deref(),
        Some("rgba(0, 0, 0, 0.5)")
    );
    assert_eq!(popup.container_style(&theme).max_width, Some(400.0));

    popup.dismiss();
    stack.replace(Route::Dashboard);
    assert_eq!(*stack.current(), Route::Dashboard);
    assert_eq!(stack.depth(), 2);
}

/// Components serialize to JSON and come back unchanged, so rendered props
/// can cross a process boundary.
#[test]
fn test_component_serialization_round_trip() {
    init_tracing();
    let theme = Theme::new();

    let button = Button::new("Buy now")
        .with_variant(ButtonVariant::Secondary)
        .on_press("handle_buy");
    let json = serde_json::to_string(&button).unwrap();
    let parsed: Button = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, button);
    assert_eq!(parsed.computed_style(&theme), button.computed_style(&theme));

    let style = button.computed_style(&theme);
    let json = serde_json::to_string(&style).unwrap();
    let parsed: StyleFragment = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, style);
}
