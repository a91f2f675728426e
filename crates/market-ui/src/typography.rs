//! Typography for TreadMarket
//!
//! Text styles are derived from the theme's typography group rather than
//! hard-coded, so a derived theme restyles text without touching callers.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// A concrete text style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight name
    pub font_weight: String,
    /// Font family fallback chain
    pub font_family: String,
}

/// Semantic text variants used across the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    /// Small supporting text
    Caption,
    /// Regular body text
    #[default]
    Body,
    /// Form labels and tags
    Label,
    /// Button labels
    Button,
    /// Section titles
    Title,
    /// Screen headings
    Heading,
}

impl TextVariant {
    /// Resolve this variant against a theme's typography group
    pub fn style(&self, theme: &Theme) -> TextStyle {
        let t = &theme.typography;
        let (font_size, font_weight) = match self {
            TextVariant::Caption => (t.font_size.xs, t.font_weight.regular.clone()),
            TextVariant::Body => (t.font_size.md, t.font_weight.regular.clone()),
            TextVariant::Label => (t.font_size.sm, t.font_weight.medium.clone()),
            TextVariant::Button => (t.font_size.md, t.font_weight.medium.clone()),
            TextVariant::Title => (t.font_size.lg, t.font_weight.semi_bold.clone()),
            TextVariant::Heading => (t.font_size.xl, t.font_weight.bold.clone()),
        };
        TextStyle {
            font_size,
            font_weight,
            font_family: t.font_family.clone(),
        }
    }
}
