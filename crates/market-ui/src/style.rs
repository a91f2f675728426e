//! Style resolution for TreadMarket
//!
//! A style declaration is an ordered sequence of partial fragments merged
//! left to right, later fragments winning per property. Components resolve
//! their final declaration through [`StyleLayers`]: base fragment first,
//! then the selected variant's fragment, then the caller override last so
//! caller intent always beats built-in variants. The merge is deterministic
//! and independent of any rendering primitive.

use crate::theme::Color;
use crate::tokens::Shadow;
use serde::{Deserialize, Serialize};

// =============================================================================
// Supporting Types
// =============================================================================

/// Dimension value (pixels, percentage, auto)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dimension {
    /// Fixed pixel value
    Pixels(f32),
    /// Percentage of parent
    Percent(String),
    /// Auto-size (or auto margin, pushing to the end of available space)
    #[default]
    Auto,
}

impl Dimension {
    /// Create a pixel dimension
    pub fn px(value: f32) -> Self {
        Dimension::Pixels(value)
    }

    /// Create a percentage dimension
    pub fn percent(value: f32) -> Self {
        Dimension::Percent(format!("{}%", value))
    }
}

// Wire form: bare number for pixels, "80%" for percentages, "auto" for auto.
impl Serialize for Dimension {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Pixels(v) => serializer.serialize_f32(*v),
            Dimension::Percent(s) => serializer.serialize_str(s),
            Dimension::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Dimension::Pixels(v),
            Raw::Text(s) if s == "auto" => Dimension::Auto,
            Raw::Text(s) => Dimension::Percent(s),
        })
    }
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Main-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

/// Positioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// In-flow positioning
    #[default]
    Relative,
    /// Out-of-flow, anchored to the nearest positioned ancestor
    Absolute,
}

// =============================================================================
// Style Fragment
// =============================================================================

/// A partial set of visual property assignments.
///
/// Every property is optional; unset properties defer to earlier layers in
/// the merge order. The merged result is itself a fragment, handed as-is to
/// the rendering primitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleFragment {
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Font size in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight name ("400".."700")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    /// Font family chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Uniform padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Vertical padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    /// Horizontal padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    /// Top margin (supports `auto`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<Dimension>,
    /// Bottom margin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f32>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Cross-axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Alignment>,
    /// Main-axis alignment of children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// Positioning scheme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Top inset (absolute positioning)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    /// Right inset (absolute positioning)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f32>,
    /// Width constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Maximum width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl StyleFragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the fragment assigns no properties
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the text color
    pub fn with_text_color(mut self, color: impl Into<Color>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set uniform padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set the border radius
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Merge another fragment over this one.
    ///
    /// Properties set in `over` replace this fragment's values; unset
    /// properties are left alone. Later writer wins, per property.
    pub fn merge(mut self, over: &StyleFragment) -> StyleFragment {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if over.$field.is_some() {
                        self.$field = over.$field.clone();
                    }
                )*
            };
        }
        take!(
            background_color,
            text_color,
            font_size,
            font_weight,
            font_family,
            padding,
            padding_vertical,
            padding_horizontal,
            margin_top,
            margin_bottom,
            border_radius,
            border_width,
            border_color,
            align_items,
            justify_content,
            position,
            top,
            right,
            width,
            max_width,
            opacity,
            shadow,
        );
        self
    }
}

/// Merge an ordered list of fragments, left to right, later wins.
pub fn resolve(layers: &[&StyleFragment]) -> StyleFragment {
    layers
        .iter()
        .fold(StyleFragment::default(), |acc, layer| acc.merge(layer))
}

// =============================================================================
// Style Layers
// =============================================================================

/// The fixed layer order of a component's style contract.
///
/// Base applies always; the variant fragment applies when the component's
/// variant flag selects one; the caller override applies last,
/// unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleLayers {
    /// Base fragment, always applied
    pub base: StyleFragment,
    /// Variant override fragment, if the variant flag selects one
    pub variant: Option<StyleFragment>,
    /// Caller-supplied override, applied last
    pub caller: Option<StyleFragment>,
}

impl StyleLayers {
    /// Create layers from a base fragment
    pub fn new(base: StyleFragment) -> Self {
        Self {
            base,
            variant: None,
            caller: None,
        }
    }

    /// Set the variant fragment
    pub fn with_variant(mut self, variant: StyleFragment) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the caller override
    pub fn with_caller(mut self, caller: StyleFragment) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Resolve the final declaration: base, then variant, then caller.
    pub fn resolve(&self) -> StyleFragment {
        let mut layers: Vec<&StyleFragment> = vec![&self.base];
        if let Some(variant) = &self.variant {
            layers.push(variant);
        }
        if let Some(caller) = &self.caller {
            layers.push(caller);
        }
        resolve(&layers)
    }
}
