//! Page feed models supplied by a document loader.

use serde::{Deserialize, Serialize};

use super::field::Point;

/// Annotation subtype carried by interactive form fields.
pub const WIDGET_SUBTYPE: &str = "Widget";

/// Content of a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed).
    pub number: u32,

    /// Form annotations on this page.
    #[serde(default)]
    pub annotations: Vec<FormAnnotation>,

    /// Positioned text tokens on this page.
    #[serde(default)]
    pub tokens: Vec<TextToken>,
}

impl PageContent {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    pub fn with_annotation(mut self, annotation: FormAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_token(mut self, token: TextToken) -> Self {
        self.tokens.push(token);
        self
    }
}

/// A form annotation (widget) on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormAnnotation {
    /// Field name.
    #[serde(default)]
    pub name: String,

    /// Field value.
    #[serde(default)]
    pub value: String,

    /// Widget type tag (e.g. "Tx", "Btn").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,

    /// Annotation subtype; `None` is treated as a widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,

    /// Bounding box (x1, y1, x2, y2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<[f32; 4]>,
}

impl FormAnnotation {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Whether this annotation is a named form widget.
    pub fn is_form_field(&self) -> bool {
        let is_widget = self
            .subtype
            .as_deref()
            .map_or(true, |s| s == WIDGET_SUBTYPE);
        is_widget && !self.name.is_empty()
    }
}

/// A positioned run of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextToken {
    pub text: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

impl TextToken {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Token origin.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
