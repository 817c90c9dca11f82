use serde::{Deserialize, Serialize};

use crate::block::props::lenient;

/// Branding tokens edited in the theme panel.
/// The renderer passes them through as CSS custom properties and never branches on them.
/// A token of the wrong shape, such as an unknown spacing, reads as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeTokens {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub font_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub font_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub spacing: Option<Spacing>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    Cozy,
}

impl Spacing {
    pub fn as_str(self) -> &'static str {
        match self {
            Spacing::Compact => "compact",
            Spacing::Cozy => "cozy",
        }
    }
}
