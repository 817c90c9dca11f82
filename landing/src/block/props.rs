//! Typed property records, one per block kind.
//!
//! Every field is optional and decoded leniently: a field of the wrong shape
//! reads as absent instead of failing the whole block.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decode a field, falling back to its default when the value has the wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// A call-to-action link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    #[serde(default, deserialize_with = "lenient")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub href: Option<String>,
    /// `"outline"` switches the primary hero button to the outlined style.
    #[serde(default, deserialize_with = "lenient")]
    pub variant: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroProps {
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub headline_accent: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subheadline: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub primary_cta: Option<Cta>,
    #[serde(default, deserialize_with = "lenient")]
    pub secondary_cta: Option<Cta>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureGridProps {
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
    /// Falls back to the block CTA target when absent.
    #[serde(default, deserialize_with = "lenient")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathsProps {
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Vec<PathItem>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta: Option<Cta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogosProps {
    /// `"brands"` renders a name strip; anything else the tools grid.
    #[serde(default, deserialize_with = "lenient")]
    pub variant: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub badges: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub logos: Vec<Logo>,
}

impl LogosProps {
    pub fn is_brands(&self) -> bool {
        self.variant.as_deref() == Some("brands")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryProps {
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsProps {
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub billing: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqProps {
    /// Only the `"pricing"` variant has a rendering.
    #[serde(default, deserialize_with = "lenient")]
    pub variant: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub items: Vec<PricingPlan>,
}

impl FaqProps {
    pub fn is_pricing(&self) -> bool {
        self.variant.as_deref() == Some("pricing")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyFormProps {
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub submit_label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub fields: Option<FormFields>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkColumn {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterProps {
    #[serde(default, deserialize_with = "lenient")]
    pub newsletter_title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub newsletter_body: Option<String>,
    /// Only the first column is rendered.
    #[serde(default, deserialize_with = "lenient")]
    pub columns: Vec<LinkColumn>,
    #[serde(default, deserialize_with = "lenient")]
    pub socials: Option<LinkColumn>,
    #[serde(default, deserialize_with = "lenient")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub legal: Option<String>,
}

/// Arrangement of a custom section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomLayout {
    ImageLeft,
    #[default]
    ImageRight,
    TextOnly,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomProps {
    #[serde(default, deserialize_with = "lenient")]
    pub eyebrow: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta_label: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cta_href: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub layout: Option<String>,
}

impl CustomProps {
    pub fn arrangement(&self) -> CustomLayout {
        match self.layout.as_deref() {
            Some("image-left") => CustomLayout::ImageLeft,
            Some("text-only") => CustomLayout::TextOnly,
            _ => CustomLayout::ImageRight,
        }
    }
}
