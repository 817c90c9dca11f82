use serde::{Deserialize, Serialize};

/// The organization that scopes links and branding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Asset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<Asset>,
}

/// An uploaded brand asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub url: Option<String>,
}

impl Tenant {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Tenant {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            logo: None,
            favicon: None,
        }
    }

    /// Logo URL, if one was uploaded and is non-empty.
    pub fn logo_url(&self) -> Option<&str> {
        self.logo
            .as_ref()
            .and_then(|logo| logo.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}
