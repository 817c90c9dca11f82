use landing::Language;

use crate::copy::Catalog;

/// Where tenant login links point when no portal base URL is configured.
pub const DEFAULT_LOGIN_PATH: &str = "/portal/login";

/// Environment values consumed by the link resolvers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkConfig {
    /// Base URL of the external user portal (`userPageBaseUrl`).
    pub user_page_base_url: Option<String>,
}

impl LinkConfig {
    pub fn new(user_page_base_url: Option<String>) -> Self {
        LinkConfig { user_page_base_url }
    }

    /// Portal login target: the base URL without trailing slashes plus `/login`.
    pub fn login_url(&self) -> String {
        match self
            .user_page_base_url
            .as_deref()
            .map(|base| base.trim_end_matches('/'))
        {
            Some(base) if !base.is_empty() => format!("{}/login", base),
            _ => DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

/// Everything a render function needs besides the content itself.
/// Passed by reference; nothing here is mutated while rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub links: &'a LinkConfig,
    pub catalog: &'a Catalog,
    pub language: Language,
    /// Slug of the page being rendered, forwarded to lead forms.
    pub slug: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(links: &'a LinkConfig, catalog: &'a Catalog) -> Self {
        RenderContext {
            links,
            catalog,
            language: Language::En,
            slug: "home",
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_slug(mut self, slug: &'a str) -> Self {
        self.slug = slug;
        self
    }

    /// Localized copy for `id`.
    pub fn t(&self, id: &'a str) -> &'a str {
        self.catalog.get(self.language, id)
    }
}
