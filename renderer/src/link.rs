//! Tenant-aware href rewriting.
//!
//! Both resolvers are pure and idempotent: feeding a resolved href back in
//! returns it unchanged.

use landing::tenant::Tenant;

use crate::context::LinkConfig;

/// Resolve an authored link target for a landing block.
///
/// Empty targets become `#`. Without a tenant, or for anything that is not a
/// rooted path, the target passes through. Login paths go to the user portal,
/// tenant-scoped paths are kept, and every other path gets the tenant slug
/// prepended.
pub fn resolve_href(config: &LinkConfig, tenant: Option<&Tenant>, href: Option<&str>) -> String {
    let Some(href) = href.filter(|h| !h.is_empty()) else {
        return "#".to_string();
    };
    let Some(tenant) = tenant else {
        return href.to_string();
    };
    if !href.starts_with('/') {
        return href.to_string();
    }
    if is_login_path(href) {
        return config.login_url();
    }
    if is_tenant_scoped(tenant, href) {
        return href.to_string();
    }
    format!("/{}{}", tenant.slug, href)
}

/// Resolve a link on a static page. Same rules as [`resolve_href`], plus
/// `/#anchor` points at the tenant home page and `/` at the tenant root.
pub fn resolve_page_href(config: &LinkConfig, tenant: &Tenant, href: Option<&str>) -> String {
    let Some(href) = href.filter(|h| !h.is_empty()) else {
        return "#".to_string();
    };
    if !href.starts_with('/') {
        return href.to_string();
    }
    if let Some(fragment) = href.strip_prefix("/#") {
        return format!("/{}/home#{}", tenant.slug, fragment);
    }
    if is_login_path(href) {
        return config.login_url();
    }
    if href == "/" {
        return format!("/{}", tenant.slug);
    }
    if is_tenant_scoped(tenant, href) {
        return href.to_string();
    }
    format!("/{}{}", tenant.slug, href)
}

/// Covers `/login`, `/{slug}/login`, `/{id}/login` and any deeper login route.
fn is_login_path(href: &str) -> bool {
    href.ends_with("/login")
}

fn is_tenant_scoped(tenant: &Tenant, href: &str) -> bool {
    [tenant.slug.as_str(), tenant.id.as_str()]
        .into_iter()
        .any(|key| href.strip_prefix('/').is_some_and(|rest| rest.starts_with(key)))
}
