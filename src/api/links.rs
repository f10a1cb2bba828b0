//! Hypermedia link generation
//!
//! Links are a pure function of the external base URL and the product id; no
//! request context is consulted.

use serde::Serialize;

pub const REL_SELF: &str = "self";
pub const REL_ALL_PRODUCTS: &str = "all-products";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    fn new(rel: &str, href: String) -> Self {
        Self {
            rel: rel.to_string(),
            href,
        }
    }
}

pub fn product_href(base_url: &str, id: i64) -> String {
    format!("{}/products/getProduct/{id}", base_url.trim_end_matches('/'))
}

pub fn collection_href(base_url: &str) -> String {
    format!("{}/products/getAllProducts", base_url.trim_end_matches('/'))
}

/// The two links every single-resource response carries: itself and the full
/// collection.
pub fn product_links(base_url: &str, id: i64) -> Vec<Link> {
    vec![
        Link::new(REL_SELF, product_href(base_url, id)),
        Link::new(REL_ALL_PRODUCTS, collection_href(base_url)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_are_rooted_at_the_base_url() {
        assert_eq!(
            product_href("http://localhost:8080", 7),
            "http://localhost:8080/products/getProduct/7"
        );
        assert_eq!(
            collection_href("http://localhost:8080"),
            "http://localhost:8080/products/getAllProducts"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_ignored() {
        assert_eq!(
            product_href("http://localhost:8080/", 7),
            "http://localhost:8080/products/getProduct/7"
        );
    }

    #[test]
    fn product_links_carry_self_and_collection_rels() {
        let links = product_links("http://localhost:8080", 7);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].rel, REL_SELF);
        assert_eq!(links[1].rel, REL_ALL_PRODUCTS);
    }
}
