//! Response models for the product API.

use serde::Serialize;

use crate::api::links::{self, Link};
use crate::application::dto::ProductDto;

/// A product representation annotated with hypermedia links.
#[derive(Debug, Serialize)]
pub struct LinkedProduct {
    #[serde(flatten)]
    pub product: ProductDto,
    pub links: Vec<Link>,
}

impl LinkedProduct {
    pub fn new(product: ProductDto, base_url: &str) -> Self {
        let links = links::product_links(base_url, product.id.unwrap_or_default());
        Self { product, links }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_product_fields_flattened_with_links() {
        let dto = ProductDto {
            id: Some(7),
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some(9.99),
            quantity: Some(5),
            category: Some("tools".to_string()),
        };
        let body = serde_json::to_value(LinkedProduct::new(dto, "http://localhost:8080")).unwrap();

        assert_eq!(body["id"], 7);
        assert_eq!(body["name"], "Widget");
        assert_eq!(body["links"][0]["rel"], "self");
        assert_eq!(
            body["links"][0]["href"],
            "http://localhost:8080/products/getProduct/7"
        );
        assert_eq!(body["links"][1]["rel"], "all-products");
    }
}
