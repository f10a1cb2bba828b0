//! Pure conversions between `Product` and `ProductDto`
//!
//! Total field-by-field copies with no transformation logic; they never fail
//! for well-formed inputs. Required-field validation happens before
//! `to_entity` is invoked, so absent DTO fields falling back to defaults is
//! never observable through the service layer.

use crate::application::dto::ProductDto;
use crate::domain::product::Product;

pub fn to_entity(dto: &ProductDto) -> Product {
    Product {
        id: dto.id,
        name: dto.name.clone().unwrap_or_default(),
        description: dto.description.clone().unwrap_or_default(),
        price: dto.price.unwrap_or_default(),
        quantity: dto.quantity.unwrap_or_default(),
        category: dto.category.clone().unwrap_or_default(),
    }
}

pub fn to_dto(product: &Product) -> ProductDto {
    ProductDto {
        id: product.id,
        name: Some(product.name.clone()),
        description: Some(product.description.clone()),
        price: Some(product.price),
        quantity: Some(product.quantity),
        category: Some(product.category.clone()),
    }
}

pub fn to_dtos(products: Vec<Product>) -> Vec<ProductDto> {
    products.iter().map(to_dto).collect()
}
