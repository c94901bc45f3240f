use serde::{Deserialize, Serialize};

use crate::domain::types::{Price, ProductDescription, ProductId, ProductName};
use crate::listing::Searchable;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: Price,
    pub image: Option<String>,
}

impl Searchable for Product {
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "description"];

    fn search_field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(self.name.as_str()),
            "description" => Some(self.description.as_str()),
            _ => None,
        }
    }
}

/// Values for creating or replacing a product.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: Price,
    pub image: Option<String>,
}

pub type UpdateProduct = NewProduct;
