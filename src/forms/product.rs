use crate::domain::product::NewProduct;
use crate::domain::types::{Price, ProductDescription, ProductName};
use crate::forms::FormError;
use crate::forms::schema::{FieldKind, FieldSpec, FormInput, FormSchema};

static PRODUCT_FIELDS: [FieldSpec; 4] = [
    FieldSpec::text("name", 50),
    FieldSpec::text("description", 200),
    FieldSpec::new(
        "price",
        FieldKind::Decimal {
            max_digits: 10,
            decimal_places: 2,
        },
    ),
    FieldSpec::text("image", 100).optional(),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: Price,
    pub image: Option<String>,
}

impl ProductForm {
    pub fn schema() -> Result<FormSchema, FormError> {
        Ok(FormSchema::new(&PRODUCT_FIELDS)?)
    }

    pub fn parse(input: &FormInput) -> Result<Self, FormError> {
        let cleaned = Self::schema()?.validate(input)?;

        Ok(Self {
            name: ProductName::new(cleaned.text("name").unwrap_or_default())?,
            description: ProductDescription::new(
                cleaned.text("description").unwrap_or_default(),
            )?,
            price: Price::from_cents(cleaned.decimal("price").unwrap_or_default())?,
            image: cleaned.text("image").map(str::to_string),
        })
    }
}

impl From<ProductForm> for NewProduct {
    fn from(form: ProductForm) -> Self {
        Self {
            name: form.name,
            description: form.description,
            price: form.price,
            image: form.image,
        }
    }
}
