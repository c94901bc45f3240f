use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::dto::{ListPageData, ListQuery};
use crate::forms::FormInput;
use crate::forms::product::ProductForm;
use crate::listing::Listing;
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult, list_page};

/// Loads one page of products matching the search term in `query`.
pub fn list_products<R>(
    repo: &R,
    listing: &Listing<Product>,
    query: &ListQuery,
) -> ServiceResult<ListPageData<Product>>
where
    R: ProductReader + ?Sized,
{
    let products = repo.list_products().map_err(|err| {
        log::error!("Failed to list products: {err}");
        err
    })?;

    Ok(list_page(listing, &products, query))
}

pub fn get_product<R>(repo: &R, product_id: ProductId) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(|err| {
            log::error!("Failed to load product {product_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)
}

pub fn create_product<R>(repo: &R, input: &FormInput) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let form = ProductForm::parse(input).map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        err
    })?;

    let product = repo
        .create_product(&NewProduct::from(form))
        .map_err(|err| {
            log::error!("Failed to create product: {err}");
            err
        })?;

    Ok(product)
}

pub fn update_product<R>(
    repo: &R,
    product_id: ProductId,
    input: &FormInput,
) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let form = ProductForm::parse(input).map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        err
    })?;

    let product = repo
        .update_product(product_id, &NewProduct::from(form))
        .map_err(|err| {
            log::error!("Failed to update product {product_id}: {err}");
            err
        })?;

    Ok(product)
}

pub fn delete_product<R>(repo: &R, product_id: ProductId) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(|err| {
        log::error!("Failed to delete product {product_id}: {err}");
        err
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Price, ProductDescription, ProductName};
    use crate::repository::mock::MockRepository;

    fn product(id: i32, name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            description: ProductDescription::new(format!("{name} description")).unwrap(),
            price: Price::from_cents(cents).unwrap(),
            image: None,
        }
    }

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_result_has_no_navigation() {
        let mut repo = MockRepository::new();
        repo.expect_list_products()
            .returning(|| Ok(vec![product(1, "Lamp", 1999)]));
        let listing = Listing::all_fields(10).unwrap();

        let data = list_products(&repo, &listing, &ListQuery::new(Some("chair"), None)).unwrap();

        assert!(data.page.items.is_empty());
        assert_eq!(data.page.current_page, 1);
        assert_eq!(data.page.total_pages, 0);
        assert!(!data.page.has_previous && !data.page.has_next);
    }

    #[test]
    fn create_product_parses_price_into_cents() {
        let mut repo = MockRepository::new();
        repo.expect_create_product()
            .withf(|new_product| new_product.price.cents() == 1999)
            .times(1)
            .returning(|_| Ok(product(1, "Lamp", 1999)));

        let created = create_product(
            &repo,
            &input(&[
                ("name", "Lamp"),
                ("description", "Desk lamp"),
                ("price", "19.99"),
            ]),
        )
        .unwrap();

        assert_eq!(created.price.to_string(), "19.99");
    }

    #[test]
    fn invalid_price_is_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_update_product().never();

        let result = update_product(
            &repo,
            ProductId::new(1).unwrap(),
            &input(&[
                ("name", "Lamp"),
                ("description", "Desk lamp"),
                ("price", "cheap"),
            ]),
        );

        match result {
            Err(ServiceError::Form(errors)) => assert!(!errors.for_field("price").is_empty()),
            other => panic!("expected form error, got {other:?}"),
        }
    }

    #[test]
    fn missing_product_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_product_by_id().returning(|_| Ok(None));

        let result = get_product(&repo, ProductId::new(3).unwrap());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
