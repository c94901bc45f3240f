use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::{
    DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
    ensure_found,
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .select(DbProduct::as_select())
            .first(&mut conn)
            .optional()?;

        product
            .map(Product::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        products::table
            .order(products::id.asc())
            .select(DbProduct::as_select())
            .load(&mut conn)?
            .into_iter()
            .map(|product| Product::try_from(product).map_err(RepositoryError::from))
            .collect()
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = diesel::insert_into(products::table)
            .values(&DbNewProduct::from(new_product))
            .returning(DbProduct::as_returning())
            .get_result(&mut conn)?;

        Ok(Product::try_from(product)?)
    }

    fn update_product(
        &self,
        id: ProductId,
        updates: &UpdateProduct,
    ) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let product = diesel::update(products::table.find(id.get()))
            .set(&DbNewProduct::from(updates))
            .returning(DbProduct::as_returning())
            .get_result(&mut conn)?;

        Ok(Product::try_from(product)?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        ensure_found(diesel::delete(products::table.find(id.get())).execute(&mut conn)?)
    }
}
