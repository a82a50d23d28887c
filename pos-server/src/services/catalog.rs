//! Product catalog
//!
//! Single-collection CRUD plus restocking. Every mutation runs under the
//! store write gate, so it cannot interleave with a sale.

use chrono::Utc;
use shared::models::{DEFAULT_CATEGORY, Product, ProductCreate, ProductUpdate, RestockRequest};

use crate::store::{CollectionStore, next_id};
use crate::utils::time::to_iso;
use crate::utils::validation::{
    MAX_NAME_LEN, validate_optional_text, validate_price, validate_required_text, validate_stock,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct CatalogService {
    store: CollectionStore,
}

impl CatalogService {
    pub fn new(store: CollectionStore) -> Self {
        Self { store }
    }

    /// Products with stock on hand, in stored order
    pub async fn list_active(&self) -> Vec<Product> {
        let products: Vec<Product> = self.store.load().await;
        products.into_iter().filter(Product::is_available).collect()
    }

    pub async fn get(&self, id: i64) -> AppResult<Product> {
        let products: Vec<Product> = self.store.load().await;
        products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::product_not_found(id))
    }

    pub async fn create(&self, data: ProductCreate) -> AppResult<Product> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.category, "category", MAX_NAME_LEN)?;
        validate_price(data.price)?;
        let stock = data.stock.unwrap_or(0);
        validate_stock(stock)?;

        let _gate = self.store.write_gate().await;
        let mut products: Vec<Product> = self.store.load().await;

        let id = next_id(&products)
            .ok_or_else(|| AppError::validation("product id space exhausted"))?;
        let product = Product {
            id,
            name: data.name,
            price: data.price,
            stock,
            category: data
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            created_at: Some(to_iso(Utc::now())),
        };
        products.push(product.clone());
        self.store.save(&products).await?;

        tracing::info!(product_id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Merge the supplied fields into an existing product; the id never changes
    pub async fn update(&self, id: i64, data: ProductUpdate) -> AppResult<Product> {
        if let Some(name) = &data.name {
            validate_required_text(name, "name", MAX_NAME_LEN)?;
        }
        validate_optional_text(&data.category, "category", MAX_NAME_LEN)?;
        if let Some(price) = data.price {
            validate_price(price)?;
        }
        if let Some(stock) = data.stock {
            validate_stock(stock)?;
        }

        let _gate = self.store.write_gate().await;
        let mut products: Vec<Product> = self.store.load().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::product_not_found(id))?;

        if let Some(name) = data.name {
            product.name = name;
        }
        if let Some(price) = data.price {
            product.price = price;
        }
        if let Some(stock) = data.stock {
            product.stock = stock;
        }
        if let Some(category) = data.category {
            product.category = category;
        }
        let updated = product.clone();

        self.store.save(&products).await?;

        tracing::info!(product_id = id, "Product updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let _gate = self.store.write_gate().await;
        let mut products: Vec<Product> = self.store.load().await;

        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(AppError::product_not_found(id));
        }
        self.store.save(&products).await?;

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    /// Add units to a product's stock
    pub async fn restock(&self, request: RestockRequest) -> AppResult<Product> {
        let quantity = request.effective_quantity();
        if quantity < 0 {
            return Err(AppError::validation("quantity must not be negative")
                .with_detail("quantity", quantity));
        }

        let _gate = self.store.write_gate().await;
        let mut products: Vec<Product> = self.store.load().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == request.product_id)
            .ok_or_else(|| AppError::product_not_found(request.product_id))?;

        product.stock = product.stock.checked_add(quantity).ok_or_else(|| {
            AppError::validation("stock would exceed the supported maximum")
                .with_detail("product_id", request.product_id)
                .with_detail("quantity", quantity)
        })?;
        let restocked = product.clone();

        self.store.save(&products).await?;

        tracing::info!(
            product_id = restocked.id,
            added = quantity,
            stock = restocked.stock,
            "Product restocked"
        );
        Ok(restocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use rust_decimal::Decimal;
    use shared::ErrorCode;
    use std::sync::Arc;

    fn service() -> CatalogService {
        CatalogService::new(CollectionStore::new(Arc::new(MemoryBackend::new())))
    }

    fn create(name: &str, stock: Option<i64>) -> ProductCreate {
        ProductCreate {
            name: name.into(),
            price: Decimal::new(690, 2),
            stock,
            category: None,
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let catalog = service();
        let product = catalog.create(create("Chocolate Bar", None)).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.stock, 0);
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert!(product.created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let catalog = service();

        let err = catalog.create(create("  ", Some(1))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let err = catalog.create(create("Soda", Some(-1))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidStock);

        let mut negative = create("Soda", Some(1));
        negative.price = Decimal::new(-100, 2);
        let err = catalog.create(negative).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
    }

    #[tokio::test]
    async fn test_list_active_hides_empty_stock() {
        let catalog = service();
        catalog.create(create("In stock", Some(3))).await.unwrap();
        catalog.create(create("Sold out", None)).await.unwrap();

        let active = catalog.list_active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "In stock");

        // still reachable by id
        assert_eq!(catalog.get(2).await.unwrap().name, "Sold out");
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let catalog = service();
        catalog.create(create("Juice", Some(5))).await.unwrap();

        let updated = catalog
            .update(
                1,
                ProductUpdate {
                    price: Some(Decimal::new(990, 2)),
                    category: Some("Beverages".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Juice");
        assert_eq!(updated.stock, 5);
        assert_eq!(updated.price, Decimal::new(990, 2));
        assert_eq!(updated.category, "Beverages");
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let catalog = service();

        assert_eq!(catalog.get(42).await.unwrap_err().code, ErrorCode::ProductNotFound);
        assert_eq!(
            catalog
                .update(42, ProductUpdate::default())
                .await
                .unwrap_err()
                .code,
            ErrorCode::ProductNotFound
        );
        assert_eq!(catalog.delete(42).await.unwrap_err().code, ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn test_deleted_highest_id_is_reused() {
        let catalog = service();
        catalog.create(create("A", Some(1))).await.unwrap();
        catalog.create(create("B", Some(1))).await.unwrap();

        catalog.delete(2).await.unwrap();
        let recreated = catalog.create(create("C", Some(1))).await.unwrap();
        assert_eq!(recreated.id, 2);
    }

    #[tokio::test]
    async fn test_restock() {
        let catalog = service();
        catalog.create(create("Water", Some(4))).await.unwrap();

        let product = catalog
            .restock(RestockRequest {
                product_id: 1,
                quantity: Some(20),
            })
            .await
            .unwrap();
        assert_eq!(product.stock, 24);

        let product = catalog
            .restock(RestockRequest {
                product_id: 1,
                quantity: None,
            })
            .await
            .unwrap();
        assert_eq!(product.stock, 25);

        let err = catalog
            .restock(RestockRequest {
                product_id: 1,
                quantity: Some(-5),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(catalog.get(1).await.unwrap().stock, 25);

        let err = catalog
            .restock(RestockRequest {
                product_id: 9,
                quantity: Some(1),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn test_restock_overflow_is_rejected() {
        let catalog = service();
        catalog
            .create(create("Bulk", Some(i64::MAX - 1)))
            .await
            .unwrap();

        let product = catalog
            .restock(RestockRequest {
                product_id: 1,
                quantity: Some(1),
            })
            .await
            .unwrap();
        assert_eq!(product.stock, i64::MAX);

        let err = catalog
            .restock(RestockRequest {
                product_id: 1,
                quantity: Some(5),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(catalog.get(1).await.unwrap().stock, i64::MAX);
    }

    #[tokio::test]
    async fn test_create_after_max_id_is_rejected() {
        let catalog = service();
        let mut last = catalog.create(create("Last", Some(1))).await.unwrap();
        last.id = i64::MAX;
        catalog.store.save(&vec![last]).await.unwrap();

        let err = catalog.create(create("Next", Some(1))).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let products: Vec<Product> = catalog.store.load().await;
        assert_eq!(products.len(), 1);
    }
}
