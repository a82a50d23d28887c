//! 首次启动数据初始化
//!
//! 仅在集合资源不存在时写入，已有数据 (包括空数组) 从不覆盖。

use rust_decimal::Decimal;
use shared::models::{Product, Sale, User, UserRole};

use super::{Collection, CollectionStore, StoreResult};

/// Activation key of the seeded administrator
pub const SEED_ADMIN_KEY: &str = "TANQUE-2024-ABC123";

/// Collections written by [`seed_if_absent`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: Vec<Collection>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.seeded.is_empty()
    }
}

/// Write the demo catalog, an empty sale log and the admin user
/// for every collection that does not exist yet
pub async fn seed_if_absent(store: &CollectionStore) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();

    for collection in Collection::ALL {
        if store.exists(collection).await? {
            continue;
        }
        match collection {
            Collection::Products => store.save(&demo_products()).await?,
            Collection::Sales => store.save::<Sale>(&[]).await?,
            Collection::Users => store.save(&[admin_user()]).await?,
        }
        tracing::info!(collection = %collection, "Seeded collection");
        report.seeded.push(collection);
    }

    Ok(report)
}

pub fn admin_user() -> User {
    User {
        id: 1,
        name: "Administrator".to_string(),
        email: "admin@pos.local".to_string(),
        role: UserRole::Admin,
        activation_key: SEED_ADMIN_KEY.to_string(),
        active: true,
    }
}

pub fn demo_products() -> Vec<Product> {
    const CATALOG: [(&str, i64, i64, &str); 10] = [
        ("Premium Coffee", 1290, 50, "Beverages"),
        ("Energy Drink", 850, 30, "Beverages"),
        ("Water 500ml", 300, 100, "Beverages"),
        ("Chocolate Bar", 690, 80, "Sweets"),
        ("Potato Chips", 550, 60, "Snacks"),
        ("Baked Pastry", 790, 40, "Snacks"),
        ("Canned Soda", 650, 70, "Beverages"),
        ("Fresh Juice", 990, 30, "Beverages"),
        ("Cheese Bread", 450, 45, "Snacks"),
        ("Fudge Truffle", 350, 120, "Sweets"),
    ];

    CATALOG
        .iter()
        .zip(1..)
        .map(|(&(name, cents, stock, category), id)| Product {
            id,
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            stock,
            category: category.to_string(),
            created_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeds_every_absent_collection() {
        let store = CollectionStore::new(Arc::new(MemoryBackend::new()));

        let report = seed_if_absent(&store).await.unwrap();
        assert_eq!(report.seeded.len(), 3);

        let products: Vec<Product> = store.load().await;
        assert_eq!(products.len(), 10);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[9].id, 10);
        assert_eq!(products[0].price, Decimal::new(1290, 2));

        let users: Vec<User> = store.load().await;
        assert_eq!(users, vec![admin_user()]);

        let sales: Vec<Sale> = store.load().await;
        assert!(sales.is_empty());
    }

    #[tokio::test]
    async fn test_existing_collections_are_left_alone() {
        let store = CollectionStore::new(Arc::new(MemoryBackend::new()));
        store.save::<Product>(&[]).await.unwrap();

        let report = seed_if_absent(&store).await.unwrap();
        assert!(!report.seeded.contains(&Collection::Products));

        let products: Vec<Product> = store.load().await;
        assert!(products.is_empty());

        let again = seed_if_absent(&store).await.unwrap();
        assert!(again.is_empty());
    }
}
