use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::product::Product;
use crate::domain::repositories::ProductRepository;

/// SQLite-backed product repository.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProductRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn save(&self, product: &Product) -> Result<Product, sqlx::Error> {
        match product.id {
            None => {
                let result = sqlx::query(
                    r"
                    INSERT INTO products (name, description, price, quantity, category)
                    VALUES (?, ?, ?, ?, ?)
                    ",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.quantity)
                .bind(&product.category)
                .execute(&*self.pool)
                .await?;

                let mut saved = product.clone();
                saved.id = Some(result.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                sqlx::query(
                    r"
                    UPDATE products
                    SET name = ?, description = ?, price = ?, quantity = ?, category = ?
                    WHERE id = ?
                    ",
                )
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.quantity)
                .bind(&product.category)
                .bind(id)
                .execute(&*self.pool)
                .await?;

                Ok(product.clone())
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, quantity, category FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
    }

    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, quantity, category FROM products",
        )
        .fetch_all(&*self.pool)
        .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE id = ?")
            .bind(id)
            .fetch_one(&*self.pool)
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database_connection::migrate;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn repository() -> SqliteProductRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        migrate(&pool).await.unwrap();
        SqliteProductRepository::new(Arc::new(pool))
    }

    fn widget() -> Product {
        Product {
            id: None,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            quantity: 5,
            category: "tools".to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = repository().await;
        let first = repo.save(&widget()).await.unwrap();
        let second = repo.save(&widget()).await.unwrap();

        let first_id = first.id.unwrap();
        let second_id = second.id.unwrap();
        assert!(second_id > first_id);
    }

    #[tokio::test]
    async fn save_with_id_overwrites_the_row() {
        let repo = repository().await;
        let mut saved = repo.save(&widget()).await.unwrap();
        saved.name = "Gadget".to_string();
        saved.quantity = 0;

        repo.save(&saved).await.unwrap();

        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_missing_row() {
        let repo = repository().await;
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_returns_every_row() {
        let repo = repository().await;
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.save(&widget()).await.unwrap();
        repo.save(&widget()).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_by_id_reports_whether_a_row_was_removed() {
        let repo = repository().await;
        let saved = repo.save(&widget()).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(!repo.delete_by_id(id).await.unwrap());
    }

    #[tokio::test]
    async fn exists_by_id_tracks_row_lifecycle() {
        let repo = repository().await;
        let saved = repo.save(&widget()).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.exists_by_id(id).await.unwrap());
        repo.delete_by_id(id).await.unwrap();
        assert!(!repo.exists_by_id(id).await.unwrap());
    }
}
