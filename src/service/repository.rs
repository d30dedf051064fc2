//! Product persistence against PostgreSQL.

use crate::error::AppError;
use crate::model::{Product, ProductInput};
use async_trait::async_trait;
use sqlx::PgPool;

const SELECT_COLUMNS: &str = "id, name, COALESCE(description, '') AS description, price::float8 AS price, stock";

/// Storage seam used by the handlers. Every call is one statement; nothing is cached.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, input: &ProductInput) -> Result<(), AppError>;
    async fn find(&self, id: i64) -> Result<Option<Product>, AppError>;
    /// Total number of rows in the table.
    async fn count(&self) -> Result<i64, AppError>;
    /// One page ordered by id.
    async fn page(&self, limit: i64, offset: i64) -> Result<Vec<Product>, AppError>;
    /// Replace every field but id. A missing id is not reported.
    async fn update(&self, id: i64, input: &ProductInput) -> Result<(), AppError>;
    /// A missing id is not reported.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        PgProductRepository { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, input: &ProductInput) -> Result<(), AppError> {
        let sql = "INSERT INTO products (name, description, price, stock) VALUES ($1, $2, $3, $4)";
        tracing::debug!(sql = %sql, params = ?input, "query");
        sqlx::query(sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let sql = "SELECT COUNT(*) FROM products";
        tracing::debug!(sql = %sql, "query");
        let (total,): (i64,) = sqlx::query_as(sql).fetch_one(&self.pool).await?;
        Ok(total)
    }

    async fn page(&self, limit: i64, offset: i64) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM products ORDER BY id LIMIT $1 OFFSET $2", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, limit, offset, "query");
        let rows = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<(), AppError> {
        let sql = "UPDATE products SET name = $1, description = $2, price = $3, stock = $4 WHERE id = $5";
        tracing::debug!(sql = %sql, id, params = ?input, "query");
        sqlx::query(sql)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.stock)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM products WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::store;
    use std::time::{SystemTime, UNIX_EPOCH};

    // These tests require a running PostgreSQL database.
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn setup_test_db() -> (PgProductRepository, PgPool) {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let config = DatabaseConfig {
            url: Some(url),
            ..DatabaseConfig::default()
        };
        let pool = store::connect(&config).await.unwrap();
        store::ensure_products_table(&pool).await.unwrap();
        (PgProductRepository::new(pool.clone()), pool)
    }

    fn unique_name(prefix: &str) -> String {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        format!("{}-{}-{}", prefix, std::process::id(), nanos)
    }

    async fn id_by_name(pool: &PgPool, name: &str) -> i64 {
        let (id,): (i32,) = sqlx::query_as("SELECT id FROM products WHERE name = $1")
            .bind(name)
            .fetch_one(pool)
            .await
            .unwrap();
        i64::from(id)
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_insert_find_update_delete() {
        let (repo, pool) = setup_test_db().await;
        let name = unique_name("roundtrip");
        let input = ProductInput {
            name: name.clone(),
            description: "Desk lamp".into(),
            price: 19.99,
            stock: 7,
        };

        repo.insert(&input).await.unwrap();
        let id = id_by_name(&pool, &name).await;

        let found = repo.find(id).await.unwrap().expect("Product should exist");
        assert_eq!(found, input.clone().into_product(id as i32));

        let changed = ProductInput {
            name: name.clone(),
            description: String::new(),
            price: 5.5,
            stock: -2,
        };
        repo.update(id, &changed).await.unwrap();
        let found = repo.find(id).await.unwrap().expect("Product should exist");
        assert_eq!(found, changed.into_product(id as i32));

        repo.delete(id).await.unwrap();
        assert!(repo.find(id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_null_description_reads_as_empty() {
        let (repo, pool) = setup_test_db().await;
        let name = unique_name("nulldesc");
        sqlx::query("INSERT INTO products (name, description, price, stock) VALUES ($1, NULL, 1.00, 1)")
            .bind(&name)
            .execute(&pool)
            .await
            .unwrap();
        let id = id_by_name(&pool, &name).await;

        let found = repo.find(id).await.unwrap().expect("Product should exist");
        assert_eq!(found.description, "");
        assert_eq!(found.price, 1.0);

        repo.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_page_is_ordered_by_id_and_count_covers_table() {
        let (repo, pool) = setup_test_db().await;
        let mut ids = Vec::new();
        for i in 0..3 {
            let name = unique_name(&format!("page{}", i));
            repo.insert(&ProductInput {
                name: name.clone(),
                price: 2.0,
                ..ProductInput::default()
            })
            .await
            .unwrap();
            ids.push(id_by_name(&pool, &name).await);
        }

        let total = repo.count().await.unwrap();
        assert!(total >= 3);

        let all = repo.page(total, 0).await.unwrap();
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let two = repo.page(2, 1).await.unwrap();
        assert_eq!(two.len(), 2);
        assert!(two[0].id < two[1].id);

        for id in ids {
            repo.delete(id).await.unwrap();
        }
    }

    #[tokio::test]
    #[ignore] // Requires database
    async fn test_id_beyond_integer_range_is_not_found() {
        let (repo, _pool) = setup_test_db().await;
        let id = i64::from(i32::MAX) + 1;

        assert!(repo.find(id).await.unwrap().is_none());
        repo.update(id, &ProductInput { name: "x".into(), ..ProductInput::default() }).await.unwrap();
        repo.delete(id).await.unwrap();
    }
}
