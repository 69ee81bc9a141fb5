//! Product repository (数据库访问层)

use crate::{error::AppError, models::product::{CreateProductRequest, Product}};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ProductRepository {
    db: PgPool,
}

impl ProductRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出商品
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// 创建商品
    pub async fn create(
        &self,
        req: &CreateProductRequest,
        created_by: Uuid,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price_cents, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price_cents)
        .bind(created_by)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }
}
