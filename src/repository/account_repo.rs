//! Account repository (数据库访问层)

use crate::{error::AppError, models::account::Account};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AccountRepository {
    db: PgPool,
}

impl AccountRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 根据邮箱查找账户
    ///
    /// 调用方负责先把邮箱转为小写
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(account)
    }

    /// 根据 ID 查找账户
    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(account)
    }

    /// 创建账户
    ///
    /// id 由存储层生成；email 列上有唯一索引，
    /// 并发重复注册会以唯一约束冲突的形式返回
    pub async fn create(&self, email: &str, password_hash: &str) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (email, password_hash)
            VALUES ($1, $2)
            RETURNING *
            "#
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await?;

        Ok(account)
    }
}
