//! 认证服务：注册、登录

use crate::{
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    config::AppConfig,
    error::AppError,
    models::account::{Account, LoginRequest, LoginResponse, SignupRequest},
    repository::account_repo::AccountRepository,
};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
    config: Arc<AppConfig>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>, config: Arc<AppConfig>) -> Self {
        Self {
            db,
            jwt_service,
            config,
        }
    }

    /// 注册新账户
    ///
    /// 密码策略在任何哈希或存储访问之前检查；
    /// 邮箱先转小写再查重、落库
    pub async fn register(&self, req: SignupRequest) -> Result<(), AppError> {
        // 密码太短直接拒绝，不浪费哈希成本
        PasswordHasher::validate_password_policy(&req.password, &self.config)?;

        // 邮箱格式校验
        req.validate()
            .map_err(|_| AppError::BadRequest("Invalid email address".to_string()))?;

        let email = req.email.trim().to_lowercase();

        let repo = AccountRepository::new(self.db.clone());

        // 查重；存储层 I/O 失败按 500 上抛
        if repo.find_by_email(&email).await?.is_some() {
            tracing::debug!(email = %email, "Signup rejected: email already registered");
            return Err(AppError::authentication("Account with this email already exists"));
        }

        // 哈希密码并落库
        let hasher = PasswordHasher::new();
        let password_hash = hasher.hash(&req.password)?;

        match repo.create(&email, &password_hash).await {
            Ok(account) => {
                tracing::info!(account_id = %account.id, "Account created");
                Ok(())
            }
            // 查重与写入之间存在并发窗口；唯一索引冲突是权威的重复信号
            Err(AppError::Database(sqlx::Error::Database(db_err)))
                if db_err.is_unique_violation() =>
            {
                tracing::debug!(email = %email, "Signup race: unique violation on insert");
                Err(AppError::authentication("Account with this email already exists"))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create account");
                Err(AppError::authentication("Error creating account"))
            }
        }
    }

    /// 登录
    ///
    /// 成功时签发令牌；响应只携带公开字段，密码哈希不出存储层
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, AppError> {
        let email = req.email.trim().to_lowercase();

        let repo = AccountRepository::new(self.db.clone());

        // 获取账户；存储层 I/O 失败按 500 上抛
        let account: Account = repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::authentication("Account doesn't exist. Please try again"))?;

        // 验证密码
        let hasher = PasswordHasher::new();
        if !hasher.verify(&req.password, &account.password_hash)? {
            tracing::debug!(account_id = %account.id, "Login rejected: invalid credentials");
            return Err(AppError::authentication(
                "Invalid login credentials. Please try again",
            ));
        }

        // 签发令牌；失败按 500 上抛
        let token = self.jwt_service.generate_token(&account.id)?;

        tracing::info!(account_id = %account.id, "Login successful");

        Ok(LoginResponse {
            id: account.id,
            email: account.email,
            token,
        })
    }
}
