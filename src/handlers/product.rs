//! 商品管理的 HTTP 处理器
//! 两个端点都位于认证中间件之后

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    handlers::AppJson,
    middleware::AppState,
    models::product::CreateProductRequest,
    repository::ProductRepository,
};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// 列出商品
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    _auth_context: AuthContext,
) -> Result<impl IntoResponse, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.list(100, 0).await?;

    Ok(Json(json!({
        "products": products,
        "count": products.len()
    })))
}

/// 创建商品
///
/// created_by 取自认证上下文，而不是请求体
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    AppJson(req): AppJson<CreateProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(&req, auth_context.account_id).await?;

    Ok(Json(json!({
        "product": product
    })))
}
