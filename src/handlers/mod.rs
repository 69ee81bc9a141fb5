//! HTTP 处理器模块

use crate::error::AppError;
use axum::extract::{FromRequest, Request};

pub mod auth;
pub mod health;
pub mod metrics;
pub mod product;

/// JSON 请求体提取器
///
/// 解码失败统一返回 400 "Invalid JSON Payload"，
/// 不透出 serde 的具体错误信息
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Failed to decode JSON payload");
                Err(AppError::BadRequest("Invalid JSON Payload".to_string()))
            }
        }
    }
}
