//! 认证相关的 HTTP 处理器

use crate::{
    error::AppError,
    handlers::AppJson,
    middleware::AppState,
    models::account::{LoginRequest, SignupRequest},
};
use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

/// 注册
pub async fn signup(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    AppJson(req): AppJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let client_ip = get_client_ip(&headers).unwrap_or("unknown".to_string());
    tracing::debug!(client_ip = %client_ip, "Signup request received");

    state.auth_service.register(req).await?;

    Ok(Json(json!({
        "message": "Successfully created account"
    })))
}

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let client_ip = get_client_ip(&headers).unwrap_or("unknown".to_string());
    tracing::debug!(client_ip = %client_ip, "Login request received");

    let response = state.auth_service.login(req).await?;

    Ok(Json(response))
}

/// 获取客户端 IP 地址
fn get_client_ip(headers: &HeaderMap) -> Option<String> {
    // 首先检查 X-Forwarded-For（代理情况）
    if let Some(forwarded) = headers.get("x-forwarded-for") {
        if let Ok(forwarded_str) = forwarded.to_str() {
            // X-Forwarded-For 可能包含多个 IP，取第一个
            if let Some(first_ip) = forwarded_str.split(',').next() {
                return Some(first_ip.trim().to_string());
            }
        }
    }

    // 然后检查 X-Real-IP
    if let Some(real_ip) = headers.get("x-real-ip") {
        if let Ok(ip_str) = real_ip.to_str() {
            return Some(ip_str.to_string());
        }
    }

    None
}
