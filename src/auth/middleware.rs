//! JWT 认证中间件
//!
//! 所有受保护路由的安全边界：提取并验证 Authorization 头中的
//! 令牌，解析出账户身份后写入请求扩展，后续处理器通过
//! AuthContext 提取器显式获取

use crate::{auth::jwt::JwtService, error::AppError};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

/// 认证上下文（附加到请求扩展）
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Uuid,
}

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| AppError::authentication("Missing auth token"))
    }
}

/// 从 Authorization 头提取令牌
///
/// 只要求 "<scheme> <token>" 两段格式，按单个空格切分；
/// scheme 一词本身不做校验（沿用源实现的宽松行为）
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::authentication("Missing auth token"))?;

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 {
        return Err(AppError::authentication("Invalid auth token"));
    }

    Ok(parts[1].to_string())
}

/// JWT 认证中间件 - 必须认证
///
/// 验证完全自包含于签名令牌，不回查存储层
pub async fn jwt_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 从 Authorization 头提取令牌
    let token = extract_token(req.headers())?;

    // 验证令牌签名与过期时间
    let claims = jwt_service.validate_token(&token)?;

    // 解析账户标识
    let account_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::authentication("Invalid or expired auth token"))?;

    // 附加到请求扩展
    req.extensions_mut().insert(AuthContext { account_id });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token_valid() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer test_token_123".parse().unwrap());

        let token = extract_token(&headers).unwrap();
        assert_eq!(token, "test_token_123");
    }

    #[test]
    fn test_extract_token_any_scheme() {
        // scheme 不做校验，任意两段格式都接受
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Token abc123".parse().unwrap());

        let token = extract_token(&headers).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn test_extract_token_missing() {
        let headers = HeaderMap::new();
        assert!(extract_token(&headers).is_err());
    }

    #[test]
    fn test_extract_token_single_word() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "OnlyOneWord".parse().unwrap());

        assert!(extract_token(&headers).is_err());
    }

    #[test]
    fn test_extract_token_too_many_parts() {
        // 双空格按单空格切分产生三段，视为格式错误
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer  token".parse().unwrap());

        assert!(extract_token(&headers).is_err());
    }
}
