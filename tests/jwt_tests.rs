//! JWT 签发与验证单元测试

use catalog_service::auth::jwt::{Claims, JwtService};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::Secret;
use uuid::Uuid;

mod common;

#[test]
fn test_issue_and_validate_roundtrip() {
    let config = common::create_test_config();
    let service = JwtService::from_config(&config).unwrap();

    let account_id = Uuid::new_v4();
    let token = service.generate_token(&account_id).unwrap();

    let claims = service.validate_token(&token).unwrap();
    assert_eq!(claims.sub, account_id.to_string());
    assert_eq!(claims.exp - claims.iat, config.security.token_exp_secs as i64);
}

#[test]
fn test_tampered_signature_rejected() {
    let config = common::create_test_config();
    let service = JwtService::from_config(&config).unwrap();

    let token = service.generate_token(&Uuid::new_v4()).unwrap();

    // 破坏签名段的末尾字符
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    assert!(service.validate_token(&tampered).is_err());
}

#[test]
fn test_token_from_other_secret_rejected() {
    let config = common::create_test_config();
    let service = JwtService::from_config(&config).unwrap();

    let mut other_config = common::create_test_config();
    other_config.security.jwt_secret =
        Secret::new("a-completely-different-secret-32-chars!".to_string());
    let other_service = JwtService::from_config(&other_config).unwrap();

    let token = other_service.generate_token(&Uuid::new_v4()).unwrap();
    assert!(service.validate_token(&token).is_err());
}

#[test]
fn test_expired_token_rejected() {
    let config = common::create_test_config();
    let service = JwtService::from_config(&config).unwrap();

    // 用相同密钥直接构造一个已过期的令牌
    // （过期时间远超验证器的时钟容差）
    use secrecy::ExposeSecret;
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let expired_token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.security.jwt_secret.expose_secret().as_bytes()),
    )
    .unwrap();

    assert!(service.validate_token(&expired_token).is_err());
}

#[test]
fn test_garbage_token_rejected() {
    let config = common::create_test_config();
    let service = JwtService::from_config(&config).unwrap();

    assert!(service.validate_token("garbage").is_err());
    assert!(service.validate_token("").is_err());
    assert!(service.validate_token("a.b.c").is_err());
}
