use std::env;
use std::str::FromStr;

use actix_web::HttpRequest;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::Role;

lazy_static! {
    static ref JWT_SECRET_KEY: String =
        env::var("JWT_SECRET_KEY").unwrap_or_else(|_| "devsecret".to_string());
}

const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
}

pub fn create_token(user_id: &str, role: Role) -> Result<String, ApiError> {
    let exp = Utc::now() + Duration::days(TOKEN_TTL_DAYS);
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: exp.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET_KEY.as_bytes()),
    )
    .map_err(ApiError::internal)
}

pub fn decode_token(token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(JWT_SECRET_KEY.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}

pub fn get_claims(req: &HttpRequest) -> Option<Claims> {
    let header = req.headers().get("Authorization")?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    decode_token(token)
}

pub fn require_auth(req: &HttpRequest) -> Result<Claims, ApiError> {
    get_claims(req).ok_or(ApiError::Unauthorized)
}

pub fn require_role(claims: &Claims, allowed: &[Role]) -> Result<Role, ApiError> {
    let role = Role::from_str(&claims.role).map_err(|_| ApiError::Unauthorized)?;
    if allowed.contains(&role) {
        Ok(role)
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn tokens_round_trip() -> anyhow::Result<()> {
        let token = create_token("u-1", Role::Teacher)?;
        let claims = decode_token(&token).expect("token should decode");
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.role, "teacher");
        assert!(claims.exp > Utc::now().timestamp());
        Ok(())
    }

    #[test]
    fn claims_travel_through_the_bearer_header() -> anyhow::Result<()> {
        let token = create_token("u-2", Role::Student)?;
        let req = TestRequest::default()
            .header("Authorization", format!("Bearer {}", token))
            .to_http_request();
        let claims = get_claims(&req).expect("header should carry claims");
        assert_eq!(claims.sub, "u-2");
        assert_eq!(claims.role, "student");
        Ok(())
    }

    #[test]
    fn malformed_headers_yield_nothing() -> anyhow::Result<()> {
        let token = create_token("u-3", Role::Student)?;
        let req = TestRequest::default()
            .header("Authorization", token)
            .to_http_request();
        assert!(get_claims(&req).is_none());

        let req = TestRequest::default().to_http_request();
        assert!(get_claims(&req).is_none());
        Ok(())
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        assert!(decode_token("not.a.token").is_none());

        let foreign = encode(
            &Header::default(),
            &Claims {
                sub: "u-4".to_string(),
                role: "admin".to_string(),
                exp: (Utc::now() + Duration::days(1)).timestamp(),
            },
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .expect("encode");
        assert!(decode_token(&foreign).is_none());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let stale = encode(
            &Header::default(),
            &Claims {
                sub: "u-5".to_string(),
                role: "student".to_string(),
                exp: (Utc::now() - Duration::days(1)).timestamp(),
            },
            &EncodingKey::from_secret(JWT_SECRET_KEY.as_bytes()),
        )
        .expect("encode");
        assert!(decode_token(&stale).is_none());
    }

    #[test]
    fn role_guard_checks_membership() {
        let claims = Claims {
            sub: "u-6".to_string(),
            role: "teacher".to_string(),
            exp: 0,
        };
        assert_eq!(
            require_role(&claims, &[Role::Teacher, Role::Admin]).unwrap(),
            Role::Teacher
        );
        assert!(matches!(
            require_role(&claims, &[Role::Admin]),
            Err(ApiError::Forbidden)
        ));

        let garbled = Claims {
            sub: "u-7".to_string(),
            role: "root".to_string(),
            exp: 0,
        };
        assert!(matches!(
            require_role(&garbled, &[Role::Admin]),
            Err(ApiError::Unauthorized)
        ));
    }
}
