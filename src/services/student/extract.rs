use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use http::HeaderMap;
use http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use super::error::StudentError;

/// JSON 请求体
///
/// 在处理函数之前解析，格式错误的 JSON 直接返回 400。
/// 非 `application/json` 请求或空请求体视为 `{}`，交给字段校验拒绝。
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = StudentError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(Self::empty());
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| StudentError::MalformedBody(e.body_text()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::empty());
        }

        let value = serde_json::from_slice(&body)
            .map_err(|e| StudentError::MalformedBody(e.to_string()))?;
        Ok(Self(value))
    }
}

impl JsonBody {
    fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
