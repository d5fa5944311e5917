use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use crate::types::FailureBody;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_CREDENTIALS: &str = "true";
pub const ALLOW_METHODS: &str = "POST,OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization,X-User-Id";

/// JSON response carrying the CORS headers every route returns
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Credentials", ALLOW_CREDENTIALS)
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

pub fn failure(status: StatusCode, message: Option<&str>) -> Result<Response<Body>, Error> {
    let body = match message {
        Some(m) => FailureBody::with_error(m),
        None => FailureBody::new(),
    };
    json(status, &body)
}

pub fn not_found() -> Result<Response<Body>, Error> {
    failure(StatusCode::NOT_FOUND, Some("not found"))
}

pub fn method_not_allowed() -> Result<Response<Body>, Error> {
    failure(StatusCode::METHOD_NOT_ALLOWED, Some("method not allowed"))
}

/// CORS preflight
pub fn preflight() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Credentials", ALLOW_CREDENTIALS)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .body(Body::Empty)
        .map_err(Box::new)?)
}
