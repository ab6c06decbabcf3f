use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive integer taken from the `{id}` route segment.
///
/// Only the shape is checked here; whether a row exists is the repo's call,
/// since each entity group reports its own `*_NOT_FOUND` code.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl PathId {
    pub fn get(self) -> i64 {
        self.0
    }
}

pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(ErrorCode::InvalidId, format!("Invalid id: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Id must be positive, got: {id}"),
        ));
    }
    Ok(id)
}

impl FromRequest for PathId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Missing id parameter"))
            .and_then(parse_id)
            .map(PathId);
        ready(result)
    }
}
