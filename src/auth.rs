use axum::http::HeaderMap;

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Identity asserted by the fronting auth layer. Token verification happens
/// there; this service only consumes the forwarded headers.
#[derive(Debug, Clone)]
pub struct Session {
    pub uid: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|name| !name.trim().is_empty()) {
            return name.to_string();
        }
        if let Some(email) = self.email.as_deref() {
            if let Some(prefix) = email.split('@').next().filter(|p| !p.is_empty()) {
                return prefix.to_string();
            }
        }
        self.uid.clone()
    }
}

pub fn authorize(headers: &HeaderMap) -> Result<Session, AppError> {
    let Some(value) = headers.get(USER_ID_HEADER) else {
        return Err(AppError::unauthorized("missing x-user-id header"));
    };

    let Ok(uid) = value.to_str() else {
        return Err(AppError::unauthorized("invalid x-user-id header"));
    };

    let uid = uid.trim();
    if uid.is_empty() {
        return Err(AppError::unauthorized("missing x-user-id header"));
    }

    let header_text = |name: &str| -> Option<String> {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };

    Ok(Session {
        uid: uid.to_string(),
        name: header_text(USER_NAME_HEADER),
        email: header_text(USER_EMAIL_HEADER),
    })
}
