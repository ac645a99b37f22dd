use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::directory::SharedDirectory;
use crate::models::Activity;

/// Client-input failures for the roster operations. These map straight onto
/// HTTP error responses; there is nothing to retry or recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivitiesServiceError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up")]
    AlreadySignedUp,
    #[error("Student not registered for this activity")]
    NotRegistered,
}

impl ActivitiesServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound => StatusCode::NOT_FOUND,
            Self::AlreadySignedUp | Self::NotRegistered => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ActivitiesServiceError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Full catalog, keyed by activity name.
pub fn list_activities(directory: &SharedDirectory) -> BTreeMap<String, Activity> {
    directory
        .read()
        .expect("directory lock poisoned")
        .snapshot()
}

/// Enrolls `email` in the named activity, appending at the end of the
/// roster. Signing up twice is an error, not a no-op.
pub fn signup(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivitiesServiceError> {
    let mut directory = directory.write().expect("directory lock poisoned");
    let activity = directory
        .get_mut(activity_name)
        .ok_or(ActivitiesServiceError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(ActivitiesServiceError::AlreadySignedUp);
    }

    // Capacity is informational only; a full roster does not reject signups.
    activity.participants.push(email.to_string());
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes `email` from the named activity's roster.
pub fn unregister(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivitiesServiceError> {
    let mut directory = directory.write().expect("directory lock poisoned");
    let activity = directory
        .get_mut(activity_name)
        .ok_or(ActivitiesServiceError::ActivityNotFound)?;

    let Some(position) = activity.participants.iter().position(|p| p == email) else {
        return Err(ActivitiesServiceError::NotRegistered);
    };

    activity.participants.remove(position);
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
