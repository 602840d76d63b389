use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type AnyError = dyn std::error::Error + Send + Sync;

const MISSING_PARAMS: &str = "Missing one or more of the required params.";
const UNKNOWN_USER: &str = "Yikes. User does not exist.";
const UNKNOWN_ID: &str = "Yikes. ID does not exist.";
const SERVER_ERROR: &str = "An error occurred on the server. Try again later.";

#[derive(Debug)]
pub enum ServiceError {
	BadRequest,
	UserNotFound,
	YipNotFound,
	DatabaseError(Box<AnyError>),
	ConfigError(String),
	IoError(std::io::Error),
	ParsingError(Box<AnyError>),
}

impl ServiceError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServiceError::BadRequest => StatusCode::BAD_REQUEST,
			ServiceError::UserNotFound | ServiceError::YipNotFound => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::BadRequest => write!(f, "BadRequest"),
			ServiceError::UserNotFound => write!(f, "UserNotFound"),
			ServiceError::YipNotFound => write!(f, "YipNotFound"),
			ServiceError::DatabaseError(res) => write!(f, "DatabaseError: {}", res),
			ServiceError::ConfigError(res) => write!(f, "ConfigError: {}", res),
			ServiceError::IoError(res) => write!(f, "IoError: {}", res),
			ServiceError::ParsingError(res) => write!(f, "ParsingError: {}", res),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
	fn from(value: sqlx::Error) -> Self {
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl From<sqlx::migrate::MigrateError> for ServiceError {
	fn from(value: sqlx::migrate::MigrateError) -> Self {
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl From<std::io::Error> for ServiceError {
	fn from(value: std::io::Error) -> Self {
		ServiceError::IoError(value)
	}
}

impl From<serde_json::Error> for ServiceError {
	fn from(value: serde_json::Error) -> Self {
		ServiceError::ParsingError(Box::new(value))
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let message = match &self {
			ServiceError::BadRequest => MISSING_PARAMS,
			ServiceError::UserNotFound => UNKNOWN_USER,
			ServiceError::YipNotFound => UNKNOWN_ID,
			err => {
				tracing::error!(error = %err, "request failed");
				SERVER_ERROR
			}
		};
		(self.status(), message).into_response()
	}
}
