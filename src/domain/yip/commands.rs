use serde::{Deserialize, Serialize};

use crate::services::response::ServiceError;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateYip {
	pub name: Option<String>,
	pub full: Option<String>,
}

impl CreateYip {
	/// Both fields must be present and non-empty.
	pub fn validate(self) -> Result<(String, String), ServiceError> {
		match (self.name, self.full) {
			(Some(name), Some(full)) if !name.is_empty() && !full.is_empty() => Ok((name, full)),
			_ => Err(ServiceError::BadRequest),
		}
	}
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LikeYip {
	pub id: Option<IdParam>,
}

/// Browsers send the card's id attribute as a string, API clients as a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IdParam {
	Number(i64),
	Text(String),
}

impl LikeYip {
	/// `Ok(None)` means an id was given but cannot name any yip.
	pub fn validate(self) -> Result<Option<i64>, ServiceError> {
		match self.id {
			None => Err(ServiceError::BadRequest),
			Some(IdParam::Number(0)) => Err(ServiceError::BadRequest),
			Some(IdParam::Number(id)) => Ok(Some(id)),
			Some(IdParam::Text(text)) if text.trim().is_empty() => Err(ServiceError::BadRequest),
			Some(IdParam::Text(text)) => Ok(text.trim().parse::<i64>().ok()),
		}
	}
}
