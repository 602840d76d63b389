use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Yip {
	pub id: i64,
	pub name: String,
	pub yip: String,
	pub hashtag: Option<String>,
	pub likes: i64,
	pub date: DateTime<Utc>,
}

/// Search hits carry nothing but the id.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct YipId {
	pub id: i64,
}

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserYip {
	pub name: String,
	pub yip: String,
	pub hashtag: Option<String>,
	pub date: DateTime<Utc>,
}
