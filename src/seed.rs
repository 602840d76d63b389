use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{adapters::repositories::Repository, database::DatabaseExecutor, services::response::ServiceError};

#[derive(Debug, Deserialize)]
pub struct SeedYip {
	pub name: String,
	pub yip: String,
	#[serde(default)]
	pub hashtag: Option<String>,
	#[serde(default)]
	pub likes: i64,
	#[serde(default = "Utc::now")]
	pub date: DateTime<Utc>,
}

/// Loads `path` into the table unless it already holds yips. Returns how many were inserted.
pub async fn seed_if_empty(
	executor: &mut DatabaseExecutor,
	path: impl AsRef<Path>,
) -> Result<usize, ServiceError> {
	let path = path.as_ref();
	if Repository::new(executor.connection()).count().await? > 0 {
		tracing::debug!(path = %path.display(), "table already populated, skipping seed");
		return Ok(0);
	}

	let yips: Vec<SeedYip> = serde_json::from_str(&std::fs::read_to_string(path)?)?;

	let mut trx = executor.begin().await?;
	let mut repo = Repository::new(&mut trx);
	for seed in &yips {
		repo.insert_at(&seed.name, &seed.yip, seed.hashtag.as_deref(), seed.likes.max(0), seed.date).await?;
	}
	trx.commit().await?;

	tracing::info!(path = %path.display(), count = yips.len(), "seeded yips");
	Ok(yips.len())
}

#[cfg(test)]
mod test {
	use crate::{
		adapters::repositories::Repository,
		database::{test::database_url, DatabaseExecutor},
	};

	use super::seed_if_empty;

	const SEED_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/seeds/yips.json");

	#[tokio::test]
	async fn test_seed_only_once() {
		let mut executor = DatabaseExecutor::connect(&database_url().await).await.unwrap();

		let first = seed_if_empty(&mut executor, SEED_FILE).await.unwrap();
		let second = seed_if_empty(&mut executor, SEED_FILE).await.unwrap();

		assert_eq!(first, 4);
		assert_eq!(second, 0);
		let mut repo = Repository::new(executor.connection());
		assert_eq!(repo.count().await.unwrap(), 4);
		assert!(repo.author_exists("Mister Fluffers").await.unwrap());
		assert_eq!(repo.list_by_author("Ava").await.unwrap()[0].yip, "who else is up this early");
	}

	#[tokio::test]
	async fn test_missing_seed_file() {
		let mut executor = DatabaseExecutor::connect(&database_url().await).await.unwrap();

		assert!(seed_if_empty(&mut executor, "/definitely/not/here.json").await.is_err());
	}
}
