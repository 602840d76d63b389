use serde::Serialize;

use crate::{
	adapters::repositories::Repository,
	database::DatabaseExecutor,
	domain::yip::{
		commands::{CreateYip, LikeYip},
		entity::{UserYip, Yip, YipId},
		Composition,
	},
};

use super::response::ServiceError;

/// Body of `GET /yipper/yips`. A search only reports matching ids.
#[derive(Debug, Serialize)]
pub struct Feed {
	pub yips: FeedYips,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FeedYips {
	All(Vec<Yip>),
	Matches(Vec<YipId>),
}

pub struct YipHandler;
impl YipHandler {
	pub async fn feed(
		executor: &mut DatabaseExecutor,
		search: Option<&str>,
	) -> Result<Feed, ServiceError> {
		let mut repo = Repository::new(executor.connection());
		let yips = match search.filter(|term| !term.is_empty()) {
			Some(term) => {
				let matches = repo.list_by_keyword(term).await?;
				tracing::debug!(term, hits = matches.len(), "searched yips");
				FeedYips::Matches(matches)
			}
			None => FeedYips::All(repo.list_all().await?),
		};
		Ok(Feed { yips })
	}

	pub async fn user_yips(
		executor: &mut DatabaseExecutor,
		user: &str,
	) -> Result<Vec<UserYip>, ServiceError> {
		let yips = Repository::new(executor.connection()).list_by_author(user).await?;
		if yips.is_empty() {
			return Err(ServiceError::UserNotFound);
		}
		Ok(yips)
	}

	/// Returns the like count after the increment.
	pub async fn like(
		executor: &mut DatabaseExecutor,
		cmd: LikeYip,
	) -> Result<i64, ServiceError> {
		let id = cmd.validate()?.ok_or(ServiceError::YipNotFound)?;
		let likes = Repository::new(executor.connection())
			.increment_likes(id)
			.await?
			.ok_or(ServiceError::YipNotFound)?;
		tracing::debug!(id, likes, "liked yip");
		Ok(likes)
	}

	pub async fn create(
		executor: &mut DatabaseExecutor,
		cmd: CreateYip,
	) -> Result<Yip, ServiceError> {
		let (name, full) = cmd.validate()?;
		let Composition { yip, hashtag } = Composition::parse(&full);

		let mut trx = executor.begin().await?;
		let mut repo = Repository::new(&mut trx);
		if !repo.author_exists(&name).await? {
			tracing::info!(name = %name, "rejected yip from unknown author");
			return Err(ServiceError::UserNotFound);
		}
		let id = repo.insert(&name, &yip, hashtag.as_deref()).await?;
		let created = repo.get(id).await?.ok_or(sqlx::Error::RowNotFound)?;
		trx.commit().await?;

		tracing::info!(id, name = %name, "created yip");
		Ok(created)
	}
}
