use chrono::{DateTime, Utc};

use crate::{
	domain::yip::entity::{UserYip, Yip, YipId},
	services::response::ServiceError,
};

use super::Repository;

impl Repository<'_> {
	pub async fn list_all(&mut self) -> Result<Vec<Yip>, ServiceError> {
		let yips = sqlx::query_as::<_, Yip>(
			"SELECT id, name, yip, hashtag, likes, date FROM yips
			ORDER BY julianday(date) DESC, id DESC",
		)
		.fetch_all(&mut *self.connection)
		.await?;
		Ok(yips)
	}

	/// Case-sensitive substring match on the yip text, oldest id first.
	pub async fn list_by_keyword(
		&mut self,
		term: &str,
	) -> Result<Vec<YipId>, ServiceError> {
		let ids = sqlx::query_as::<_, YipId>("SELECT id FROM yips WHERE instr(yip, ?) > 0 ORDER BY id")
			.bind(term)
			.fetch_all(&mut *self.connection)
			.await?;
		Ok(ids)
	}

	pub async fn list_by_author(
		&mut self,
		author: &str,
	) -> Result<Vec<UserYip>, ServiceError> {
		let yips = sqlx::query_as::<_, UserYip>(
			"SELECT name, yip, hashtag, date FROM yips WHERE name = ?
			ORDER BY julianday(date) DESC, id DESC",
		)
		.bind(author)
		.fetch_all(&mut *self.connection)
		.await?;
		Ok(yips)
	}

	pub async fn get(
		&mut self,
		id: i64,
	) -> Result<Option<Yip>, ServiceError> {
		let yip = sqlx::query_as::<_, Yip>("SELECT id, name, yip, hashtag, likes, date FROM yips WHERE id = ?")
			.bind(id)
			.fetch_optional(&mut *self.connection)
			.await?;
		Ok(yip)
	}

	pub async fn author_exists(
		&mut self,
		author: &str,
	) -> Result<bool, ServiceError> {
		let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM yips WHERE name = ?)")
			.bind(author)
			.fetch_one(&mut *self.connection)
			.await?;
		Ok(exists)
	}

	pub async fn insert(
		&mut self,
		author: &str,
		yip: &str,
		hashtag: Option<&str>,
	) -> Result<i64, ServiceError> {
		self.insert_at(author, yip, hashtag, 0, Utc::now()).await
	}

	pub async fn insert_at(
		&mut self,
		author: &str,
		yip: &str,
		hashtag: Option<&str>,
		likes: i64,
		date: DateTime<Utc>,
	) -> Result<i64, ServiceError> {
		let id = sqlx::query("INSERT INTO yips (name, yip, hashtag, likes, date) VALUES (?, ?, ?, ?, ?)")
			.bind(author)
			.bind(yip)
			.bind(hashtag)
			.bind(likes)
			.bind(date)
			.execute(&mut *self.connection)
			.await?
			.last_insert_rowid();
		Ok(id)
	}

	/// `None` when no yip has this id.
	pub async fn increment_likes(
		&mut self,
		id: i64,
	) -> Result<Option<i64>, ServiceError> {
		let likes: Option<(i64,)> = sqlx::query_as("UPDATE yips SET likes = likes + 1 WHERE id = ? RETURNING likes")
			.bind(id)
			.fetch_optional(&mut *self.connection)
			.await?;
		Ok(likes.map(|(likes,)| likes))
	}

	pub async fn count(&mut self) -> Result<i64, ServiceError> {
		let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM yips").fetch_one(&mut *self.connection).await?;
		Ok(count)
	}
}
