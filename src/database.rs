use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{Connection, Sqlite, Transaction};

use crate::services::response::ServiceError;

/// A single SQLite connection, opened for the lifetime of one request.
pub struct DatabaseExecutor {
	connection: SqliteConnection,
}

impl DatabaseExecutor {
	pub async fn connect(url: &str) -> Result<Self, ServiceError> {
		let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
		let connection = SqliteConnection::connect_with(&options).await.map_err(|err| {
			tracing::error!(error = %err, url, "failed to open database");
			ServiceError::from(err)
		})?;
		Ok(Self { connection })
	}

	pub fn connection(&mut self) -> &mut SqliteConnection {
		&mut self.connection
	}

	/// Dropping the returned transaction without committing rolls it back.
	pub async fn begin(&mut self) -> Result<Transaction<'_, Sqlite>, ServiceError> {
		Ok(self.connection.begin().await?)
	}

	pub async fn migrate(&mut self) -> Result<(), ServiceError> {
		sqlx::migrate!("./migrations").run(&mut self.connection).await?;
		Ok(())
	}

	pub async fn close(self) -> Result<(), ServiceError> {
		Ok(self.connection.close().await?)
	}
}
