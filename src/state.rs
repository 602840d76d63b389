use std::{ops::Deref, sync::Arc};

use crate::{config::Config, database::DatabaseExecutor, services::response::ServiceError};

#[derive(Clone)]
pub struct YipperState(pub Arc<Config>);

impl From<Config> for YipperState {
	fn from(value: Config) -> Self {
		Self(Arc::new(value))
	}
}

impl Deref for YipperState {
	type Target = Config;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl YipperState {
	/// Opens a fresh connection; it is closed when the executor is dropped.
	pub async fn executor(&self) -> Result<DatabaseExecutor, ServiceError> {
		DatabaseExecutor::connect(&self.database_url).await
	}
}
