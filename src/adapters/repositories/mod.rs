pub(crate) mod yip_repository;

use sqlx::sqlite::SqliteConnection;

/// Query layer over one borrowed connection, or a transaction deref'd to one.
pub struct Repository<'a> {
	pub(crate) connection: &'a mut SqliteConnection,
}

impl<'a> Repository<'a> {
	pub fn new(connection: &'a mut SqliteConnection) -> Self {
		Self { connection }
	}
}
