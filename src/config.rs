use crate::services::response::ServiceError;

#[derive(Debug, Clone)]
pub struct Config {
	/// Default level for this crate's logs when `RUST_LOG` is not set
	pub log_level: String,

	/// Port server is listening to
	pub port: u16,
	pub database_url: String,
	pub allow_origins: String,
	pub public_dir: String,
	/// Yips loaded into an empty table at startup
	pub seed_file: Option<String>,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ServiceError> {
		let port = match lookup("PORT") {
			Some(port) => port
				.trim()
				.parse::<u16>()
				.map_err(|err| ServiceError::ConfigError(format!("PORT `{port}` is not a valid port: {err}")))?,
			None => 8000,
		};
		let log_level = lookup("LOG_LEVEL").unwrap_or("info".to_string());
		let database_url = lookup("DATABASE_URL").unwrap_or("sqlite://yipper.db".to_string());
		let allow_origins = lookup("ALLOW_ORIGINS").unwrap_or("*".to_string());
		let public_dir = lookup("PUBLIC_DIR").unwrap_or("public".to_string());
		let seed_file = lookup("SEED_FILE").filter(|path| !path.is_empty());

		Ok(Config {
			log_level,
			port,
			database_url,
			allow_origins,
			public_dir,
			seed_file,
		})
	}
}
