use std::net::SocketAddr;

use yipper::{
	database::DatabaseExecutor, dependencies::config, routes::app, seed::seed_if_empty, services::response::ServiceError,
	state::YipperState,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
	println!("Environment Variable Is Being Set...");
	let config = config()?;

	// ! Tracing
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			// axum logs rejections from built-in extractors with the `axum::rejection`
			// target, at `TRACE` level. `axum::rejection=trace` enables showing those events
			format!("yipper={},tower_http=debug,axum::rejection=trace", config.log_level).into()
		}))
		.with(tracing_subscriber::fmt::layer())
		.init();

	// ! Store
	let mut executor = DatabaseExecutor::connect(&config.database_url).await?;
	executor.migrate().await?;
	if let Some(seed_file) = &config.seed_file {
		seed_if_empty(&mut executor, seed_file).await?;
	}
	executor.close().await?;

	let state: YipperState = config.clone().into();
	let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

	tracing::info!(%addr, database_url = %config.database_url, "starting yipper");
	axum::Server::bind(&addr)
		.serve(app(state).into_make_service())
		.await
		.map_err(|err| ServiceError::IoError(std::io::Error::new(std::io::ErrorKind::Other, err)))?;
	Ok(())
}
