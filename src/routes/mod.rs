mod yips;

use axum::{
	http::{header::CONTENT_TYPE, HeaderValue, Method},
	routing::{get, post},
	Router,
};
use tower_http::{
	cors::{AllowOrigin, Any, CorsLayer},
	services::ServeDir,
	trace::TraceLayer,
};

use crate::state::YipperState;

/// The four yipper endpoints, nested under `/yipper`.
pub fn create_routes(state: YipperState) -> Router {
	let yipper = Router::new()
		.route("/yips", get(yips::list_yips))
		.route("/user/:user", get(yips::user_yips))
		.route("/likes", post(yips::like_yip))
		.route("/new", post(yips::create_yip));

	Router::new().nest("/yipper", yipper).with_state(state)
}

/// API routes plus static assets, CORS and request tracing.
pub fn app(state: YipperState) -> Router {
	let public = ServeDir::new(&state.public_dir);

	create_routes(state.clone())
		.fallback_service(public)
		.layer(cors(&state.allow_origins))
		.layer(TraceLayer::new_for_http())
}

fn cors(allow_origins: &str) -> CorsLayer {
	let layer = CorsLayer::new().allow_methods([Method::GET, Method::POST]).allow_headers([CONTENT_TYPE]);
	if allow_origins.trim() == "*" {
		return layer.allow_origin(Any);
	}

	let origins: Vec<HeaderValue> = allow_origins
		.split(',')
		.map(str::trim)
		.filter(|origin| !origin.is_empty())
		.filter_map(|origin| match origin.parse::<HeaderValue>() {
			Ok(value) => Some(value),
			Err(err) => {
				tracing::warn!(origin, error = %err, "ignoring invalid CORS origin");
				None
			}
		})
		.collect();
	layer.allow_origin(AllowOrigin::list(origins))
}
