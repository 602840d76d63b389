use axum::{
	async_trait,
	body::HttpBody,
	extract::FromRequest,
	http::{header::CONTENT_TYPE, Request},
	BoxError, Form, Json,
};
use serde::de::DeserializeOwned;

use crate::services::response::ServiceError;

/// Request body given either as JSON or as a url-encoded form.
pub struct Payload<T>(pub T);

#[async_trait]
impl<T, S, B> FromRequest<S, B> for Payload<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
	B: HttpBody + Send + 'static,
	B::Data: Send,
	B::Error: Into<BoxError>,
{
	type Rejection = ServiceError;

	async fn from_request(
		req: Request<B>,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let is_json = req
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(|value| value.starts_with("application/json"))
			.unwrap_or(false);

		if is_json {
			let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
				tracing::debug!(%rejection, "rejected json body");
				ServiceError::BadRequest
			})?;
			Ok(Self(value))
		} else {
			let Form(value) = Form::<T>::from_request(req, state).await.map_err(|rejection| {
				tracing::debug!(%rejection, "rejected form body");
				ServiceError::BadRequest
			})?;
			Ok(Self(value))
		}
	}
}
