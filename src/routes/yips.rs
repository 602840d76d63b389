use axum::{
	extract::{Path, Query, State},
	Json,
};
use serde::Deserialize;

use crate::{
	common::payload::Payload,
	domain::yip::{
		commands::{CreateYip, LikeYip},
		entity::{UserYip, Yip},
	},
	services::{
		handlers::{Feed, YipHandler},
		response::ServiceError,
	},
	state::YipperState,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
	pub search: Option<String>,
}

pub async fn list_yips(
	State(state): State<YipperState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<Feed>, ServiceError> {
	let mut executor = state.executor().await?;
	Ok(Json(YipHandler::feed(&mut executor, params.search.as_deref()).await?))
}

pub async fn user_yips(
	State(state): State<YipperState>,
	Path(user): Path<String>,
) -> Result<Json<Vec<UserYip>>, ServiceError> {
	let mut executor = state.executor().await?;
	Ok(Json(YipHandler::user_yips(&mut executor, &user).await?))
}

pub async fn like_yip(
	State(state): State<YipperState>,
	Payload(cmd): Payload<LikeYip>,
) -> Result<String, ServiceError> {
	let mut executor = state.executor().await?;
	Ok(YipHandler::like(&mut executor, cmd).await?.to_string())
}

pub async fn create_yip(
	State(state): State<YipperState>,
	Payload(cmd): Payload<CreateYip>,
) -> Result<Json<Yip>, ServiceError> {
	let mut executor = state.executor().await?;
	Ok(Json(YipHandler::create(&mut executor, cmd).await?))
}
