use std::fmt::Display;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::json;

use crate::domain::yip::entity::{UserYip, Yip, YipId};

#[derive(Debug)]
pub enum ClientError {
	Status(StatusCode),
	Http(reqwest::Error),
	Decode(String),
	InvalidURL,
}

impl Display for ClientError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ClientError::Status(status) => write!(f, "Status: {}", status),
			ClientError::Http(err) => write!(f, "{}", err),
			ClientError::Decode(body) => write!(f, "Decode: {}", body),
			ClientError::InvalidURL => write!(f, "InvalidURL"),
		}
	}
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
	fn from(value: reqwest::Error) -> Self {
		ClientError::Http(value)
	}
}

/// The four yipper calls as the view controller needs them.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
	async fn feed(&self) -> Result<Vec<Yip>, ClientError>;
	async fn search(
		&self,
		term: &str,
	) -> Result<Vec<i64>, ClientError>;
	async fn user_yips(
		&self,
		name: &str,
	) -> Result<Vec<UserYip>, ClientError>;
	async fn like(
		&self,
		id: i64,
	) -> Result<i64, ClientError>;
	async fn create(
		&self,
		name: &str,
		full: &str,
	) -> Result<Yip, ClientError>;
}

#[derive(Deserialize)]
struct Yips<T> {
	yips: Vec<T>,
}

pub struct HttpTransport {
	client: reqwest::Client,
	base: Url,
}

impl HttpTransport {
	pub fn new(base: &str) -> Result<Self, ClientError> {
		Ok(Self {
			client: reqwest::Client::new(),
			base: Url::parse(base).map_err(|_| ClientError::InvalidURL)?,
		})
	}

	fn url(
		&self,
		segments: &[&str],
	) -> Result<Url, ClientError> {
		let mut url = self.base.clone();
		url.path_segments_mut()
			.map_err(|_| ClientError::InvalidURL)?
			.pop_if_empty()
			.push("yipper")
			.extend(segments);
		Ok(url)
	}

	async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
		if !response.status().is_success() {
			tracing::warn!(status = %response.status(), url = %response.url(), "yipper request failed");
			return Err(ClientError::Status(response.status()));
		}
		Ok(response)
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn feed(&self) -> Result<Vec<Yip>, ClientError> {
		let response = Self::checked(self.client.get(self.url(&["yips"])?).send().await?).await?;
		Ok(response.json::<Yips<Yip>>().await?.yips)
	}

	async fn search(
		&self,
		term: &str,
	) -> Result<Vec<i64>, ClientError> {
		let request = self.client.get(self.url(&["yips"])?).query(&[("search", term)]);
		let response = Self::checked(request.send().await?).await?;
		Ok(response.json::<Yips<YipId>>().await?.yips.into_iter().map(|hit| hit.id).collect())
	}

	async fn user_yips(
		&self,
		name: &str,
	) -> Result<Vec<UserYip>, ClientError> {
		let response = Self::checked(self.client.get(self.url(&["user", name])?).send().await?).await?;
		Ok(response.json().await?)
	}

	async fn like(
		&self,
		id: i64,
	) -> Result<i64, ClientError> {
		let request = self.client.post(self.url(&["likes"])?).json(&json!({ "id": id.to_string() }));
		let body = Self::checked(request.send().await?).await?.text().await?;
		body.trim().parse().map_err(|_| ClientError::Decode(body))
	}

	async fn create(
		&self,
		name: &str,
		full: &str,
	) -> Result<Yip, ClientError> {
		let request = self.client.post(self.url(&["new"])?).json(&json!({ "name": name, "full": full }));
		Ok(Self::checked(request.send().await?).await?.json().await?)
	}
}

#[cfg(test)]
pub(crate) mod test {
	use std::net::TcpListener;

	use chrono::Utc;

	use super::{ClientError, HttpTransport, Transport};
	use crate::{
		adapters::repositories::Repository,
		config::Config,
		database::{test::database_url, DatabaseExecutor},
		routes::create_routes,
	};

	/// Serves the yipper routes on an ephemeral port and returns the base URL.
	pub(crate) async fn serve() -> String {
		let url = database_url().await;
		let mut executor = DatabaseExecutor::connect(&url).await.unwrap();
		let mut repo = Repository::new(executor.connection());
		repo.insert_at("Mister Fluffers", "sunny window spot", Some("nap"), 4, Utc::now() - chrono::Duration::hours(2))
			.await
			.unwrap();
		repo.insert_at("Ava", "coffee first", None, 0, Utc::now() - chrono::Duration::hours(1)).await.unwrap();

		let mut config = Config::from_lookup(|_| None).unwrap();
		config.database_url = url;

		let listener = TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		let server = axum::Server::from_tcp(listener).unwrap().serve(create_routes(config.into()).into_make_service());
		tokio::spawn(server);
		format!("http://{addr}/")
	}

	#[tokio::test]
	async fn test_http_round_trip() {
		'_given: {
			let transport = HttpTransport::new(&serve().await).unwrap();

			'_when: {
				let feed = transport.feed().await.unwrap();
				let hits = transport.search("coffee").await.unwrap();
				let fluffers = transport.user_yips("Mister Fluffers").await.unwrap();
				let likes = transport.like(feed[1].id).await.unwrap();
				let created = transport.create("Ava", "second cup #coffee").await.unwrap();

				'_then: {
					assert_eq!(feed.iter().map(|y| y.yip.as_str()).collect::<Vec<_>>(), vec!["coffee first", "sunny window spot"]);
					assert_eq!(hits, vec![feed[0].id]);
					assert_eq!(fluffers.len(), 1);
					assert_eq!(likes, 5);
					assert_eq!(created.hashtag.as_deref(), Some("coffee"));
					assert_eq!(transport.feed().await.unwrap()[0].id, created.id);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_http_errors_surface_status() {
		let transport = HttpTransport::new(&serve().await).unwrap();

		let missing = transport.user_yips("Nobody").await;
		let stranger = transport.create("Nobody", "hi").await;

		assert!(matches!(missing, Err(ClientError::Status(status)) if status.as_u16() == 404));
		assert!(matches!(stranger, Err(ClientError::Status(status)) if status.as_u16() == 404));
	}
}
