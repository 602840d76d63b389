use std::collections::VecDeque;
use std::sync::Arc;

use tokio::{
	sync::{Mutex, MutexGuard},
	task::JoinHandle,
};

use super::{
	transport::Transport,
	view::{Command, Event, ViewState},
};

/// Drives a [`ViewState`]: applies events, runs the resulting commands through
/// the transport and feeds their outcomes back in.
pub struct Controller<T: Transport> {
	state: Arc<Mutex<ViewState>>,
	transport: Arc<T>,
	pending_return: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Transport> Controller<T> {
	/// Builds the controller and loads the feed.
	pub async fn start(transport: T) -> Self {
		let (state, commands) = ViewState::init();
		let controller = Self {
			state: Arc::new(Mutex::new(state)),
			transport: Arc::new(transport),
			pending_return: Mutex::new(None),
		};
		let mut queue = VecDeque::new();
		for command in commands {
			if let Some(event) = controller.execute(command).await {
				queue.push_back(event);
			}
		}
		controller.drain(queue).await;
		controller
	}

	pub async fn state(&self) -> MutexGuard<'_, ViewState> {
		self.state.lock().await
	}

	pub async fn dispatch(
		&self,
		event: Event,
	) {
		self.drain(VecDeque::from([event])).await
	}

	async fn drain(
		&self,
		mut queue: VecDeque<Event>,
	) {
		while let Some(event) = queue.pop_front() {
			let commands = {
				let mut state = self.state.lock().await;
				let version = state.version;
				let commands = state.update(event);
				if state.version != version {
					self.cancel_return().await;
				}
				commands
			};
			for command in commands {
				if let Some(next) = self.execute(command).await {
					queue.push_back(next);
				}
			}
		}
	}

	async fn cancel_return(&self) {
		if let Some(handle) = self.pending_return.lock().await.take() {
			handle.abort();
		}
	}

	async fn execute(
		&self,
		command: Command,
	) -> Option<Event> {
		let outcome = match command {
			Command::FetchFeed => self.transport.feed().await.map(Event::FeedLoaded),
			Command::Search(term) => self.transport.search(&term).await.map(Event::SearchResults),
			Command::FetchUser(name) => self.transport.user_yips(&name).await.map(Event::UserYipsLoaded),
			Command::Like(id) => self.transport.like(id).await.map(|likes| Event::LikesUpdated { id, likes }),
			Command::Create { name, full } => self.transport.create(&name, &full).await.map(Event::YipCreated),
			Command::ScheduleReturn { version, after } => {
				let state = self.state.clone();
				let handle = tokio::spawn(async move {
					tokio::time::sleep(after).await;
					state.lock().await.update(Event::ReturnElapsed { version });
				});
				if let Some(previous) = self.pending_return.lock().await.replace(handle) {
					previous.abort();
				}
				return None;
			}
		};

		match outcome {
			Ok(event) => Some(event),
			Err(err) => {
				tracing::error!(error = %err, "yipper request failed");
				Some(Event::RequestFailed)
			}
		}
	}
}
