//! Client view state and its transition function.
//!
//! [`ViewState::update`] is pure: it mutates the state for one [`Event`] and
//! returns the [`Command`]s the caller has to run. Command results come back
//! as further events.

use std::collections::HashSet;
use std::time::Duration;

use crate::domain::yip::entity::{UserYip, Yip};

/// How long the composer stays up after a successful submission.
pub const RETURN_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
	#[default]
	Feed,
	User,
	Composer,
	/// Absorbing: only a reload leaves it.
	Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
	pub name: String,
	pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	FeedLoaded(Vec<Yip>),
	SearchInput(String),
	SearchSubmitted,
	SearchResults(Vec<i64>),
	HomeSelected,
	AuthorSelected(String),
	UserYipsLoaded(Vec<UserYip>),
	ComposerSelected,
	DraftChanged(Draft),
	ComposerSubmitted,
	YipCreated(Yip),
	ReturnElapsed { version: u64 },
	LikeSelected(i64),
	LikesUpdated { id: i64, likes: i64 },
	RequestFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	FetchFeed,
	Search(String),
	FetchUser(String),
	Like(i64),
	Create { name: String, full: String },
	ScheduleReturn { version: u64, after: Duration },
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
	pub panel: Panel,
	/// Cards in display order, newest first.
	pub feed: Vec<Yip>,
	/// Ids left visible by the last search; `None` shows every card.
	pub filter: Option<HashSet<i64>>,
	pub search_term: String,
	pub search_enabled: bool,
	pub user_detail: Vec<UserYip>,
	pub draft: Draft,
	/// Bumped on every navigation so deferred transitions can tell they are stale.
	pub version: u64,
}

impl ViewState {
	pub fn init() -> (Self, Vec<Command>) {
		(Self::default(), vec![Command::FetchFeed])
	}

	pub fn is_card_visible(
		&self,
		id: i64,
	) -> bool {
		self.filter.as_ref().map_or(true, |ids| ids.contains(&id))
	}

	pub fn navigation_disabled(&self) -> bool {
		self.panel == Panel::Error
	}

	fn navigate(
		&mut self,
		panel: Panel,
	) {
		self.panel = panel;
		self.version += 1;
	}

	pub fn update(
		&mut self,
		event: Event,
	) -> Vec<Command> {
		if self.panel == Panel::Error {
			return vec![];
		}

		match event {
			Event::FeedLoaded(yips) => self.feed.extend(yips),
			Event::SearchInput(term) => {
				self.search_enabled = !term.trim().is_empty();
				self.search_term = term;
			}
			Event::SearchSubmitted => {
				if !self.search_enabled {
					return vec![];
				}
				if self.panel != Panel::Feed {
					self.navigate(Panel::Feed);
				}
				return vec![Command::Search(self.search_term.trim().to_string())];
			}
			Event::SearchResults(ids) => {
				self.filter = Some(ids.into_iter().collect());
				self.search_enabled = false;
			}
			Event::HomeSelected => {
				self.navigate(Panel::Feed);
				self.search_term.clear();
				self.search_enabled = false;
				self.filter = None;
			}
			Event::AuthorSelected(name) => {
				self.navigate(Panel::User);
				self.user_detail.clear();
				return vec![Command::FetchUser(name)];
			}
			Event::UserYipsLoaded(yips) => self.user_detail = yips,
			Event::ComposerSelected => self.navigate(Panel::Composer),
			Event::DraftChanged(draft) => self.draft = draft,
			Event::ComposerSubmitted => {
				let Draft { name, full } = self.draft.clone();
				return vec![Command::Create { name, full }];
			}
			Event::YipCreated(yip) => {
				self.draft = Draft::default();
				if let Some(ids) = self.filter.as_mut() {
					ids.insert(yip.id);
				}
				self.feed.insert(0, yip);
				return vec![Command::ScheduleReturn {
					version: self.version,
					after: RETURN_DELAY,
				}];
			}
			Event::ReturnElapsed { version } => {
				if version == self.version && self.panel == Panel::Composer {
					self.navigate(Panel::Feed);
				}
			}
			Event::LikeSelected(id) => return vec![Command::Like(id)],
			Event::LikesUpdated { id, likes } => {
				if let Some(card) = self.feed.iter_mut().find(|yip| yip.id == id) {
					card.likes = likes;
				}
			}
			Event::RequestFailed => self.panel = Panel::Error,
		}
		vec![]
	}
}

#[cfg(test)]
pub(crate) mod test {
	use chrono::{TimeZone, Utc};

	use super::{Command, Draft, Event, Panel, ViewState, RETURN_DELAY};
	use crate::domain::yip::entity::{UserYip, Yip};

	pub(crate) fn yip(
		id: i64,
		name: &str,
		text: &str,
	) -> Yip {
		Yip {
			id,
			name: name.to_string(),
			yip: text.to_string(),
			hashtag: None,
			likes: 0,
			date: Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap() + chrono::Duration::minutes(id),
		}
	}

	fn loaded() -> ViewState {
		let (mut state, commands) = ViewState::init();
		assert_eq!(commands, vec![Command::FetchFeed]);
		state.update(Event::FeedLoaded(vec![yip(3, "Ava", "c"), yip(2, "Bo", "b"), yip(1, "Ava", "a")]));
		state
	}

	#[test]
	fn test_search_toggles_with_input() {
		let mut state = loaded();
		assert!(!state.search_enabled);

		state.update(Event::SearchInput("   ".into()));
		assert!(!state.search_enabled);
		assert!(state.update(Event::SearchSubmitted).is_empty());

		state.update(Event::SearchInput(" coffee ".into()));
		assert!(state.search_enabled);
		assert_eq!(state.update(Event::SearchSubmitted), vec![Command::Search("coffee".into())]);
	}

	#[test]
	fn test_search_results_filter_cards() {
		let mut state = loaded();
		state.update(Event::SearchInput("a".into()));
		state.update(Event::SearchSubmitted);

		state.update(Event::SearchResults(vec![1, 3]));

		assert!(state.is_card_visible(1));
		assert!(!state.is_card_visible(2));
		assert!(!state.search_enabled);

		state.update(Event::HomeSelected);
		assert!(state.is_card_visible(2));
		assert!(state.search_term.is_empty());
	}

	#[test]
	fn test_search_from_another_panel_returns_to_feed() {
		let mut state = loaded();
		state.update(Event::AuthorSelected("Ava".into()));
		state.update(Event::SearchInput("a".into()));

		state.update(Event::SearchSubmitted);

		assert_eq!(state.panel, Panel::Feed);
	}

	#[test]
	fn test_author_selection_clears_detail() {
		let mut state = loaded();
		state.user_detail = vec![UserYip {
			name: "Bo".into(),
			yip: "old".into(),
			hashtag: None,
			date: Utc::now(),
		}];

		let commands = state.update(Event::AuthorSelected("Ava".into()));

		assert_eq!(commands, vec![Command::FetchUser("Ava".into())]);
		assert_eq!(state.panel, Panel::User);
		assert!(state.user_detail.is_empty());
	}

	#[test]
	fn test_created_yip_returns_to_feed_after_delay() {
		'_given: {
			let mut state = loaded();
			state.update(Event::ComposerSelected);
			state.update(Event::DraftChanged(Draft {
				name: "Ava".into(),
				full: "gm #morning".into(),
			}));

			'_when: {
				let create = state.update(Event::ComposerSubmitted);
				let schedule = state.update(Event::YipCreated(yip(4, "Ava", "gm")));

				'_then: {
					assert_eq!(
						create,
						vec![Command::Create {
							name: "Ava".into(),
							full: "gm #morning".into()
						}]
					);
					assert_eq!(
						schedule,
						vec![Command::ScheduleReturn {
							version: state.version,
							after: RETURN_DELAY
						}]
					);
					assert_eq!(state.feed[0].id, 4);
					assert_eq!(state.draft, Draft::default());
					assert_eq!(state.panel, Panel::Composer);

					state.update(Event::ReturnElapsed { version: state.version });
					assert_eq!(state.panel, Panel::Feed);
				}
			}
		}
	}

	#[test]
	fn test_created_yip_shows_through_search_filter() {
		let mut state = loaded();
		state.update(Event::SearchInput("a".into()));
		state.update(Event::SearchSubmitted);
		state.update(Event::SearchResults(vec![1]));
		state.update(Event::ComposerSelected);

		state.update(Event::YipCreated(yip(4, "Ava", "gm")));
		state.update(Event::ReturnElapsed { version: state.version });

		assert_eq!(state.panel, Panel::Feed);
		assert!(state.is_card_visible(4));
		assert!(state.is_card_visible(1));
		assert!(!state.is_card_visible(2));
	}

	#[test]
	fn test_stale_return_is_ignored() {
		let mut state = loaded();
		state.update(Event::ComposerSelected);
		let version = state.version;
		state.update(Event::YipCreated(yip(4, "Ava", "gm")));

		state.update(Event::AuthorSelected("Bo".into()));
		state.update(Event::ReturnElapsed { version });

		assert_eq!(state.panel, Panel::User);
	}

	#[test]
	fn test_likes_take_server_value() {
		let mut state = loaded();

		assert_eq!(state.update(Event::LikeSelected(2)), vec![Command::Like(2)]);
		state.update(Event::LikesUpdated { id: 2, likes: 41 });

		assert_eq!(state.feed.iter().find(|y| y.id == 2).unwrap().likes, 41);
	}

	#[test]
	fn test_error_is_absorbing() {
		let mut state = loaded();

		state.update(Event::RequestFailed);

		assert!(state.navigation_disabled());
		assert!(state.update(Event::HomeSelected).is_empty());
		assert!(state.update(Event::AuthorSelected("Ava".into())).is_empty());
		assert_eq!(state.panel, Panel::Error);
	}
}
