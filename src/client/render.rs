//! Markup for the yipper page, built from [`ViewState`] with maud.

use maud::{html, Markup};

use super::view::{Panel, ViewState};
use crate::domain::yip::entity::{UserYip, Yip};

/// `img/<name lowercased, spaces as dashes>.png`
pub fn avatar_path(name: &str) -> String {
	format!("img/{}.png", name.to_lowercase().replace(' ', "-"))
}

fn hidden(hide: bool) -> Option<&'static str> {
	hide.then_some("hidden")
}

fn card_class(visible: bool) -> &'static str {
	if visible {
		"card"
	} else {
		"card hidden"
	}
}

pub fn card(
	yip: &Yip,
	visible: bool,
) -> Markup {
	html! {
		article class=(card_class(visible)) id=(yip.id) {
			img src=(avatar_path(&yip.name)) alt="Photo of a Yipper";
			div {
				p.individual { (yip.name) }
				p {
					(yip.yip)
					@if let Some(hashtag) = &yip.hashtag {
						" #" (hashtag)
					}
				}
			}
			div.meta {
				p { (yip.date.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()) }
				div {
					img src="img/heart.png" alt="heart";
					p.likes { (yip.likes) }
				}
			}
		}
	}
}

/// Line `n` (1-based) of the user panel.
pub fn user_line(
	n: usize,
	yip: &UserYip,
) -> String {
	format!("Yip {}: {} #{}", n, yip.yip, yip.hashtag.as_deref().unwrap_or_default())
}

pub fn user_detail(yips: &[UserYip]) -> Markup {
	html! {
		@if let Some(first) = yips.first() {
			article.single {
				h2 { "Yips shared by " (first.name) ":" }
				@for (index, yip) in yips.iter().enumerate() {
					p { (user_line(index + 1, yip)) }
				}
			}
		}
	}
}

pub fn render(state: &ViewState) -> Markup {
	let disabled = state.navigation_disabled();
	html! {
		nav {
			input id="search-term" type="text" value=(state.search_term) disabled[disabled];
			button id="search-btn" disabled[disabled || !state.search_enabled] { "Search" }
			button id="home-btn" disabled[disabled] { "Home" }
			button id="yip-btn" disabled[disabled] { "Yip" }
		}
		main id="yipper-data" class=[hidden(disabled)] {
			section id="home" class=[hidden(state.panel != Panel::Feed)] {
				@for yip in &state.feed {
					(card(yip, state.is_card_visible(yip.id)))
				}
			}
			section id="user" class=[hidden(state.panel != Panel::User)] {
				(user_detail(&state.user_detail))
			}
			section id="new" class=[hidden(state.panel != Panel::Composer)] {
				form {
					input id="name" type="text" value=(state.draft.name);
					textarea id="yip" { (state.draft.full) }
					button type="submit" { "Submit" }
				}
			}
		}
		section id="error" class=[hidden(!disabled)] {
			p { "An error occurred. Please reload the page and try again." }
		}
	}
}
