//! Browser-side half of yipper: which panel is showing, what the cards look
//! like, and how user actions turn into calls against the `/yipper` API.

pub mod controller;
pub mod render;
pub mod transport;
pub mod view;
