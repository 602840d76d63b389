pub mod commands;
pub mod entity;

/// Raw composer input split into the yip text and its optional hashtag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
	pub yip: String,
	pub hashtag: Option<String>,
}

impl Composition {
	/// Everything after the first `#` is the hashtag; the text before it is trimmed.
	pub fn parse(full: &str) -> Self {
		match full.split_once('#') {
			Some((yip, hashtag)) => Self {
				yip: yip.trim().to_string(),
				hashtag: (!hashtag.is_empty()).then(|| hashtag.to_string()),
			},
			None => Self {
				yip: full.trim().to_string(),
				hashtag: None,
			},
		}
	}
}

#[cfg(test)]
mod test {
	use super::Composition;

	#[test]
	fn test_hashtag_is_split_off() {
		let composition = Composition::parse("hello world #fun");
		assert_eq!(composition.yip, "hello world");
		assert_eq!(composition.hashtag.as_deref(), Some("fun"));
	}

	#[test]
	fn test_no_hashtag() {
		let composition = Composition::parse("no hashtag here");
		assert_eq!(composition.yip, "no hashtag here");
		assert_eq!(composition.hashtag, None);
	}

	#[test]
	fn test_only_first_hash_splits() {
		let composition = Composition::parse("  a #b#c");
		assert_eq!(composition.yip, "a");
		assert_eq!(composition.hashtag.as_deref(), Some("b#c"));
	}

	#[test]
	fn test_trailing_hash_has_no_hashtag() {
		assert_eq!(Composition::parse("dangling #").hashtag, None);
	}
}
