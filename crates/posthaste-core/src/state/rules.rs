//! Text patterns that end a state.
//!
//! Each rule sees the buffer with the lookahead character appended, so a
//! state can notice its own boundary before the next state would swallow it.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keyword::Keyword;

static LEADING_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(SELECT|FROM|INSERT|UPDATE)\s").expect("leading keyword pattern is valid")
});

static LIST_ITEM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w\s\w").expect("list boundary pattern is valid"));

fn with_lookahead(buffer: &str, lookahead: Option<char>) -> Cow<'_, str> {
    match lookahead {
        Some(c) => {
            let mut text = String::with_capacity(buffer.len() + c.len_utf8());
            text.push_str(buffer);
            text.push(c);
            Cow::Owned(text)
        }
        None => Cow::Borrowed(buffer),
    }
}

/// Returns the keyword the buffer opens with, once the whitespace after it
/// has been read into the buffer.
///
/// The keyword must start the buffer and match exactly, so `SELECTOR` or
/// ` SELECT` never match.
pub fn leading_keyword(buffer: &str, lookahead: Option<char>) -> Option<Keyword> {
    let text = with_lookahead(buffer, lookahead);
    let captures = LEADING_KEYWORD.captures(&text)?;
    if captures.get(0)?.end() > buffer.len() {
        // The delimiter is still the lookahead.
        return None;
    }
    Keyword::parse(captures.get(1)?.as_str())
}

/// Returns true once a second whitespace-separated word has started, which
/// means the first list item has ended.
///
/// Commas and quoting are not considered.
pub fn ends_list_item(buffer: &str, lookahead: Option<char>) -> bool {
    LIST_ITEM_BOUNDARY.is_match(&with_lookahead(buffer, lookahead))
}
