//! Slack markup to plain text.
//!
//! Two tokens are rewritten, in this order:
//!
//! | Token | Result |
//! |-------|--------|
//! | `<!here>` | `@here` |
//! | `<@U024BE7LH>` | `@<display name>` |
//!
//! A user mention is only resolved when the whole token between `<@` and the
//! next `>` is a known id (ids never contain `<`). Anything else (`<@U1|bob>`,
//! `<!channel>`, ids missing from `users.json`) stays verbatim.
//!
//! ```
//! use slackmerge::core::{UserDirectory, normalize_text};
//!
//! let users: UserDirectory = [("U123".to_string(), "alice".to_string())]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(normalize_text("hello <@U123>", &users), "hello @alice");
//! assert_eq!(normalize_text("<!here> meeting now", &users), "@here meeting now");
//! assert_eq!(normalize_text("ping <@U999>", &users), "ping <@U999>");
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::directory::UserDirectory;

/// Broadcast mention token.
pub const HERE_TOKEN: &str = "<!here>";

/// Plain-text form of a broadcast mention.
pub const HERE_TEXT: &str = "@here";

/// Opening of every user mention token.
pub const MENTION_PREFIX: &str = "<@";

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@([^<>]*)>").expect("mention pattern is valid"));

/// Rewrites broadcast and user mentions in one message text.
pub fn normalize_text<'a>(text: &'a str, users: &UserDirectory) -> Cow<'a, str> {
    let text = replace_here(text);
    let resolved = match replace_mentions(&text, users) {
        Cow::Owned(resolved) => Some(resolved),
        Cow::Borrowed(_) => None,
    };
    match resolved {
        Some(resolved) => Cow::Owned(resolved),
        None => text,
    }
}

fn replace_here(text: &str) -> Cow<'_, str> {
    if text.contains(HERE_TOKEN) {
        Cow::Owned(text.replace(HERE_TOKEN, HERE_TEXT))
    } else {
        Cow::Borrowed(text)
    }
}

fn replace_mentions<'t>(text: &'t str, users: &UserDirectory) -> Cow<'t, str> {
    if !text.contains(MENTION_PREFIX) {
        return Cow::Borrowed(text);
    }

    MENTION_RE.replace_all(text, |caps: &Captures<'_>| match users.get(&caps[1]) {
        Some(name) => format!("@{name}"),
        None => caps[0].to_string(),
    })
}
