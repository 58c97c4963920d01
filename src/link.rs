//! Resolution of SnooNotes permalinks into Reddit things
//!
//! SnooNotes kept the URL of the post or comment a note was written about.
//! Mod Notes can instead be attached to the item itself by fullname, so the
//! URL is reduced to a [`Thing`]. This is pure string work; nothing is
//! fetched, and a URL that cannot be understood just leaves the note
//! unattached.

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static REDDIT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://(?:(?:www|old|new|np)\.)?reddit\.com(/[^?#]*)")
        .expect("reddit url pattern is valid")
});

static SHORT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://redd\.it/([a-z0-9]+)/?(?:[?#].*)?$")
        .expect("redd.it pattern is valid")
});

static THING_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]{1,13}$").expect("thing id pattern is valid"));

/// Subreddit sub-pages that look like IDs but are not
const SUBREDDIT_PAGES: &[&str] = &[
    "about",
    "comments",
    "controversial",
    "hot",
    "new",
    "rising",
    "s",
    "search",
    "submit",
    "top",
    "user",
    "w",
    "wiki",
];

/// A post or comment a note can be attached to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thing {
    Submission(String),
    Comment(String),
}

impl Thing {
    /// Reddit fullname, e.g. `t3_x3ejz2`
    pub fn fullname(&self) -> String {
        match self {
            Thing::Submission(id) => format!("t3_{}", id),
            Thing::Comment(id) => format!("t1_{}", id),
        }
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fullname())
    }
}

impl Serialize for Thing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fullname())
    }
}

/// Resolve a permalink into the submission or comment it points at
///
/// Understands the forms found in SnooNotes backups:
/// - `reddit.com/r/<sub>/comments/<post>/<slug>/` (also `www.`, `old.`, `new.`, `np.`)
/// - `reddit.com/r/<sub>/comments/<post>/<slug>/<comment>/`
/// - `redd.it/<post>`
/// - `reddit.com/r/<sub>/<post>` and `reddit.com/r/<sub>/<post>/.../<comment>`,
///   which browsers reject but SnooNotes recorded
pub fn resolve_thing(url: &str) -> Option<Thing> {
    let url = url.trim();

    if let Some(caps) = SHORT_URL.captures(url) {
        return thing_id(&caps[1]).map(Thing::Submission);
    }

    let path = REDDIT_URL.captures(url)?.get(1)?.as_str();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let rest = match segments.as_slice() {
        [r, _sub, rest @ ..] if r.eq_ignore_ascii_case("r") => rest,
        rest @ ["comments", ..] => rest,
        _ => return None,
    };

    match rest {
        ["comments", post, tail @ ..] => {
            let post = thing_id(post)?;
            // tail is [slug, comment, ..]
            match tail.get(1).and_then(|c| thing_id(c)) {
                Some(comment) => Some(Thing::Comment(comment)),
                None => Some(Thing::Submission(post)),
            }
        }
        [post] | [post, _] => post_id(post).map(Thing::Submission),
        [post, .., comment] => {
            post_id(post)?;
            thing_id(comment).map(Thing::Comment)
        }
        [] => None,
    }
}

/// Like [`thing_id`], but rejects subreddit page names
fn post_id(segment: &str) -> Option<String> {
    let id = thing_id(segment)?;
    (!SUBREDDIT_PAGES.contains(&id.as_str())).then_some(id)
}

fn thing_id(segment: &str) -> Option<String> {
    let id = segment.to_ascii_lowercase();
    THING_ID.is_match(&id).then_some(id)
}
