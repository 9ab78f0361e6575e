use crate::parsing::{eat, eat_any};

/// Accepts anything shaped like `local@domain.tld`: a run of
/// non-whitespace/non-`@` characters, an `@`, then another run containing a
/// `.` with at least one character on each side. Deliberately permissive;
/// exotic RFC 5321 addresses may be misjudged either way.
///
/// # Example
/// ```
/// assert!(ytnotes::validate::is_valid_email("a@b.co"));
/// assert!(!ytnotes::validate::is_valid_email("not-an-email"));
/// ```
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };

    if !is_plain_run(local) || !is_plain_run(domain) {
        return false;
    }

    // the dot needs at least one character on either side
    let domain: Vec<char> = domain.chars().collect();
    domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
}

/// A non-empty run with no whitespace and no `@`.
fn is_plain_run(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| !c.is_whitespace() && c != '@')
}

/// Recognizes YouTube playlist, video and short links by prefix: an optional
/// scheme, an optional `www.`, then `youtu.be/` or `youtube.com/` followed by
/// `playlist?list=`, `watch?v=` or `embed/`. This is a prefix test, not a URL
/// parse, so anything after a recognized prefix is allowed through.
///
/// # Example
/// ```
/// assert!(ytnotes::validate::is_valid_playlist_url(
///     "https://www.youtube.com/playlist?list=OLAK5uy_mZcxjzRvOZAUa2H6Pf8LVvyLDGeBSdmJQ",
/// ));
/// assert!(!ytnotes::validate::is_valid_playlist_url("https://vimeo.com/12345"));
/// ```
#[must_use]
pub fn is_valid_playlist_url(input: &str) -> bool {
    let mut chars = itertools::peek_nth(input.chars());

    eat_any(&mut chars, &["https://", "http://"]);
    eat(&mut chars, "www.");

    if eat(&mut chars, "youtu.be/") {
        return true;
    }

    eat(&mut chars, "youtube.com/")
        && eat_any(&mut chars, &["playlist?list=", "watch?v=", "embed/"])
}
