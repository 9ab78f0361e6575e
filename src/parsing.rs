use std::str::Chars;

use itertools::PeekNth;

/// Consumes `prefix` from the front of `chars` if the whole thing is there.
/// Returns whether anything was consumed; on a miss, nothing is.
///
/// # Example
/// ```
/// let mut chars = itertools::peek_nth("youtu.be/dQw4w9WgXcQ".chars());
///
/// assert!(ytnotes::parsing::eat(&mut chars, "youtu.be/"));
/// assert_eq!(chars.collect::<String>(), String::from("dQw4w9WgXcQ"));
/// ```
///
/// ```
/// let mut chars = itertools::peek_nth("youtu.be/dQw4w9WgXcQ".chars());
///
/// assert!(!ytnotes::parsing::eat(&mut chars, "youtube.com/"));
/// assert_eq!(chars.collect::<String>(), String::from("youtu.be/dQw4w9WgXcQ"));
/// ```
pub fn eat(chars: &mut PeekNth<Chars<'_>>, prefix: &str) -> bool {
    for (i, ch) in prefix.chars().enumerate() {
        if chars.peek_nth(i) != Some(&ch) {
            return false;
        }
    }

    for _ in prefix.chars() {
        chars.next();
    }
    true
}

/// [eat]s the first prefix that matches, if any. When one candidate is a
/// prefix of another, the longer one must come first.
///
/// # Example
/// ```
/// let url = "https://foo.bar";
/// let mut chars = itertools::peek_nth(url.chars());
///
/// assert!(ytnotes::parsing::eat_any(&mut chars, &["https://", "http://"]));
/// assert_eq!(chars.collect::<String>(), String::from("foo.bar"));
/// ```
pub fn eat_any(chars: &mut PeekNth<Chars<'_>>, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| eat(chars, prefix))
}
