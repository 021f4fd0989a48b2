//! URL helpers shared by the pagination strategies
//!
//! Both helpers operate on plain strings so they work on absolute URLs as
//! well as on paths relative to an API base.

use crate::error::{Error, Result};
use url::form_urlencoded;

/// Return `url` with query parameter `key` replaced by `value`, or removed when
/// `value` is `None`.
///
/// Repeated values of `key` collapse to the single new value. Other
/// parameters keep their relative order; segments without a value are
/// dropped. Scheme, host, path and fragment are left untouched.
///
/// ```
/// use page_links::urls::modify_query;
///
/// assert_eq!(modify_query("/items?page=3&q=x", "page", Some("4")), "/items?page=4&q=x");
/// assert_eq!(modify_query("/items?page=3", "page", None), "/items");
/// ```
pub fn modify_query(url: &str, key: &str, value: Option<&str>) -> String {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, fragment),
        None => (url, ""),
    };
    let (head, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut params: Vec<(String, Vec<String>)> = Vec::new();
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        if v.is_empty() {
            continue;
        }
        match params.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, values)) => values.push(v.into_owned()),
            None => params.push((k.into_owned(), vec![v.into_owned()])),
        }
    }

    match value {
        None => params.retain(|(k, _)| k != key),
        Some(value) => match params.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => *values = vec![value.to_string()],
            None => params.push((key.to_string(), vec![value.to_string()])),
        },
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, values) in &params {
        for v in values {
            serializer.append_pair(k, v);
        }
    }
    let query = serializer.finish();

    let mut out = String::with_capacity(url.len() + key.len());
    out.push_str(head);
    if !query.is_empty() {
        out.push('?');
        out.push_str(&query);
    }
    if !fragment.is_empty() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Remove the literal `prefix` from `s`.
///
/// Used to turn a provider's absolute pagination URL into a link relative to
/// the configured API base; a mismatch means the base URL is wrong.
///
/// ```
/// use page_links::urls::strip_prefix;
///
/// assert_eq!(strip_prefix("https://api.example.com", "https://api.example.com/foo/bar").unwrap(), "/foo/bar");
/// assert!(strip_prefix("https://api.example.org", "https://api.example.com/baz").is_err());
/// ```
pub fn strip_prefix<'a>(prefix: &str, s: &'a str) -> Result<&'a str> {
    s.strip_prefix(prefix)
        .ok_or_else(|| Error::prefix_mismatch(prefix, s))
}
