//! RFC 5988 `Link` header parsing

use std::collections::HashMap;

/// Parse a `Link` header into a relation → URL map.
///
/// Format: `<https://api.github.com/...?page=2>; rel="next", <...>; rel="last"`.
/// A `rel` holding several space-separated relations maps each of them to the
/// same URL. Relation names are lowercased; the last occurrence of a relation
/// wins. Entries without a `rel` parameter are skipped.
pub fn parse_link_header(header: &str) -> HashMap<String, String> {
    let mut links = HashMap::new();
    let mut rest = header;

    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('>') else {
            break;
        };
        let url = after[..end].trim();
        let tail = &after[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());

        for segment in tail[..params_end].split(';') {
            let segment = segment.trim().trim_end_matches(',').trim();
            let Some((name, value)) = segment.split_once('=') else {
                continue;
            };
            if !name.trim().eq_ignore_ascii_case("rel") {
                continue;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            for rel in value.split_whitespace() {
                links.insert(rel.to_ascii_lowercase(), url.to_string());
            }
        }

        rest = &tail[params_end..];
    }

    links
}
