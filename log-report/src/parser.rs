use std::sync::LazyLock;

use regex::Regex;

use crate::invariants::{Endpoint, MinuteBucket, StatusCode};
use crate::models::ParsedLine;

const MINUTE_PREFIX_CHARS: usize = 16;

// First method keyword anywhere in the line, one whitespace character, then
// a /-leading path token. Substring match: no word boundary on the keyword.
static ENDPOINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:GET|POST|PUT|DELETE)\s(/\S*)").expect("endpoint pattern"));

// `HTTP/1.1"` marker, one whitespace character, three ASCII digits. A line
// quoting the whole request clause ends on the same `"` and matches too.
static STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"HTTP/1\.1"\s([0-9]{3})"#).expect("status pattern"));

// Never fails: malformed input just yields absent fields.
pub fn parse_line(line: &str) -> ParsedLine {
    ParsedLine {
        minute: minute_bucket(line),
        endpoint: ENDPOINT.captures(line).map(|c| Endpoint::from(&c[1])),
        status: STATUS.captures(line).map(|c| StatusCode::from(&c[1])),
    }
}

// First two whitespace-delimited tokens joined by a single space, truncated
// to 16 characters. Missing tokens count as empty strings, so every line
// maps to some bucket.
fn minute_bucket(line: &str) -> MinuteBucket {
    let mut tokens = line.split_whitespace();
    let date = tokens.next().unwrap_or_default();
    let time = tokens.next().unwrap_or_default();
    let stamp: String = format!("{date} {time}").chars().take(MINUTE_PREFIX_CHARS).collect();
    MinuteBucket::from(stamp)
}
