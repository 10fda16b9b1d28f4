use num_format::{Locale, ToFormattedString};

use crate::summary::Summary;

const COUNT_HEADER: &str = "Count";

// Pure formatting; printing stays with the caller.
pub fn render(summary: &Summary) -> String {
    let mut out = String::new();
    table(&mut out, "Endpoint Counts:", "Endpoint", rows(summary.endpoint_counts()));
    out.push('\n');
    table(
        &mut out,
        "Total API Calls per HTTP Status Code:",
        "Status Code",
        rows(summary.status_counts()),
    );
    out.push('\n');
    table(&mut out, "API Calls per Minute:", "Minute", rows(summary.minute_counts()));
    out
}

fn rows<K: ToString>(entries: Vec<(K, u64)>) -> Vec<(String, String)> {
    entries
        .into_iter()
        .map(|(key, count)| (key.to_string(), count.to_formatted_string(&Locale::en)))
        .collect()
}

fn table(out: &mut String, heading: &str, key_header: &str, rows: Vec<(String, String)>) {
    let mut key_width = key_header.chars().count();
    let mut count_width = COUNT_HEADER.len();
    for (key, count) in &rows {
        key_width = key_width.max(key.chars().count());
        count_width = count_width.max(count.len());
    }

    out.push_str(heading);
    out.push('\n');
    out.push_str(&format!("{key_header:<key_width$}  {COUNT_HEADER:>count_width$}\n"));
    for (key, count) in &rows {
        out.push_str(&format!("{key:<key_width$}  {count:>count_width$}\n"));
    }
}
