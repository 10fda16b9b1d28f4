use std::collections::HashMap;

use crate::invariants::{Endpoint, MinuteBucket, StatusCode};
use crate::models::ParsedLine;

// Tables only grow; nothing is evicted or reset during a run.
#[derive(Debug, Default)]
pub struct Summary {
    endpoints: HashMap<Endpoint, u64>,
    statuses: HashMap<StatusCode, u64>,
    minutes: HashMap<MinuteBucket, u64>,
}

impl Summary {
    // Always one minute increment; endpoint and status only when present.
    pub fn record(&mut self, parsed: ParsedLine) {
        *self.minutes.entry(parsed.minute).or_default() += 1;
        if let Some(endpoint) = parsed.endpoint {
            *self.endpoints.entry(endpoint).or_default() += 1;
        }
        if let Some(status) = parsed.status {
            *self.statuses.entry(status).or_default() += 1;
        }
    }

    pub fn endpoint_counts(&self) -> Vec<(Endpoint, u64)> {
        by_count_desc(&self.endpoints)
    }

    pub fn status_counts(&self) -> Vec<(StatusCode, u64)> {
        by_count_desc(&self.statuses)
    }

    pub fn minute_counts(&self) -> Vec<(MinuteBucket, u64)> {
        let mut rows: Vec<_> = self.minutes.iter().map(|(k, n)| (k.clone(), *n)).collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        rows
    }
}

fn by_count_desc<K: Clone + Ord>(table: &HashMap<K, u64>) -> Vec<(K, u64)> {
    let mut rows: Vec<_> = table.iter().map(|(k, n)| (k.clone(), *n)).collect();
    rows.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}
