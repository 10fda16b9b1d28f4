use crate::invariants::{Endpoint, MinuteBucket, StatusCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub minute: MinuteBucket,
    pub endpoint: Option<Endpoint>,
    pub status: Option<StatusCode>,
}
