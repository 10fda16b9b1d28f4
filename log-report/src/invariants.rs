use derive_more::{Debug, Display, From};

#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[from(forward)]
pub struct Endpoint(String);

#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[from(forward)]
pub struct StatusCode(String);

#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[from(forward)]
pub struct MinuteBucket(String);
