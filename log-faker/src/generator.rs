use chrono::{DateTime, Local};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 7), ("POST", 3), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 6] = [
    ("/users", 30),
    ("/orders", 20),
    ("/login", 15),
    ("/search", 10),
    ("/health", 5),
    ("status", 2),
];
const STATUS: [(u16, u8); 7] = [
    (200, 60),
    (201, 8),
    (301, 4),
    (400, 6),
    (401, 5),
    (404, 25),
    (500, 3),
];
const SERVICE: [(&str, u8); 4] = [("users", 10), ("search", 6), ("checkout", 4), ("billing", 2)];
const LEVEL: [(&str, u8); 3] = [("INFO", 40), ("WARN", 8), ("ERROR", 2)];
const MESSAGE: [(&str, u8); 5] = [
    ("Request completed", 40),
    ("Session expired", 8),
    ("Slow query", 6),
    ("Retrying upstream call", 4),
    ("Rate limit hit", 3),
];

pub fn access_line<R: Rng + ?Sized>(rng: &mut R, at: DateTime<Local>) -> String {
    let timestamp = at.format("%Y-%m-%d %H:%M:%S");
    let method = METHODS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..2000);

    format!("{timestamp} \"{method} {path} HTTP/1.1\" {status} {size}")
}

pub fn json_line<R: Rng + ?Sized>(rng: &mut R, at: DateTime<Local>) -> String {
    let ts = at.to_rfc3339();
    let service = SERVICE.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let level = LEVEL.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let msg = MESSAGE.choose_weighted(rng, |(_, w)| *w).unwrap().0;

    format!("{{\"ts\":\"{ts}\",\"service\":\"{service}\",\"level\":\"{level}\",\"msg\":\"{msg}\"}}")
}
