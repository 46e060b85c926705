use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Per-route request counts since startup.
#[derive(Debug, Default)]
pub struct Counters {
    hits: Mutex<BTreeMap<String, u64>>,
}

impl Counters {
    pub fn record(&self, route: &str) {
        let mut hits = self.hits.lock().unwrap_or_else(PoisonError::into_inner);
        *hits.entry(route.to_string()).or_insert(0) += 1;
    }

    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.hits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
