use serde::{Deserialize, Serialize};

use crate::salary::Listing;

/// Per-keyword result of a scrape
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordStats {
    /// Total reported by the job board, not the number of listings seen
    pub found: u64,
    pub processed: u64,
    pub average_salary: u64,
}

/// Running totals for one keyword, folded into a `KeywordStats` once the
/// keyword is done
#[derive(Debug)]
pub struct Aggregator {
    found: u64,
    processed: u64,
    total: u128,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            found: 0,
            processed: 0,
            total: 0,
        }
    }

    pub fn set_found(&mut self, found: u64) {
        self.found = found;
    }

    pub fn record(&mut self, estimate: Option<u64>) {
        if let Some(salary) = estimate {
            self.processed += 1;
            self.total += salary as u128;
        }
    }

    pub fn record_listings<L: Listing>(&mut self, listings: &[L]) {
        for listing in listings {
            self.record(listing.expected_salary());
        }
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn finish(self) -> KeywordStats {
        let average_salary = match self.processed {
            0 => 0,
            processed => (self.total / processed as u128) as u64,
        };
        KeywordStats {
            found: self.found,
            processed: self.processed,
            average_salary,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword stats of a single source, kept in the order keywords were scraped
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsTable {
    rows: Vec<(String, KeywordStats)>,
}

impl StatsTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Replaces the stats of a keyword that is already present, keeping its position
    pub fn insert(&mut self, keyword: impl Into<String>, stats: KeywordStats) {
        let keyword = keyword.into();
        match self.rows.iter_mut().find(|(k, _)| *k == keyword) {
            Some((_, existing)) => *existing = stats,
            None => self.rows.push((keyword, stats)),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordStats> {
        self.rows
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeywordStats)> {
        self.rows.iter().map(|(k, stats)| (k.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
