use serde::Deserialize;
use std::collections::HashMap;

/// Order in which categories are listed in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Most recently introduced category first.
    #[default]
    Newest,
    /// Categories in the order they first appeared in the input.
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub category: String,
    pub total_cents: i64,
}

/// Running signed totals per category.
///
/// Buckets are kept in first-seen order; the index maps a category name to its slot.
#[derive(Debug, Default)]
pub struct Ledger {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `cents` to the bucket for `category`, creating it on first sight.
    /// Names are compared exactly (case-sensitive).
    pub fn add_entry(&mut self, category: &str, cents: i64) {
        if let Some(&slot) = self.index.get(category) {
            let bucket = &mut self.buckets[slot];
            bucket.total_cents = bucket.total_cents.saturating_add(cents);
            return;
        }

        self.index.insert(category.to_string(), self.buckets.len());
        self.buckets.push(Bucket {
            category: category.to_string(),
            total_cents: cents,
        });
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<i64> {
        self.index
            .get(category)
            .map(|&slot| self.buckets[slot].total_cents)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self, order: Order) -> Box<dyn Iterator<Item = &Bucket> + '_> {
        match order {
            Order::Newest => Box::new(self.buckets.iter().rev()),
            Order::FirstSeen => Box::new(self.buckets.iter()),
        }
    }

    pub fn totals(&self) -> Totals {
        Totals::from_buckets(self.buckets.iter())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all bucket totals >= 0.
    pub positive_cents: i64,
    /// Sum of all bucket totals < 0.
    pub negative_cents: i64,
}

impl Totals {
    pub fn from_buckets<'a>(buckets: impl IntoIterator<Item = &'a Bucket>) -> Self {
        let mut totals = Self::default();
        for b in buckets {
            if b.total_cents >= 0 {
                totals.positive_cents = totals.positive_cents.saturating_add(b.total_cents);
            } else {
                totals.negative_cents = totals.negative_cents.saturating_add(b.total_cents);
            }
        }
        totals
    }

    pub fn net_cents(&self) -> i64 {
        self.positive_cents.saturating_add(self.negative_cents)
    }
}
