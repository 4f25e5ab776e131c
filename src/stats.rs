use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

/// Ordering applied between domains with equal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Equal counts keep whatever order the table yields; may differ between runs.
    #[default]
    Unspecified,
    /// Equal counts are ordered by domain name, ascending.
    DomainAscending,
}

/// Running per-domain counts for a single import.
#[derive(Debug, Default)]
pub struct DomainCounter {
    counts: HashMap<String, u64>,
    total: u64,
}

impl DomainCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, domain: &str) {
        // Only allocate the key the first time a domain shows up
        match self.counts.get_mut(domain) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(domain.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Number of records counted so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn unique_domains(&self) -> usize {
        self.counts.len()
    }

    /// Consumes the table, returning entries sorted by count descending.
    pub fn into_sorted(self, tie_break: TieBreak) -> Vec<DomainCount> {
        let mut sorted: Vec<DomainCount> = self
            .counts
            .into_iter()
            .map(|(domain, count)| DomainCount { domain, count })
            .collect();

        match tie_break {
            TieBreak::Unspecified => sorted.sort_unstable_by(|a, b| b.count.cmp(&a.count)),
            TieBreak::DomainAscending => sorted
                .sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain))),
        }

        sorted
    }
}
