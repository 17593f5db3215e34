//! Verdict aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CheckerItem;

/// Summary statistics over a batch of evaluated items.
///
/// The three counters are disjoint: an item is valid, warned (still active
/// but carrying diagnostics from a soft failure), or invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub valid: u32,
    pub warned: u32,
    pub invalid: u32,
    pub total: u32,
}

impl BatchSummary {
    /// Compute the summary of a batch of evaluated items.
    pub fn from_items(items: &[CheckerItem]) -> Self {
        let mut summary = BatchSummary::default();

        for item in items {
            summary.total += 1;
            if !item.active {
                summary.invalid += 1;
            } else if item.message.is_some() {
                summary.warned += 1;
            } else {
                summary.valid += 1;
            }
        }

        summary
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} valid, {} warned, {} invalid ({} total)",
            self.valid, self.warned, self.invalid, self.total
        )
    }
}
