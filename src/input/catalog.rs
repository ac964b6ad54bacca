use std::collections::BTreeMap;

use crate::model::lookup::PercentileLookupTable;
use crate::model::scores::ExamSitting;

/// Percentile lookup tables keyed by exam sitting.
#[derive(Debug, Clone, Default)]
pub struct TableCatalog {
    tables: BTreeMap<ExamSitting, PercentileLookupTable>,
}

impl TableCatalog {
    /// Later tables for the same sitting replace earlier ones.
    pub fn new(tables: Vec<PercentileLookupTable>) -> Self {
        let mut map = BTreeMap::new();
        for table in tables {
            if map.contains_key(&table.sitting) {
                tracing::warn!(
                    sitting = %table.sitting,
                    "duplicate lookup table; keeping the last one"
                );
            }
            map.insert(table.sitting, table);
        }
        Self { tables: map }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get(&self, sitting: ExamSitting) -> Option<&PercentileLookupTable> {
        self.tables.get(&sitting)
    }

    pub fn most_recent(&self) -> Option<&PercentileLookupTable> {
        self.tables.last_key_value().map(|(_, table)| table)
    }

    /// The requested sitting when present, otherwise the most recent available one.
    pub fn select_sitting(&self, requested: ExamSitting) -> Option<&PercentileLookupTable> {
        self.get(requested).or_else(|| self.most_recent())
    }

    /// Requested sitting first (if present), then every other sitting from most recent to oldest.
    pub fn fallback_order(&self, requested: ExamSitting) -> Vec<&PercentileLookupTable> {
        let mut out = Vec::with_capacity(self.tables.len());
        if let Some(table) = self.get(requested) {
            out.push(table);
        }
        out.extend(
            self.tables
                .values()
                .rev()
                .filter(|table| table.sitting != requested),
        );
        out
    }
}
