//! Class merging
//!
//! Later classes win over earlier classes that set the same property under the
//! same modifiers. Classes outside every bucket never conflict; exact
//! duplicates collapse. Survivors keep the order of their first occurrence.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::bucket::BucketTable;
use crate::class_list::ClassSource;
use crate::parse::ParsedClass;

/// Global merger over the built-in bucket table
static GLOBAL: OnceLock<ClassMerger> = OnceLock::new();

/// Merges class lists against a [`BucketTable`]
#[derive(Clone, Debug)]
pub struct ClassMerger {
    table: BucketTable,
}

impl ClassMerger {
    pub fn new(table: BucketTable) -> Self {
        Self { table }
    }

    /// Merger using the built-in Tailwind-compatible table
    pub fn global() -> &'static ClassMerger {
        GLOBAL.get_or_init(|| Self::new(BucketTable::builtin().clone()))
    }

    pub fn table(&self) -> &BucketTable {
        &self.table
    }

    /// Merge every source in order; later sources take precedence
    pub fn merge<I>(&self, sources: I) -> String
    where
        I: IntoIterator,
        I::Item: ClassSource,
    {
        let mut joined = String::new();
        for source in sources {
            source.write_classes(&mut joined);
        }
        self.merge_str(&joined)
    }

    /// Merge a whitespace-separated class string
    pub fn merge_str(&self, classes: &str) -> String {
        let classes: SmallVec<[&str; 32]> = classes.split_ascii_whitespace().collect();

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut claimed: FxHashSet<String> = FxHashSet::default();
        let mut survivors: FxHashSet<&str> = FxHashSet::default();
        let mut dropped = 0usize;

        for &class in classes.iter().rev() {
            if !seen.insert(class) {
                continue;
            }
            let parsed = ParsedClass::parse(class);
            let Some(bucket) = self.table.classify_parsed(&parsed) else {
                survivors.insert(class);
                continue;
            };

            let variant = parsed.variant_key();
            let key = format!("{variant}{bucket}");
            if claimed.contains(&key) {
                dropped += 1;
                continue;
            }
            for overridden in self.table.overrides_of(&bucket) {
                claimed.insert(format!("{variant}{overridden}"));
            }
            claimed.insert(key);
            survivors.insert(class);
        }

        let mut merged = String::with_capacity(classes.iter().map(|c| c.len() + 1).sum());
        for class in &classes {
            if survivors.remove(class) {
                if !merged.is_empty() {
                    merged.push(' ');
                }
                merged.push_str(class);
            }
        }

        trace!(
            input = classes.len(),
            unique = seen.len(),
            dropped,
            "merged classes"
        );
        merged
    }
}

/// Merge with the built-in conflict table
pub fn merge<I>(sources: I) -> String
where
    I: IntoIterator,
    I::Item: ClassSource,
{
    ClassMerger::global().merge(sources)
}

/// Merge a whitespace-separated class string with the built-in conflict table
pub fn merge_str(classes: &str) -> String {
    ClassMerger::global().merge_str(classes)
}
