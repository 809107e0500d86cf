//! Compiled-in conversion tables and the two lookup disciplines used over them.
//!
//! Dense tables are indexed directly by raw score. Sparse tables hold ascending
//! breakpoints and are searched for the nearest key. Each table carries its own
//! floor value, returned only when the table has nothing to offer.

pub mod lsat;
pub mod sat;
pub mod uk;

/// Lowest scaled score a SAT section table can produce.
pub const SAT_SECTION_FLOOR: u16 = 200;
/// Lowest LSAT scaled score.
pub const LSAT_SCALED_FLOOR: u16 = 120;
/// Fallback for every percentile table.
pub const PERCENTILE_FLOOR: u8 = 0;
/// Fallback for the SAT to ACT concordance.
pub const ACT_FLOOR: u8 = 1;

/// A table keyed by every raw score from zero to its last index.
#[derive(Debug, Clone, Copy)]
pub struct DenseTable<T: 'static = u16> {
    pub name: &'static str,
    values: &'static [T],
    floor: T,
}

impl<T: Copy> DenseTable<T> {
    pub const fn new(name: &'static str, values: &'static [T], floor: T) -> Self {
        Self {
            name,
            values,
            floor,
        }
    }

    /// Largest key with an entry, or `None` for an empty table.
    pub fn max_key(&self) -> Option<usize> {
        self.values.len().checked_sub(1)
    }

    pub fn floor(&self) -> T {
        self.floor
    }

    pub fn values(&self) -> &'static [T] {
        self.values
    }

    /// Direct lookup. Keys past the end clamp to the last entry.
    pub fn lookup(&self, key: usize) -> T {
        match self.max_key() {
            Some(max) => {
                if key > max {
                    log::warn!(
                        "{}: key {} exceeds table maximum {}, clamping",
                        self.name,
                        key,
                        max
                    );
                }
                self.values[key.min(max)]
            }
            None => self.floor,
        }
    }
}

/// Ascending breakpoint table searched by nearest key.
#[derive(Debug, Clone, Copy)]
pub struct SparseTable {
    pub name: &'static str,
    entries: &'static [(u16, u8)],
    floor: u8,
}

impl SparseTable {
    pub const fn new(name: &'static str, entries: &'static [(u16, u8)], floor: u8) -> Self {
        Self {
            name,
            entries,
            floor,
        }
    }

    pub fn entries(&self) -> &'static [(u16, u8)] {
        self.entries
    }

    /// Value at the key closest to `value`.
    ///
    /// Entries are scanned in ascending key order and a candidate only replaces
    /// the current best when strictly closer, so an exact tie resolves to the
    /// lower key.
    pub fn nearest(&self, value: u16) -> u8 {
        let mut best: Option<(u16, u8)> = None;
        for &(key, mapped) in self.entries {
            let distance = key.abs_diff(value);
            match best {
                Some((best_distance, _)) if distance >= best_distance => {}
                _ => best = Some((distance, mapped)),
            }
        }
        best.map_or(self.floor, |(_, mapped)| mapped)
    }
}

#[cfg(test)]
pub(crate) fn assert_non_decreasing<T: PartialOrd + std::fmt::Debug>(name: &str, values: &[T]) {
    for pair in values.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "{name}: {:?} followed by {:?}",
            pair[0],
            pair[1]
        );
    }
}
