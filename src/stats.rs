use alloc::vec::Vec;

/// Slot-state census and probe-length histogram of a
/// [`Table`](crate::Table).
///
/// Produced by [`Table::probe_stats`](crate::Table::probe_stats). The probe
/// length of an entry is its distance, in slots, from its home slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeStats {
    /// Total number of slots.
    pub capacity: usize,
    /// Slots holding a live entry.
    pub occupied: usize,
    /// Slots left behind by removals.
    pub tombstones: usize,
    /// Slots never used since the last clear or resize.
    pub empty: usize,
    /// `histogram[d]` is the number of entries stored `d` slots past their
    /// home slot.
    pub histogram: Vec<usize>,
}

impl ProbeStats {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            occupied: 0,
            tombstones: 0,
            empty: 0,
            histogram: Vec::new(),
        }
    }

    pub(crate) fn record_probe(&mut self, distance: usize) {
        self.occupied += 1;
        if self.histogram.len() <= distance {
            self.histogram.resize(distance + 1, 0);
        }
        self.histogram[distance] += 1;
    }

    /// Fraction of slots holding a live entry.
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.occupied as f64 / self.capacity as f64
        }
    }

    /// Longest distance of any entry from its home slot.
    pub fn max_probe(&self) -> usize {
        self.histogram.len().saturating_sub(1)
    }

    /// Mean distance of the live entries from their home slots.
    pub fn mean_probe(&self) -> f64 {
        if self.occupied == 0 {
            return 0.0;
        }

        let total: usize = self
            .histogram
            .iter()
            .enumerate()
            .map(|(distance, count)| distance * count)
            .sum();
        total as f64 / self.occupied as f64
    }

    /// Pretty-print the statistics and a horizontal histogram to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Table Probe Statistics ===");
        println!(
            "Slots: {} ({} occupied, {} tombstones, {} empty)",
            self.capacity, self.occupied, self.tombstones, self.empty
        );
        println!("Load factor: {:.2}%", self.load_factor() * 100.0);
        println!(
            "Probe length: mean {:.2}, max {}",
            self.mean_probe(),
            self.max_probe()
        );

        let max = self.histogram.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        for (distance, &count) in self.histogram.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>4} | {} ({})", distance, "█".repeat(width), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Table;
    use crate::strategy::IdentityHash;
    use crate::strategy::IntEq;
    use crate::strategy::ToOwnedAllocator;

    #[test]
    fn census_and_histogram() {
        let mut table: Table<u64, u64, _, _, _> =
            Table::new(8, IdentityHash, IntEq, ToOwnedAllocator).unwrap();
        // 0 and 8 share home slot 0, 16 lands two slots past it.
        for k in [0u64, 8, 16, 5] {
            assert!(table.insert(&k, &k));
        }
        assert!(table.remove(&8));

        let stats = table.probe_stats();
        assert_eq!(stats.capacity, 8);
        assert_eq!(stats.occupied, 3);
        assert_eq!(stats.tombstones, 1);
        assert_eq!(stats.empty, 4);
        assert_eq!(stats.histogram, [2, 0, 1]);
        assert_eq!(stats.max_probe(), 2);
        assert!((stats.mean_probe() - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.load_factor() - 3.0 / 8.0).abs() < 1e-9);

        #[cfg(feature = "std")]
        stats.print();
    }

    #[test]
    fn empty_table_stats() {
        let table: Table<u64, u64, _, _, _> =
            Table::new(4, IdentityHash, IntEq, ToOwnedAllocator).unwrap();
        let stats = table.probe_stats();
        assert_eq!(stats.empty, 4);
        assert_eq!(stats.max_probe(), 0);
        assert_eq!(stats.mean_probe(), 0.0);
        assert!(stats.histogram.is_empty());
    }
}
