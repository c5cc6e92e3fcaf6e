/// Errors reported by the fallible [`Table`](crate::Table) operations.
///
/// The boolean operations ([`Table::insert`](crate::Table::insert),
/// [`Table::remove`](crate::Table::remove), ...) collapse these into
/// `true`/`false`; the `try_` and construction entry points surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A table was requested with zero slots.
    #[error("a table needs at least one slot")]
    ZeroCapacity,
    /// Every slot was probed without finding a match or a free slot.
    #[error("table is full: all {capacity} slots are occupied")]
    TableFull {
        /// Slot count of the table that refused the insert.
        capacity: usize,
    },
    /// A resize target cannot hold the entries currently in the table.
    #[error("cannot resize to {requested} slots while {live} entries are live")]
    CapacityExceeded {
        /// Number of live entries at the time of the resize.
        live: usize,
        /// Requested slot count.
        requested: usize,
    },
}
