use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::id::{marker::AnyMarker, Id};

// 2024-01-01T00:00:00Z. Keeps the millisecond component small enough
// that ids stay well inside the 52 bits of shifted range.
const ID_EPOCH_MILLIS: i64 = 1_704_067_200_000;

const SEQUENCE_BITS: u64 = 12;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

/// Generates unique, time-ordered record ids: milliseconds since the
/// service epoch in the high bits, a wrapping per-process sequence in
/// the low [`SEQUENCE_BITS`].
#[derive(Debug, Default)]
pub struct Snowflake {
    sequence: AtomicU64,
}

impl Snowflake {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::cast_sign_loss)]
    pub fn next_id(&self) -> Id<AnyMarker> {
        // clamped below by 1, so the shifted value is never zero
        let millis = (Utc::now().timestamp_millis() - ID_EPOCH_MILLIS).max(1) as u64;
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) & SEQUENCE_MASK;

        Id::new((millis << SEQUENCE_BITS) | sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::Snowflake;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_within_a_burst() {
        let snowflake = Snowflake::new();
        let ids: HashSet<u64> = (0..512).map(|_| snowflake.next_id().get()).collect();
        assert_eq!(ids.len(), 512);
    }

    #[test]
    fn ids_order_by_time() {
        let snowflake = Snowflake::new();
        let first = snowflake.next_id().get();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = snowflake.next_id().get();
        assert!(second > first);
    }
}
