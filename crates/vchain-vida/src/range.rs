//! Block-range computation for batched fetches.

use std::ops::RangeInclusive;

/// Maximum number of blocks fetched in a single batch.
///
/// Caps the work done per cycle when a subscription has fallen far behind
/// the chain tip (e.g. after a long pause), trading catch-up latency for
/// bounded memory and bounded per-call response size.
pub const MAX_BLOCKS_PER_BATCH: u64 = 1000;

/// Compute the next inclusive block range to fetch.
///
/// Returns `None` when the chain tip is at or behind the last checked
/// height, i.e. there is nothing new to fetch.
pub fn next_range(latest_checked: u64, chain_height: u64) -> Option<RangeInclusive<u64>> {
    if chain_height <= latest_checked {
        return None;
    }
    let from = latest_checked + 1;
    let to = chain_height.min(latest_checked.saturating_add(MAX_BLOCKS_PER_BATCH));
    Some(from..=to)
}
