//! Exhaustive preimage search over the full 32-bit word domain.
//!
//! Every value in `[0, 0xFFFFFFFF]` is independent under [`mix`], so the
//! domain is partitioned into contiguous spans and searched one rayon task
//! per span. Each span produces its own candidate vector; the per-span
//! vectors are concatenated in span order, which keeps the merged result
//! in ascending enumeration order.

use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::hash::mix;

/// Number of spans the full domain is split into for the parallel search.
/// Well above any realistic core count so rayon can balance the load.
pub const DEFAULT_SPANS: u32 = 1024;

/// How many enumeration steps a span worker runs between cancellation
/// checks.
const CANCEL_CHECK_INTERVAL: u64 = 1 << 16;

/// Result of a cancellable search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The whole domain was enumerated; the candidate set is exhaustive.
    Complete(Vec<u32>),
    /// The search was cancelled; the partial candidate set gathered so far
    /// is returned and the caller decides whether to keep or discard it.
    Cancelled(Vec<u32>),
}

impl SearchOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, SearchOutcome::Complete(_))
    }

    /// Consume the outcome and return whatever candidates were gathered.
    pub fn candidates(self) -> Vec<u32> {
        match self {
            SearchOutcome::Complete(c) | SearchOutcome::Cancelled(c) => c,
        }
    }
}

/// Partition the full word domain into `parts` contiguous inclusive
/// ranges that cover `[0, 0xFFFFFFFF]` exactly once.
///
/// The arithmetic runs in u64 because the domain size, 2^32, does not fit
/// in the word type itself.
pub fn spans(parts: u32) -> Vec<RangeInclusive<u32>> {
    let parts = parts.max(1) as u64;
    let total: u64 = 1 << 32;
    let base = total / parts;
    let rem = total % parts;

    let mut out = Vec::with_capacity(parts as usize);
    let mut start: u64 = 0;
    for i in 0..parts {
        let len = base + u64::from(i < rem);
        let end = start + len - 1;
        out.push(start as u32..=end as u32);
        start = end + 1;
    }
    out
}

/// Enumerate one contiguous span in ascending order and collect every
/// word whose [`mix`] equals `target`.
///
/// This is the single-threaded worker primitive behind
/// [`find_preimages`]; it is public so callers and tests can search a
/// restricted domain directly. The loop counter is a u64 so the inclusive
/// upper bound `0xFFFFFFFF` is visited and the loop still terminates
/// without a wraparound special case.
pub fn find_preimages_in_range(target: u32, range: RangeInclusive<u32>) -> Vec<u32> {
    let (found, _) = search_span(target, range, None);
    found
}

fn search_span(
    target: u32,
    range: RangeInclusive<u32>,
    cancel: Option<&AtomicBool>,
) -> (Vec<u32>, bool) {
    let mut found = Vec::new();
    let start = u64::from(*range.start());
    let end = u64::from(*range.end());

    for w in start..=end {
        if let Some(flag) = cancel {
            if (w - start) % CANCEL_CHECK_INTERVAL == 0 && flag.load(Ordering::Relaxed) {
                return (found, true);
            }
        }
        if mix(w as u32) == target {
            found.push(w as u32);
        }
    }
    (found, false)
}

/// Find every word in `[0, 0xFFFFFFFF]` whose [`mix`] equals `target`,
/// in ascending order.
///
/// The search always runs to exhaustion; it never stops at the first
/// match. Total work is 2^32 transform applications, spread across the
/// rayon pool.
pub fn find_preimages(target: u32) -> Vec<u32> {
    // No cancel token, so the outcome is always Complete.
    find_preimages_with(target, None).candidates()
}

/// Cancellable variant of [`find_preimages`].
///
/// When `cancel` is set to `true` while the search is running, workers
/// stop at their next check and the partial candidate set is returned as
/// [`SearchOutcome::Cancelled`]; nothing gathered so far is lost.
pub fn find_preimages_with(target: u32, cancel: Option<&AtomicBool>) -> SearchOutcome {
    let results: Vec<(Vec<u32>, bool)> = spans(DEFAULT_SPANS)
        .into_par_iter()
        .map(|span| search_span(target, span, cancel))
        .collect();

    let cancelled = results.iter().any(|(_, c)| *c);
    let mut merged = Vec::new();
    for (partial, _) in results {
        merged.extend(partial);
    }

    if cancelled {
        SearchOutcome::Cancelled(merged)
    } else {
        SearchOutcome::Complete(merged)
    }
}
