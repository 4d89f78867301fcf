use crate::models::{ClassifiedShift, Summary};
use std::collections::BTreeSet;

/// Summary contribution of a single classified shift.
pub fn summarize_shift(shift: &ClassifiedShift) -> Summary {
    Summary {
        totals: shift.bucket,
        worked_dates: BTreeSet::from([shift.record.date]),
        shifts: 1,
        declared_minutes: shift.record.declared_minutes,
    }
}

/// Sums all buckets and counts distinct worked dates. Each shift is mapped
/// on its own and partial summaries are merged, so any evaluation order
/// gives the same result.
pub fn aggregate(shifts: &[ClassifiedShift]) -> Summary {
    shifts
        .iter()
        .map(summarize_shift)
        .fold(Summary::default(), Summary::merge)
}
