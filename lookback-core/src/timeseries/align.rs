use chrono::NaiveDate;

use crate::date::normalize_date;
use crate::types::{
    AlignedActual, AlignedSeries, AlignedWindow, HistoricalPoint, SeriesEntry, as_gap,
    as_zero_filled,
};

/// Where the exit date landed in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitLocation {
    /// Zero-based index of the last point dated at or before the exit date;
    /// under fail-open, the last valid index of the series.
    pub index: usize,
    /// True when no point satisfied the exit bound and the full series was
    /// used instead.
    pub fail_open: bool,
}

/// Locate the last point whose date is at or before `exit_date`.
///
/// Points are expected in ascending date order; the scan tracks the last
/// satisfying index, so irregular or repeated periods still resolve to the
/// rightmost qualifying point. Points with unparseable dates never qualify.
///
/// If the exit date precedes all data, the location fails open to the last
/// valid index — the chart shows all available data rather than erroring.
/// An empty series fails open to index 0; slicing with it yields an empty
/// window.
///
/// Points are few at the observed annual cadence, so this is a linear scan;
/// the ascending order would equally admit a binary search.
#[must_use]
pub fn locate_exit_index(points: &[HistoricalPoint], exit_date: NaiveDate) -> ExitLocation {
    let mut last_within: Option<usize> = None;
    for (i, point) in points.iter().enumerate() {
        if let Some(day) = normalize_date(&point.date).day() {
            if day <= exit_date {
                last_within = Some(i);
            }
        }
    }
    match last_within {
        Some(index) => ExitLocation {
            index,
            fail_open: false,
        },
        None => ExitLocation {
            index: points.len().saturating_sub(1),
            fail_open: true,
        },
    }
}

/// Build the bounded, labeled window for a table of series.
///
/// `entries` is the base-adjusted table in payload order; the first entry is
/// the reference series whose dates label the window. Labels cover points
/// `[0, exit_index]` inclusive. Every series is sliced independently to the
/// same bound, or to its own length if shorter: ragged series truncate, they
/// are never padded and never cause an error.
///
/// Values are gap-preserving: `null` and non-numeric raw values become
/// `None` and render as gaps.
///
/// Pure: identical inputs produce identical output.
#[must_use]
pub fn build_window(entries: &[&SeriesEntry], exit_index: usize) -> AlignedWindow {
    let Some(reference) = entries.first() else {
        return AlignedWindow::default();
    };
    let end = exit_index.saturating_add(1);

    let labels: Vec<String> = reference
        .historical_data
        .iter()
        .take(end)
        .map(|p| normalize_date(&p.date).year_label())
        .collect();

    let series: Vec<AlignedSeries> = entries
        .iter()
        .map(|entry| AlignedSeries {
            name: entry.index_name.clone(),
            values: entry
                .historical_data
                .iter()
                .take(end)
                .map(|p| as_gap(p.value.as_ref()))
                .collect(),
        })
        .collect();

    AlignedWindow { labels, series }
}

/// Slice the actual-values table to the same window, zero-filled.
///
/// Monetary context: displays built from these values require a number, so
/// `null` and non-numeric raw values become `0.0` here, in contrast to the
/// gap-preserving [`build_window`].
#[must_use]
pub fn actual_values(entries: &[&SeriesEntry], exit_index: usize) -> Vec<AlignedActual> {
    let end = exit_index.saturating_add(1);
    entries
        .iter()
        .map(|entry| AlignedActual {
            name: entry.index_name.clone(),
            values: entry
                .historical_data
                .iter()
                .take(end)
                .map(|p| as_zero_filled(p.value.as_ref()))
                .collect(),
        })
        .collect()
}
