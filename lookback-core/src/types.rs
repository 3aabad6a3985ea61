//! Payload types delivered by the data endpoint and the derived, ephemeral
//! structures the aligner produces from them.

use serde::{Deserialize, Serialize};

/// A date value as delivered by the endpoint, before normalization.
///
/// Production payloads mix two encodings across tables: a spreadsheet serial
/// day count (days since 1899-12-30) and a textual `YYYY-MM-DD` date. Both
/// must resolve to the same calendar date; see [`crate::date::normalize_date`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// Serial day count since the spreadsheet epoch. Fractional parts carry
    /// intraday time and are ignored for calendar alignment.
    Serial(f64),
    /// Textual date, expected `YYYY-MM-DD`.
    Text(String),
}

/// A numeric value as delivered by the endpoint, before coercion.
///
/// The endpoint emits plain numbers for some tables and decimal strings for
/// others. Coercion is contextual: chart data preserves gaps
/// ([`RawValue::as_gap`] via `Option`), monetary/computed contexts zero-fill
/// ([`RawValue::as_zero_filled`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// JSON number.
    Number(f64),
    /// Decimal rendered as a string.
    Text(String),
}

impl RawValue {
    /// Parse to a float, `None` when non-numeric.
    #[must_use]
    pub fn parsed(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

/// Gap-preserving coercion for an optional raw value: `null` and non-numeric
/// inputs become `None` and render as chart gaps.
#[must_use]
pub fn as_gap(value: Option<&RawValue>) -> Option<f64> {
    value.and_then(RawValue::parsed)
}

/// Zero-filling coercion for an optional raw value: `null` and non-numeric
/// inputs become `0.0`. Used for monetary and computed-metric contexts that
/// require a numeric display.
#[must_use]
pub fn as_zero_filled(value: Option<&RawValue>) -> f64 {
    as_gap(value).unwrap_or(0.0)
}

/// One observation in a series: a date and an optional value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Observation date in one of the two raw encodings.
    pub date: RawDate,
    /// Observation value; `None` is a genuine gap in the source data.
    #[serde(default)]
    pub value: Option<RawValue>,
}

/// Logical table a series belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TableKind {
    /// Normalized growth, base = 100 at the first period.
    BaseAdjusted,
    /// Raw, unrescaled index levels.
    Actual,
    /// A table tag this version does not know. Entries under it are skipped
    /// with a diagnostic; the endpoint is external and may grow.
    Other(String),
}

impl TableKind {
    /// Wire tag of the base-adjusted table.
    pub const BASE_ADJUSTED: &'static str = "Base Adjusted Values";
    /// Wire tag of the actual-values table.
    pub const ACTUAL: &'static str = "Actual Values";
}

impl From<String> for TableKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::BASE_ADJUSTED => Self::BaseAdjusted,
            Self::ACTUAL => Self::Actual,
            _ => Self::Other(s),
        }
    }
}

impl From<TableKind> for String {
    fn from(kind: TableKind) -> Self {
        match kind {
            TableKind::BaseAdjusted => TableKind::BASE_ADJUSTED.to_string(),
            TableKind::Actual => TableKind::ACTUAL.to_string(),
            TableKind::Other(s) => s,
        }
    }
}

/// One named series within one table, points ordered by ascending date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Table this series belongs to.
    pub table: TableKind,
    /// Series name, unique within its table.
    #[serde(rename = "indexName")]
    pub index_name: String,
    /// Ordered observations, one per period (yearly cadence observed).
    #[serde(rename = "historicalData")]
    pub historical_data: Vec<HistoricalPoint>,
}

/// Echo of the request window, returned by calculation responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEcho {
    /// Start date exactly as submitted.
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date exactly as submitted.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Full decoded endpoint body.
///
/// The overview fetch carries only `data`; calculation responses add the IRR
/// summary fields and an input echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicesPayload {
    /// All series across both tables.
    pub data: Vec<SeriesEntry>,
    /// Investment horizon length in years, when calculated.
    #[serde(default)]
    pub years: Option<RawValue>,
    /// Internal rate of return in percent, when calculated.
    #[serde(default)]
    pub calculated_irr: Option<RawValue>,
    /// Projected value of the investment at exit, when calculated.
    #[serde(default)]
    pub value_of_investment: Option<RawValue>,
    /// Echo of the submitted window, when present.
    #[serde(default)]
    pub input: Option<RequestEcho>,
}

impl IndicesPayload {
    /// All entries of the given table, in payload order.
    pub fn table(&self, kind: &TableKind) -> impl Iterator<Item = &SeriesEntry> {
        self.data.iter().filter(move |e| e.table == *kind)
    }

    /// Entries of the base-adjusted table, in payload order.
    pub fn base_adjusted(&self) -> Vec<&SeriesEntry> {
        self.table(&TableKind::BaseAdjusted).collect()
    }

    /// Entries of the actual-values table, in payload order.
    pub fn actual(&self) -> Vec<&SeriesEntry> {
        self.table(&TableKind::Actual).collect()
    }

    /// Display metrics of a calculation response, zero-filled when absent.
    #[must_use]
    pub fn irr_summary(&self) -> IrrSummary {
        IrrSummary {
            years: as_zero_filled(self.years.as_ref()),
            calculated_irr: as_zero_filled(self.calculated_irr.as_ref()),
            value_of_investment: as_zero_filled(self.value_of_investment.as_ref()),
        }
    }
}

/// Display metrics of a completed calculation. Monetary context: absent or
/// non-numeric inputs are zero-filled, never gaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IrrSummary {
    /// Investment horizon length in years.
    pub years: f64,
    /// Internal rate of return, percent.
    pub calculated_irr: f64,
    /// Projected exit value of the principal.
    pub value_of_investment: f64,
}

/// One aligned series inside an [`AlignedWindow`]: gap-preserving values.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    /// Series name as it appeared in the payload.
    pub name: String,
    /// Values sliced to the window; `None` renders as a gap.
    pub values: Vec<Option<f64>>,
}

/// One aligned series in the monetary (zero-filled) projection of the
/// actual-values table.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedActual {
    /// Series name as it appeared in the payload.
    pub name: String,
    /// Values sliced to the window, zero-filled.
    pub values: Vec<f64>,
}

/// The bounded, labeled data window shared by all chart series.
///
/// Derived and ephemeral: produced fresh per request, owned solely by the
/// rendering session that requested it, and replaced wholesale on the next
/// request. Every value array is `labels.len()` long, or shorter only when
/// its source series is itself shorter (ragged truncation, never padding).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedWindow {
    /// Period labels, left edge to the exit period inclusive.
    pub labels: Vec<String>,
    /// Aligned series in payload order.
    pub series: Vec<AlignedSeries>,
}

impl AlignedWindow {
    /// Look up a series by name.
    #[must_use]
    pub fn series_by_name(&self, name: &str) -> Option<&AlignedSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

/// One series handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSeries {
    /// Series name, also the legend label.
    pub name: String,
    /// Window-aligned values; `None` renders as a gap.
    pub values: Vec<Option<f64>>,
    /// Whether the series is currently in the display selection.
    pub visible: bool,
    /// Whether the series is the user's selected one and should be drawn
    /// with emphasis.
    pub emphasized: bool,
}

/// Everything the rendering collaborator needs for one draw.
///
/// The renderer owns color assignment, animation, and legend construction;
/// nothing presentational appears here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderModel {
    /// Shared x-axis labels.
    pub labels: Vec<String>,
    /// All series, visible and hidden, in window order.
    pub series: Vec<RenderSeries>,
}

/// Non-fatal degradations observed while decoding or aligning a payload.
///
/// Diagnostics are surfaced (logged and collected), never raised: rendering
/// proceeds under the fail-open policies of the aligner.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A base-adjusted series has no actual-values counterpart.
    MissingActualSeries {
        /// Name of the series lacking a counterpart.
        index_name: String,
    },
    /// A series has different point counts across the two tables.
    PointCountMismatch {
        /// Series name.
        index_name: String,
        /// Point count in the base-adjusted table.
        base_points: usize,
        /// Point count in the actual-values table.
        actual_points: usize,
    },
    /// The two tables carry different numbers of series.
    SeriesCountMismatch {
        /// Series count in the base-adjusted table.
        base: usize,
        /// Series count in the actual-values table.
        actual: usize,
    },
    /// A point's date could not be interpreted in either encoding.
    UnparseableDate {
        /// Series the point belongs to.
        index_name: String,
        /// Raw date text.
        raw: String,
    },
    /// The exit date precedes all data; the full series was used instead.
    ExitBeforeData {
        /// The requested exit date, ISO-formatted.
        exit_date: String,
    },
    /// An entry carried a table tag this version does not know.
    UnknownTable {
        /// The unrecognized tag.
        table: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingActualSeries { index_name } => {
                write!(f, "no actual values for series {index_name}")
            }
            Self::PointCountMismatch {
                index_name,
                base_points,
                actual_points,
            } => write!(
                f,
                "data points mismatch for series {index_name}: {base_points} vs {actual_points}"
            ),
            Self::SeriesCountMismatch { base, actual } => {
                write!(f, "series count mismatch: {base} base vs {actual} actual")
            }
            Self::UnparseableDate { index_name, raw } => {
                write!(f, "unparseable date {raw:?} in series {index_name}")
            }
            Self::ExitBeforeData { exit_date } => {
                write!(f, "exit date {exit_date} precedes all data; using full series")
            }
            Self::UnknownTable { table } => write!(f, "unknown table tag {table:?}"),
        }
    }
}
