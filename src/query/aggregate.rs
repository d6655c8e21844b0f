//! Aggregate statistics for summary tiles.
//!
//! Aggregation runs over a collection (typically the filtered view, but the
//! full dataset works the same) and produces the numbers the dashboard tiles
//! show: total count, counts per distinct value of a categorical field, and
//! sum/mean of a numeric field. A record whose numeric field is unusable is
//! skipped and flagged rather than aborting the whole aggregation, so one
//! bad row never blanks out a tile.

use super::currency::parse_currency;
use super::value::{FieldValue, Queryable};

/// How a numeric field's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericKind {
    /// A plain number
    #[default]
    Number,
    /// A currency display string such as `"$2,500,000"`
    Currency,
}

/// The numeric field an aggregation sums and averages
#[derive(Debug, Clone)]
pub struct NumericFieldSpec {
    /// Field name
    pub name: String,
    /// How raw values are interpreted
    pub kind: NumericKind,
    /// Whether zero means "not yet rated"
    ///
    /// When set, zero values are excluded from the mean (they still count
    /// toward the sum, where they are inert). This is per-field
    /// configuration: a satisfaction score of zero is unset, a budget of
    /// zero is a real zero.
    pub zero_means_unset: bool,
}

impl NumericFieldSpec {
    /// Spec for a plain numeric field
    #[must_use]
    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NumericKind::Number,
            zero_means_unset: false,
        }
    }

    /// Spec for a currency-display-string field
    #[must_use]
    pub fn currency(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NumericKind::Currency,
            zero_means_unset: false,
        }
    }

    /// Treat zero values as unset when averaging
    #[must_use]
    pub fn with_zero_as_unset(mut self) -> Self {
        self.zero_means_unset = true;
        self
    }
}

/// Describes which fields an aggregation reads
#[derive(Debug, Clone, Default)]
pub struct AggregateSpec {
    /// Categorical field whose distinct values are counted, if any
    pub group_by: Option<String>,
    /// Numeric field to sum and average, if any
    pub numeric: Option<NumericFieldSpec>,
}

impl AggregateSpec {
    /// Spec that only counts records
    #[must_use]
    pub fn count_only() -> Self {
        Self::default()
    }

    /// Count records per distinct value of the given categorical field
    #[must_use]
    pub fn grouped_by(mut self, field: impl Into<String>) -> Self {
        self.group_by = Some(field.into());
        self
    }

    /// Sum and average the given numeric field
    #[must_use]
    pub fn with_numeric(mut self, numeric: NumericFieldSpec) -> Self {
        self.numeric = Some(numeric);
        self
    }
}

/// A per-record input problem encountered during aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateIssue {
    /// Position of the record in the input collection
    pub index: usize,
    /// Field that could not be used
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

/// Result of [`aggregate`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    /// Total number of input records
    pub count: usize,
    /// Counts per distinct group value, in first-seen order
    pub counts_by_group: Vec<(String, usize)>,
    /// Sum of the numeric field over usable records
    pub sum: f64,
    /// Arithmetic mean over contributing values, `None` when nothing contributed
    pub mean: Option<f64>,
    /// Records skipped because their numeric field was unusable
    pub issues: Vec<AggregateIssue>,
}

/// Compute aggregate statistics over a collection
///
/// Records missing the grouped or numeric field simply contribute nothing
/// for that part. A numeric field holding the wrong shape of value (a
/// non-currency string, a boolean, an unparsable amount) is reported in
/// [`Aggregates::issues`] and skipped.
pub fn aggregate<R: Queryable>(records: &[R], spec: &AggregateSpec) -> Aggregates {
    let mut result = Aggregates {
        count: records.len(),
        ..Aggregates::default()
    };

    let mut contributing_sum = 0.0;
    let mut contributing_count = 0usize;

    for (index, record) in records.iter().enumerate() {
        if let Some(group_field) = &spec.group_by {
            if let Some(value) = record.field(group_field).and_then(FieldValue::into_text) {
                bump_group(&mut result.counts_by_group, value);
            }
        }

        let Some(numeric) = &spec.numeric else {
            continue;
        };
        let Some(raw) = record.field(&numeric.name) else {
            continue;
        };

        let value = match numeric_value(&raw, numeric.kind) {
            Ok(v) => v,
            Err(reason) => {
                result.issues.push(AggregateIssue {
                    index,
                    field: numeric.name.clone(),
                    reason,
                });
                continue;
            }
        };

        result.sum += value;
        if !(numeric.zero_means_unset && value == 0.0) {
            contributing_sum += value;
            contributing_count += 1;
        }
    }

    if contributing_count > 0 {
        result.mean = Some(contributing_sum / contributing_count as f64);
    }

    result
}

/// Zero-denominator-safe percentage
///
/// Returns `part / whole * 100`, or the `0.0` sentinel when `whole` is zero,
/// so an event expecting no attendees or a budget with nothing allocated
/// renders as 0% instead of raising or leaking `NaN`/`Infinity`.
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

fn bump_group(counts: &mut Vec<(String, usize)>, value: String) {
    if let Some(entry) = counts.iter_mut().find(|(v, _)| *v == value) {
        entry.1 += 1;
    } else {
        counts.push((value, 1));
    }
}

fn numeric_value(raw: &FieldValue, kind: NumericKind) -> Result<f64, String> {
    match (kind, raw) {
        (NumericKind::Number, FieldValue::Number(n)) => Ok(*n),
        (NumericKind::Currency, FieldValue::Text(s)) => {
            parse_currency(s).map_err(|e| e.to_string())
        }
        (NumericKind::Currency, FieldValue::Number(n)) => Ok(*n),
        (NumericKind::Number, FieldValue::Text(_)) => {
            Err("expected a number, found text".to_string())
        }
        (_, FieldValue::Bool(_)) => Err("expected a number, found a boolean".to_string()),
    }
}
