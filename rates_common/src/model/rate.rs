//! Rates produced by a fetch.
use std::fmt;

/// National bank sale rate for one currency on one date.
///
/// `date` is kept exactly as the service reported it (`DD.MM.YYYY`).
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRate {
    date: String,
    rate: f64,
}

impl DailyRate {
    /// Creates a new rate record.
    pub fn new(date: impl Into<String>, rate: f64) -> Self {
        DailyRate {
            date: date.into(),
            rate,
        }
    }

    /// Date reported by the service.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// National bank sale rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl fmt::Display for DailyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.date, self.rate)
    }
}

/// Rates for consecutive days, most recent first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateList(Vec<DailyRate>);

impl RateList {
    /// Creates an empty list.
    pub fn new() -> Self {
        RateList(Vec::new())
    }

    pub(crate) fn push(&mut self, rate: DailyRate) {
        self.0.push(rate);
    }

    /// Number of collected rates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the rates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DailyRate> {
        self.0.iter()
    }

    /// Borrow the rates as a slice.
    pub fn as_slice(&self) -> &[DailyRate] {
        &self.0
    }
}

impl From<RateList> for Vec<DailyRate> {
    fn from(list: RateList) -> Self {
        list.0
    }
}

impl FromIterator<DailyRate> for RateList {
    fn from_iter<I: IntoIterator<Item = DailyRate>>(iter: I) -> Self {
        RateList(iter.into_iter().collect())
    }
}

impl IntoIterator for RateList {
    type Item = DailyRate;
    type IntoIter = std::vec::IntoIter<DailyRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RateList {
    type Item = &'a DailyRate;
    type IntoIter = std::slice::Iter<'a, DailyRate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
