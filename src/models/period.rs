//! Class periods and the period table.
//!
//! A period is a named, fixed time-of-day slot (e.g. "period 3") that is
//! configured independently of any weekday. The [`PeriodTable`] is built
//! once at start-up and never changes for the lifetime of the process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::reservation::minute_of_day;

/// Identifier of a class period.
pub type PeriodId = u8;

/// A class period as a half-open `[start, end)` range of minutes since
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// Period identifier.
    pub id: PeriodId,
    /// Inclusive start, in minutes since midnight.
    pub start_minute: u16,
    /// Exclusive end, in minutes since midnight.
    pub end_minute: u16,
}

impl Period {
    /// Creates a period from hour/minute bounds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if a bound is off the 24-hour
    /// clock or the period does not end after it starts.
    ///
    /// # Example
    ///
    /// ```
    /// use room_availability::models::Period;
    ///
    /// let first = Period::from_hm(1, (8, 30), (10, 0)).unwrap();
    /// assert_eq!(first.start_minute, 510);
    /// assert_eq!(first.end_minute, 600);
    /// assert!(Period::from_hm(2, (10, 0), (10, 0)).is_err());
    /// ```
    pub fn from_hm(id: PeriodId, start: (u32, u32), end: (u32, u32)) -> EngineResult<Self> {
        let start_minute = minute_of_day(start.0, start.1)
            .ok_or_else(|| invalid(id, "start is not a valid time of day"))?;
        let end_minute = minute_of_day(end.0, end.1)
            .ok_or_else(|| invalid(id, "end is not a valid time of day"))?;

        if start_minute >= end_minute {
            return Err(invalid(id, "start must be before end"));
        }

        Ok(Self {
            id,
            start_minute,
            end_minute,
        })
    }
}

fn invalid(id: PeriodId, message: &str) -> EngineError {
    EngineError::InvalidPeriod {
        id,
        message: message.to_string(),
    }
}

/// The fixed mapping from period identifier to time-of-day interval.
///
/// # Example
///
/// ```
/// use room_availability::models::PeriodTable;
///
/// let table = PeriodTable::default();
/// let third = table.resolve(3).unwrap();
/// assert_eq!((third.start_minute, third.end_minute), (750, 840));
/// assert!(table.resolve(9).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTable {
    periods: BTreeMap<PeriodId, Period>,
}

impl PeriodTable {
    /// Builds a table from a list of periods.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if an identifier appears twice.
    pub fn new(periods: impl IntoIterator<Item = Period>) -> EngineResult<Self> {
        let mut table = BTreeMap::new();
        for period in periods {
            if table.insert(period.id, period).is_some() {
                return Err(invalid(period.id, "duplicate period identifier"));
            }
        }
        Ok(Self { periods: table })
    }

    /// Looks up a period by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPeriod`] if the table has no entry for `id`.
    pub fn resolve(&self, id: PeriodId) -> EngineResult<&Period> {
        self.periods
            .get(&id)
            .ok_or(EngineError::UnknownPeriod { id })
    }

    /// Iterates over the periods in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.values()
    }

    /// Number of configured periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns `true` if no periods are configured.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

impl Default for PeriodTable {
    fn default() -> Self {
        let periods = [
            (1, 8 * 60 + 30, 10 * 60),
            (2, 10 * 60 + 10, 11 * 60 + 40),
            (3, 12 * 60 + 30, 14 * 60),
            (4, 14 * 60 + 10, 15 * 60 + 40),
            (5, 15 * 60 + 50, 17 * 60 + 20),
        ];

        Self {
            periods: periods
                .into_iter()
                .map(|(id, start_minute, end_minute)| {
                    (
                        id,
                        Period {
                            id,
                            start_minute,
                            end_minute,
                        },
                    )
                })
                .collect(),
        }
    }
}
