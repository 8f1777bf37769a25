//! Per-room weekly matrix of period availability.

use serde::Serialize;

use crate::models::{Period, PeriodId, PeriodTable, Weekday};

use super::period_overlap::{PeriodStatus, period_status};
use super::schedule_index::ScheduleIndex;

/// One period row of a [`WeeklyMatrix`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    /// The period this row describes.
    pub period: Period,
    /// One status per weekday column, in column order.
    pub cells: Vec<PeriodStatus>,
}

/// Period × weekday availability of a single room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyMatrix {
    /// The room the matrix describes.
    pub room: String,
    /// Column headers.
    pub weekdays: Vec<Weekday>,
    /// Rows in ascending period order.
    pub rows: Vec<MatrixRow>,
}

impl WeeklyMatrix {
    /// Returns the status of one cell, if both coordinates are in the matrix.
    pub fn cell(&self, period: PeriodId, weekday: Weekday) -> Option<PeriodStatus> {
        let column = self.weekdays.iter().position(|&w| w == weekday)?;
        self.rows
            .iter()
            .find(|row| row.period.id == period)
            .and_then(|row| row.cells.get(column).copied())
    }
}

/// Builds the weekly matrix of `room` for every period in `periods` and
/// every weekday in `weekdays`.
///
/// Each cell is the period overlap test for that (period, weekday) pair.
pub fn weekly_matrix(
    index: &ScheduleIndex,
    room: &str,
    periods: &PeriodTable,
    weekdays: &[Weekday],
) -> WeeklyMatrix {
    let rows = periods
        .iter()
        .map(|period| MatrixRow {
            period: *period,
            cells: weekdays
                .iter()
                .map(|&weekday| period_status(index.intervals(room, weekday), period))
                .collect(),
        })
        .collect();

    WeeklyMatrix {
        room: room.to_string(),
        weekdays: weekdays.to_vec(),
        rows,
    }
}
