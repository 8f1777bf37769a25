//! Bulk free-room enumeration.

use crate::error::EngineResult;
use crate::models::{PeriodId, PeriodTable, Room, Weekday};

use super::period_overlap::{PeriodStatus, period_status};
use super::schedule_index::ScheduleIndex;

/// Lists the rooms that are free for `period` on `weekday`.
///
/// The period is resolved and the weekday token parsed once; every room is
/// then tested independently.
/// The result keeps the order of `rooms`, and each entry is the full room
/// record so attributes such as the power-outlet flag travel with it.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnknownPeriod`] if `period` is not
/// in the table, even when `rooms` is empty.
///
/// # Example
///
/// ```
/// use room_availability::availability::{ScheduleIndex, list_free_rooms};
/// use room_availability::models::{PeriodTable, RawReservationRow, Room};
///
/// let rows = vec![RawReservationRow::new("A", "Wed", (12, 0), (15, 0))];
/// let (index, _) = ScheduleIndex::build(&rows);
/// let rooms = vec![Room::new("A"), Room::new("B"), Room::new("C")];
///
/// let free = list_free_rooms(&index, &PeriodTable::default(), &rooms, "Wed", 3).unwrap();
/// let ids: Vec<&str> = free.iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(ids, vec!["B", "C"]);
/// ```
pub fn list_free_rooms<'a>(
    index: &ScheduleIndex,
    periods: &PeriodTable,
    rooms: &'a [Room],
    weekday: impl AsRef<str>,
    period: PeriodId,
) -> EngineResult<Vec<&'a Room>> {
    let period = periods.resolve(period)?;

    // An unrecognized token matches nothing, so every room is free
    let Ok(weekday) = Weekday::parse(weekday.as_ref()) else {
        return Ok(rooms.iter().collect());
    };

    Ok(rooms
        .iter()
        .filter(|room| {
            period_status(index.intervals(&room.id, weekday), period) == PeriodStatus::Free
        })
        .collect())
}
