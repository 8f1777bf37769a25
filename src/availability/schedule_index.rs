//! Schedule index construction.
//!
//! The [`ScheduleIndex`] is the per-query lookup structure room → weekday →
//! reservation intervals. It is built from raw reservation rows, tolerating
//! partially filled rows by skipping them and counting why in an
//! [`IngestReport`].

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{RawReservationRow, ReservationInterval, Weekday};

/// Why a raw reservation row was left out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The room id or one of the four time fields is absent or blank.
    MissingField,
    /// A time field is present but not an integer.
    Unparseable,
    /// An hour or minute is off the 24-hour clock.
    OutOfRange,
    /// The weekday token is not a known weekday.
    UnknownWeekday,
}

/// Counts of accepted and skipped rows from one index build.
///
/// Skipping is a tolerance policy, not a failure; the report exists so the
/// loader can log how much of the source was unusable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Rows stored in the index.
    pub accepted: usize,
    /// Rows skipped for a missing room or time field.
    pub missing_field: usize,
    /// Rows skipped for a non-integer time field.
    pub unparseable: usize,
    /// Rows skipped for a time off the 24-hour clock.
    pub out_of_range: usize,
    /// Rows skipped for an unrecognized weekday.
    pub unknown_weekday: usize,
}

impl IngestReport {
    /// Total number of skipped rows.
    pub fn skipped(&self) -> usize {
        self.missing_field + self.unparseable + self.out_of_range + self.unknown_weekday
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingField => self.missing_field += 1,
            SkipReason::Unparseable => self.unparseable += 1,
            SkipReason::OutOfRange => self.out_of_range += 1,
            SkipReason::UnknownWeekday => self.unknown_weekday += 1,
        }
    }
}

/// All reservations of one room, one interval list per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RoomSchedule {
    days: [Vec<ReservationInterval>; 7],
}

/// Room → weekday → insertion-ordered reservation intervals.
///
/// Lookups never fail: a room or weekday without entries yields an empty
/// slice. Overlapping and duplicate intervals are stored as given.
///
/// # Example
///
/// ```
/// use room_availability::availability::ScheduleIndex;
/// use room_availability::models::{RawReservationRow, Weekday};
///
/// let rows = vec![
///     RawReservationRow::new("A101", "Mon", (9, 0), (10, 30)),
///     RawReservationRow { room: "A101".into(), weekday: "Tue".into(), ..Default::default() },
/// ];
///
/// let (index, report) = ScheduleIndex::build(&rows);
/// assert_eq!(index.intervals("A101", Weekday::Mon).len(), 1);
/// assert!(index.intervals("A101", Weekday::Tue).is_empty());
/// assert!(index.intervals("Z999", Weekday::Mon).is_empty());
/// assert_eq!(report.accepted, 1);
/// assert_eq!(report.skipped(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleIndex {
    rooms: HashMap<String, RoomSchedule>,
}

impl ScheduleIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from raw reservation rows.
    ///
    /// Rows with a missing, non-integer or off-clock time field, or with an
    /// unrecognized weekday, are skipped and counted. Rows whose start is not
    /// before their end are stored unchanged. Rooms are not checked against
    /// any room list.
    pub fn build<'a, I>(rows: I) -> (Self, IngestReport)
    where
        I: IntoIterator<Item = &'a RawReservationRow>,
    {
        let mut index = Self::new();
        let mut report = IngestReport::default();

        for row in rows {
            match parse_row(row) {
                Ok((weekday, interval)) => {
                    index.insert(row.room.trim(), weekday, interval);
                    report.accepted += 1;
                }
                Err(reason) => report.record_skip(reason),
            }
        }

        (index, report)
    }

    /// Appends an interval to the list for `(room, weekday)`.
    pub fn insert(&mut self, room: &str, weekday: Weekday, interval: ReservationInterval) {
        self.rooms.entry(room.to_string()).or_default().days[weekday.index()].push(interval);
    }

    /// Returns the intervals stored for `(room, weekday)`, in insertion order.
    pub fn intervals(&self, room: &str, weekday: Weekday) -> &[ReservationInterval] {
        self.rooms
            .get(room)
            .map(|schedule| schedule.days[weekday.index()].as_slice())
            .unwrap_or(&[])
    }

    /// Returns the intervals for a caller-supplied weekday token.
    ///
    /// A token that does not name a weekday matches nothing, so the result
    /// is empty rather than an error.
    pub fn intervals_for_token(&self, room: &str, weekday: &str) -> &[ReservationInterval] {
        match Weekday::parse(weekday) {
            Ok(weekday) => self.intervals(room, weekday),
            Err(_) => &[],
        }
    }

    /// Returns `true` if the room has at least one stored row on any day.
    pub fn contains_room(&self, room: &str) -> bool {
        self.rooms.contains_key(room)
    }

    /// Number of rooms with at least one stored interval.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Total number of stored intervals.
    pub fn interval_count(&self) -> usize {
        self.rooms
            .values()
            .flat_map(|schedule| schedule.days.iter())
            .map(Vec::len)
            .sum()
    }
}

fn parse_row(row: &RawReservationRow) -> Result<(Weekday, ReservationInterval), SkipReason> {
    if row.room.trim().is_empty() {
        return Err(SkipReason::MissingField);
    }

    let start_hour = parse_field(&row.start_hour)?;
    let start_minute = parse_field(&row.start_minute)?;
    let end_hour = parse_field(&row.end_hour)?;
    let end_minute = parse_field(&row.end_minute)?;

    let interval = hm(start_hour, start_minute)
        .zip(hm(end_hour, end_minute))
        .and_then(|((sh, sm), (eh, em))| ReservationInterval::from_hm(sh, sm, eh, em))
        .ok_or(SkipReason::OutOfRange)?;

    let weekday = Weekday::parse(&row.weekday).map_err(|_| SkipReason::UnknownWeekday)?;

    Ok((weekday, interval))
}

fn parse_field(field: &Option<String>) -> Result<i64, SkipReason> {
    let text = field
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(SkipReason::MissingField)?;

    text.parse::<i64>().map_err(|_| SkipReason::Unparseable)
}

fn hm(hour: i64, minute: i64) -> Option<(u32, u32)> {
    Some((u32::try_from(hour).ok()?, u32::try_from(minute).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(room: &str, weekday: &str, fields: [Option<&str>; 4]) -> RawReservationRow {
        let [sh, sm, eh, em] = fields.map(|f| f.map(str::to_string));
        RawReservationRow {
            room: room.to_string(),
            weekday: weekday.to_string(),
            start_hour: sh,
            start_minute: sm,
            end_hour: eh,
            end_minute: em,
        }
    }

    #[test]
    fn test_build_indexes_by_room_and_canonical_weekday() {
        let rows = vec![
            RawReservationRow::new("A101", "月", (9, 0), (10, 30)),
            RawReservationRow::new("A101", "Mon", (13, 0), (14, 30)),
            RawReservationRow::new("A101", "Wed", (8, 30), (10, 0)),
        ];

        let (index, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.accepted, 3);
        assert_eq!(report.skipped(), 0);
        assert_eq!(
            index.intervals("A101", Weekday::Mon),
            &[
                ReservationInterval::new(540, 630),
                ReservationInterval::new(780, 870)
            ]
        );
        assert_eq!(index.intervals("A101", Weekday::Wed).len(), 1);
        assert!(index.intervals("A101", Weekday::Tue).is_empty());
    }

    #[test]
    fn test_missing_time_field_is_skipped() {
        let rows = vec![
            row("A102", "Tue", [None, None, None, None]),
            row("A102", "Tue", [Some("9"), Some("0"), Some("10"), None]),
            row("A102", "Tue", [Some("9"), Some(" "), Some("10"), Some("0")]),
        ];

        let (index, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.missing_field, 3);
        assert_eq!(report.accepted, 0);
        assert!(!index.contains_room("A102"));
    }

    #[test]
    fn test_non_integer_time_field_is_skipped() {
        let rows = vec![
            row("B201", "Tue", [Some("9"), Some("xx"), Some("10"), Some("0")]),
            row("B201", "Tue", [Some("9.5"), Some("0"), Some("10"), Some("0")]),
        ];

        let (_, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.unparseable, 2);
        assert_eq!(report.skipped(), 2);
    }

    #[test]
    fn test_off_clock_time_is_skipped() {
        let rows = vec![
            RawReservationRow::new("C301", "Sat", (25, 0), (26, 0)),
            row("C301", "Sat", [Some("-1"), Some("0"), Some("10"), Some("0")]),
            RawReservationRow::new("C301", "Sat", (9, 75), (10, 0)),
        ];

        let (_, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.out_of_range, 3);
    }

    #[test]
    fn test_unknown_weekday_is_skipped() {
        let rows = vec![RawReservationRow::new("C301", "Someday", (9, 0), (10, 0))];

        let (index, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.unknown_weekday, 1);
        assert_eq!(index.room_count(), 0);
    }

    #[test]
    fn test_blank_room_is_skipped() {
        let rows = vec![RawReservationRow::new("  ", "Mon", (9, 0), (10, 0))];

        let (_, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.missing_field, 1);
    }

    #[test]
    fn test_non_monotonic_row_is_preserved() {
        let rows = vec![RawReservationRow::new("B202", "Fri", (18, 0), (9, 0))];

        let (index, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.accepted, 1);
        assert_eq!(
            index.intervals("B202", Weekday::Fri),
            &[ReservationInterval::new(1080, 540)]
        );
    }

    #[test]
    fn test_duplicates_and_unlisted_rooms_are_kept() {
        let rows = vec![
            RawReservationRow::new("Z999", "Mon", (9, 0), (17, 0)),
            RawReservationRow::new("Z999", "Mon", (9, 0), (17, 0)),
        ];

        let (index, _) = ScheduleIndex::build(&rows);

        assert_eq!(index.intervals("Z999", Weekday::Mon).len(), 2);
        assert_eq!(index.interval_count(), 2);
    }

    #[test]
    fn test_whitespace_in_fields_is_tolerated() {
        let rows = vec![row(
            " A101 ",
            " Thu ",
            [Some(" 9"), Some("0 "), Some("10"), Some("00")],
        )];

        let (index, report) = ScheduleIndex::build(&rows);

        assert_eq!(report.accepted, 1);
        assert_eq!(index.intervals("A101", Weekday::Thu).len(), 1);
    }

    #[test]
    fn test_intervals_for_unrecognized_token_is_empty() {
        let rows = vec![RawReservationRow::new("A101", "Mon", (9, 0), (10, 0))];
        let (index, _) = ScheduleIndex::build(&rows);

        assert_eq!(index.intervals_for_token("A101", "mon").len(), 1);
        assert!(index.intervals_for_token("A101", "Moonday").is_empty());
    }
}
