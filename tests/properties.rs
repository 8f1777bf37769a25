//! Property tests for the availability engine invariants.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use room_availability::availability::{
    Occupancy, PeriodStatus, ScheduleIndex, is_free_for_period, list_free_rooms, status_at,
};
use room_availability::models::{
    MINUTES_PER_DAY, Period, PeriodTable, RawReservationRow, ReservationInterval, Room, Weekday,
};

/// A Monday, so `MONDAY + n days` walks the week in `Weekday::ALL` order.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
}

fn at_minute(weekday: Weekday, minute: u16) -> NaiveDateTime {
    let date = monday() + chrono::Duration::days(weekday.index() as i64);
    date.and_hms_opt(u32::from(minute / 60), u32::from(minute % 60), 0)
        .unwrap()
}

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    prop::sample::select(Weekday::ALL.to_vec())
}

fn minute_strategy() -> impl Strategy<Value = u16> {
    0..MINUTES_PER_DAY
}

fn row_strategy() -> impl Strategy<Value = RawReservationRow> {
    (
        prop::sample::select(vec!["A", "B", "C", "D"]),
        weekday_strategy(),
        minute_strategy(),
        minute_strategy(),
    )
        .prop_map(|(room, weekday, start, end)| {
            RawReservationRow::new(
                room,
                weekday.as_str(),
                (u32::from(start / 60), u32::from(start % 60)),
                (u32::from(end / 60), u32::from(end % 60)),
            )
        })
}

fn single_period_table(start: u16, end: u16) -> PeriodTable {
    PeriodTable::new([Period {
        id: 1,
        start_minute: start,
        end_minute: end,
    }])
    .unwrap()
}

proptest! {
    #[test]
    fn reservation_start_is_occupied_and_end_is_free(
        weekday in weekday_strategy(),
        start in 0..MINUTES_PER_DAY - 1,
        width in 1u16..240,
    ) {
        let end = (start + width).min(MINUTES_PER_DAY - 1);
        prop_assume!(start < end);

        let mut index = ScheduleIndex::new();
        index.insert("A", weekday, ReservationInterval::new(start, end));

        prop_assert_eq!(
            status_at(&index, "A", weekday, at_minute(weekday, start)),
            Occupancy::Occupied
        );
        prop_assert_eq!(
            status_at(&index, "A", weekday, at_minute(weekday, end)),
            Occupancy::Free
        );
    }

    #[test]
    fn empty_day_is_free_everywhere(
        rows in prop::collection::vec(row_strategy(), 0..30),
        weekday in weekday_strategy(),
        minute in minute_strategy(),
    ) {
        let (index, _) = ScheduleIndex::build(&rows);
        prop_assume!(index.intervals("A", weekday).is_empty());

        prop_assert_eq!(
            status_at(&index, "A", weekday, at_minute(weekday, minute)),
            Occupancy::Free
        );
        let table = PeriodTable::default();
        for period in table.iter() {
            prop_assert_eq!(
                is_free_for_period(&index, &table, "A", weekday, period.id).unwrap(),
                PeriodStatus::Free
            );
        }
    }

    #[test]
    fn overlap_matches_half_open_predicate(
        res_start in minute_strategy(),
        res_end in minute_strategy(),
        period_start in 0..MINUTES_PER_DAY - 1,
        period_width in 1u16..200,
    ) {
        let period_end = (period_start + period_width).min(MINUTES_PER_DAY - 1);
        prop_assume!(period_start < period_end);

        let mut index = ScheduleIndex::new();
        index.insert("A", Weekday::Tue, ReservationInterval::new(res_start, res_end));
        let table = single_period_table(period_start, period_end);

        let expected = if res_start < res_end && res_start < period_end && res_end > period_start {
            PeriodStatus::Reserved
        } else {
            PeriodStatus::Free
        };
        prop_assert_eq!(
            is_free_for_period(&index, &table, "A", Weekday::Tue, 1).unwrap(),
            expected
        );
    }

    #[test]
    fn free_and_reserved_partition_the_rooms(
        rows in prop::collection::vec(row_strategy(), 0..40),
        weekday in weekday_strategy(),
        period in 1u8..=5,
    ) {
        let (index, _) = ScheduleIndex::build(&rows);
        let table = PeriodTable::default();
        let rooms: Vec<Room> = ["A", "B", "C", "D", "E"].into_iter().map(Room::new).collect();

        let free = list_free_rooms(&index, &table, &rooms, weekday, period).unwrap();
        let reserved = rooms
            .iter()
            .filter(|room| {
                is_free_for_period(&index, &table, &room.id, weekday, period).unwrap()
                    == PeriodStatus::Reserved
            })
            .count();

        prop_assert_eq!(free.len() + reserved, rooms.len());
        prop_assert!(free.iter().any(|room| room.id == "E"));
    }

    #[test]
    fn malformed_rows_never_fail_a_query(
        cells in prop::collection::vec(
            prop::option::of(prop_oneof![
                "[0-9]{1,3}".prop_map(String::from),
                "[a-z ]{0,3}".prop_map(String::from),
                "-[0-9]".prop_map(String::from),
            ]),
            4,
        ),
        weekday_token in prop_oneof![Just("Mon"), Just("月"), Just("Nope"), Just("")],
    ) {
        let row = RawReservationRow {
            room: "A".to_string(),
            weekday: weekday_token.to_string(),
            start_hour: cells[0].clone(),
            start_minute: cells[1].clone(),
            end_hour: cells[2].clone(),
            end_minute: cells[3].clone(),
        };

        let (index, report) = ScheduleIndex::build(&[row]);
        prop_assert_eq!(report.accepted + report.skipped(), 1);

        let rooms = vec![Room::new("A")];
        let table = PeriodTable::default();
        prop_assert!(list_free_rooms(&index, &table, &rooms, weekday_token, 1).is_ok());
        prop_assert!(is_free_for_period(&index, &table, "A", weekday_token, 3).is_ok());
    }
}
