//! Immutable per-query view of rooms and reservations.

use tracing::{info, warn};

use crate::models::{RawReservationRow, Room};

use super::schedule_index::{IngestReport, ScheduleIndex};

/// The room list together with the schedule index built from it.
///
/// A snapshot is constructed by the loader and handed to the engine
/// explicitly; queries never reach for ambient state. It is read-only once
/// built.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSnapshot {
    rooms: Vec<Room>,
    index: ScheduleIndex,
    report: IngestReport,
}

impl ScheduleSnapshot {
    /// Builds a snapshot from the room list and raw reservation rows.
    ///
    /// The ingest report is logged; skipped rows are a warning, not an error.
    pub fn build(rooms: Vec<Room>, rows: &[RawReservationRow]) -> Self {
        let (index, report) = ScheduleIndex::build(rows);

        if report.skipped() > 0 {
            warn!(
                accepted = report.accepted,
                skipped = report.skipped(),
                missing_field = report.missing_field,
                unparseable = report.unparseable,
                out_of_range = report.out_of_range,
                unknown_weekday = report.unknown_weekday,
                "Skipped unusable reservation rows"
            );
        }
        info!(
            rooms = rooms.len(),
            indexed_rooms = index.room_count(),
            intervals = index.interval_count(),
            "Built schedule snapshot"
        );

        Self {
            rooms,
            index,
            report,
        }
    }

    /// The room list in source order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a room record by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// The schedule index.
    pub fn index(&self) -> &ScheduleIndex {
        &self.index
    }

    /// Row counts from building the index.
    pub fn report(&self) -> &IngestReport {
        &self.report
    }
}
