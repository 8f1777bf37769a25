//! Availability engine.
//!
//! This module contains the schedule index and the pure query functions
//! built on it: point-in-time status, the period overlap test, bulk
//! free-room enumeration and the per-room weekly matrix. Nothing here
//! performs I/O or reads the clock; every input is passed in.

mod free_rooms;
mod period_overlap;
mod schedule_index;
mod snapshot;
mod status;
mod weekly_matrix;

pub use free_rooms::list_free_rooms;
pub use period_overlap::{PeriodStatus, is_free_for_period, period_status};
pub use schedule_index::{IngestReport, ScheduleIndex, SkipReason};
pub use snapshot::ScheduleSnapshot;
pub use status::{Occupancy, current_status, status_at};
pub use weekly_matrix::{MatrixRow, WeeklyMatrix, weekly_matrix};
