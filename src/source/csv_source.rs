//! CSV room list and reservation rows.
//!
//! Two files make up the data source:
//!
//! ```text
//! classrooms.csv            room,has_power
//! classroom_schedules.csv   room,weekday,start_hour,start_minute,end_hour,end_minute
//! ```
//!
//! Both have a header row. Cells are read as text and interpreted later;
//! only a file that cannot be opened or read as CSV at all is an error.
//! Cells that are not valid UTF-8 are decoded lossily, so a damaged cell
//! spoils its own row and nothing else.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::availability::ScheduleSnapshot;
use crate::config::AvailabilityConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{RawReservationRow, Room};

/// One line of the room list.
#[derive(Debug, Deserialize)]
struct RoomRecord {
    room: String,
    #[serde(default)]
    has_power: Option<String>,
}

/// Reads rooms and reservation rows from a pair of CSV files.
///
/// Files are read on every call; nothing is cached between snapshots.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    rooms_path: PathBuf,
    schedules_path: PathBuf,
}

impl CsvDataSource {
    /// Creates a data source over the given files.
    pub fn new(rooms_path: impl Into<PathBuf>, schedules_path: impl Into<PathBuf>) -> Self {
        Self {
            rooms_path: rooms_path.into(),
            schedules_path: schedules_path.into(),
        }
    }

    /// Creates a data source over the files named in the configuration.
    pub fn from_config(config: &AvailabilityConfig) -> Self {
        Self::new(config.rooms_path(), config.schedules_path())
    }

    /// Loads the room list.
    pub fn load_rooms(&self) -> EngineResult<Vec<Room>> {
        let label = self.rooms_path.display().to_string();
        read_rooms(open(&self.rooms_path)?, &label)
    }

    /// Loads the raw reservation rows.
    pub fn load_reservation_rows(&self) -> EngineResult<Vec<RawReservationRow>> {
        let label = self.schedules_path.display().to_string();
        read_reservation_rows(open(&self.schedules_path)?, &label)
    }

    /// Loads both files and builds a fresh schedule snapshot.
    pub fn snapshot(&self) -> EngineResult<ScheduleSnapshot> {
        let rooms = self.load_rooms()?;
        let rows = self.load_reservation_rows()?;
        Ok(ScheduleSnapshot::build(rooms, &rows))
    }
}

fn open(path: &Path) -> EngineResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => EngineError::DataSourceNotFound {
            path: path.display().to_string(),
        },
        _ => EngineError::DataSourceParse {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn parse_error(source: &str, error: csv::Error) -> EngineError {
    EngineError::DataSourceParse {
        path: source.to_string(),
        message: error.to_string(),
    }
}

/// Reads a room list from CSV text.
///
/// `source` names the input in error messages. Rows with a blank room id
/// are ignored.
///
/// # Example
///
/// ```
/// use room_availability::source::read_rooms;
///
/// let csv = "room,has_power\nA101,yes\nA102,\n";
/// let rooms = read_rooms(csv.as_bytes(), "inline").unwrap();
/// assert_eq!(rooms.len(), 2);
/// assert!(rooms[0].has_power);
/// assert!(!rooms[1].has_power);
/// ```
pub fn read_rooms<R: Read>(reader: R, source: &str) -> EngineResult<Vec<Room>> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers().map_err(|e| parse_error(source, e))?.clone();
    let mut rooms = Vec::new();

    for record in reader.byte_records() {
        let record = record.map_err(|e| parse_error(source, e))?;
        let record = StringRecord::from_byte_record_lossy(record);
        let record: RoomRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| parse_error(source, e))?;
        if record.room.is_empty() {
            continue;
        }
        let has_power = Room::parse_power_flag(record.has_power.as_deref());
        rooms.push(Room::new(record.room).with_power(has_power));
    }

    debug!(source, rooms = rooms.len(), "Loaded room list");
    Ok(rooms)
}

/// Reads raw reservation rows from CSV text.
///
/// Missing columns and empty cells become absent fields; deciding whether a
/// row is usable is left to the schedule index. A record that cannot be
/// mapped onto the columns at all is dropped and logged.
pub fn read_reservation_rows<R: Read>(
    reader: R,
    source: &str,
) -> EngineResult<Vec<RawReservationRow>> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers().map_err(|e| parse_error(source, e))?.clone();
    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for record in reader.byte_records() {
        let record = record.map_err(|e| parse_error(source, e))?;
        let record = StringRecord::from_byte_record_lossy(record);
        match record.deserialize::<RawReservationRow>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => {
                dropped += 1;
                debug!(source, error = %e, "Dropped malformed reservation record");
            }
        }
    }

    if dropped > 0 {
        warn!(source, dropped, "Dropped malformed reservation records");
    }
    debug!(source, rows = rows.len(), "Loaded reservation rows");
    Ok(rows)
}
