//! Flat-file data source.
//!
//! Loads the room list and raw reservation rows that the availability
//! engine is built from. All blocking I/O of the crate lives here.

mod csv_source;

pub use csv_source::{CsvDataSource, read_reservation_rows, read_rooms};
