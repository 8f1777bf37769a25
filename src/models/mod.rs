//! Core data models for the room availability engine.
//!
//! This module contains the domain vocabulary shared by the engine, the
//! configuration layer and the data source.

mod period;
mod reservation;
mod room;
mod weekday;

pub use period::{Period, PeriodId, PeriodTable};
pub use reservation::{MINUTES_PER_DAY, RawReservationRow, ReservationInterval, minute_of_day};
pub use room::Room;
pub use weekday::Weekday;
