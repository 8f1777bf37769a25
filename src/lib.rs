//! Room availability engine
//!
//! This crate answers, for a set of rooms with a weekly recurring
//! reservation table, whether a room is occupied at an instant, whether it
//! is free during a class period, and which rooms are free for a given
//! weekday and period.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
