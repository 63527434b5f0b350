//! Date source for watering timestamps.

use chrono::{Local, NaiveDate};

/// Supplies "today" to anything that stamps a watering.
pub trait Calendar {
    fn today(&self) -> NaiveDate;
}

/// The local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCalendar(pub NaiveDate);

impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
