pub mod place;
pub mod schedule;
pub mod weekday;

pub use place::{Place, PlaceDraft};
pub use schedule::{DaySchedule, Interval};
pub use weekday::{Weekday, DAY_ORDER};
