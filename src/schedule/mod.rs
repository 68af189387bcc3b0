mod schedule_error;
pub mod schedule_ops;
mod schedules;
mod source_manifest;
mod stop_location;
mod stop_row;
mod stop_time_row;

pub use schedule_error::ScheduleError;
pub use schedules::Schedules;
pub use source_manifest::default_sources;
pub use stop_location::{StopLocation, StopLocations};
pub use stop_row::StopRow;
pub use stop_time_row::StopTimeRow;
