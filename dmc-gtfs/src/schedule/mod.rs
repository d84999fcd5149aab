mod config;
mod departure;
mod raw_schedule_row;
mod schedule_error;
mod schedule_loading_policy;
mod schedule_ops;
mod schedule_waiting_time_estimator;
mod transit_schedule;
mod transit_stops;
mod zero_waiting_time_estimator;

pub use config::{ScheduleWaitingTimeConfig, WaitingTimeEstimatorConfig};
pub use departure::{Departure, Schedule};
pub use raw_schedule_row::{RouteDepartureRow, RouteStopRow, StopRow};
pub use schedule_error::ScheduleError;
pub use schedule_loading_policy::ScheduleLoadingPolicy;
pub use schedule_ops::read_csv_rows;
pub use schedule_waiting_time_estimator::ScheduleWaitingTimeEstimator;
pub use transit_schedule::{ScheduledRoute, TransitSchedule};
pub use transit_stops::TransitStops;
pub use zero_waiting_time_estimator::ZeroWaitingTimeEstimator;
