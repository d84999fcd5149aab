mod car_mode_availability;
mod default_mode_availability;
mod mode_availability_config;

pub use car_mode_availability::CarModeAvailability;
pub use default_mode_availability::DefaultModeAvailability;
pub use mode_availability_config::ModeAvailabilityConfig;
