mod activity_type_home_finder;
mod first_activity_home_finder;
mod home_finder_config;

pub use activity_type_home_finder::ActivityTypeHomeFinder;
pub use first_activity_home_finder::FirstActivityHomeFinder;
pub use home_finder_config::HomeFinderConfig;

pub fn default_home_activity_type() -> String {
    String::from("home")
}
