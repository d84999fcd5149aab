mod activity_tour_finder;
mod plan_tour_finder;
mod tour_finder_config;

pub use activity_tour_finder::ActivityTourFinder;
pub use plan_tour_finder::PlanTourFinder;
pub use tour_finder_config::TourFinderConfig;
