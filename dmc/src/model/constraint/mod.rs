mod composite_constraint;
mod constraint_config;
pub mod constraint_ops;
mod mode_constraint;
mod vehicle_tour_constraint;

pub use composite_constraint::{CompositeTourConstraint, CompositeTourConstraintFactory};
pub use constraint_config::ConstraintConfig;
pub use mode_constraint::ModeConstraint;
pub use vehicle_tour_constraint::{
    VehicleTourConstraint, VehicleTourConstraintConfig, VehicleTourConstraintFactory,
};
