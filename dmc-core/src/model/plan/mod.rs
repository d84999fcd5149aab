mod activity;
mod leg;
mod person;
mod plan_element;

pub use activity::Activity;
pub use leg::{Leg, Route, TransitRouteDescriptor};
pub use person::Person;
pub use plan_element::PlanElement;
