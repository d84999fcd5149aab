mod router_config;
mod schedule_transit_router;
mod speed_unit;
mod teleportation_router;

pub use router_config::{RouterConfig, TeleportationModeConfig, TransitRouterConfig};
pub use schedule_transit_router::ScheduleTransitRouter;
pub use speed_unit::SpeedUnit;
pub use teleportation_router::{TeleportationModel, TeleportationPrediction, TeleportationRouter};
