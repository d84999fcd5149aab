use super::{ScheduleTransitRouter, SpeedUnit, TeleportationModel, TeleportationRouter};
use dmc_core::model::{component::TripRouter, ModeChoiceError};
use dmc_gtfs::schedule::{
    read_csv_rows, RouteStopRow, ScheduleError, ScheduleLoadingPolicy, TransitSchedule,
    TransitStops,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use uom::si::{f64::Length, length::meter};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeleportationModeConfig {
    /// fixed speed to apply
    pub speed: f64,
    /// speed unit for the fixed speed value
    #[serde(default)]
    pub speed_unit: SpeedUnit,
    #[serde(default = "default_beeline_distance_factor")]
    pub beeline_distance_factor: f64,
}

fn default_beeline_distance_factor() -> f64 {
    1.3
}

/// routes trips of the transit mode over the stops of a transit schedule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransitRouterConfig {
    #[serde(default = "default_transit_mode")]
    pub mode: String,
    /// teleported mode used to reach and leave the stops
    #[serde(default = "default_access_mode")]
    pub access_mode: String,
    /// CSV file with columns stop_id, x, y
    pub stops_input_file: String,
    /// CSV file with columns line_id, route_id, stop_id, departure_offset
    pub route_stops_input_file: String,
    /// straight line distance in meters beyond which a stop is out of reach
    #[serde(default = "default_max_access_distance")]
    pub max_access_distance: f64,
}

fn default_transit_mode() -> String {
    String::from("pt")
}

fn default_access_mode() -> String {
    String::from("walk")
}

fn default_max_access_distance() -> f64 {
    1000.0
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RouterConfig {
    Teleportation {
        modes: HashMap<String, TeleportationModeConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transit: Option<TransitRouterConfig>,
    },
}

impl RouterConfig {
    /// true if trips of `mode` are routed with transit route descriptors.
    pub fn routes_transit(&self, mode: &str) -> bool {
        match self {
            RouterConfig::Teleportation { transit, .. } => {
                transit.as_ref().is_some_and(|t| t.mode == mode)
            }
        }
    }

    pub fn build(&self) -> Result<Arc<dyn TripRouter>, ModeChoiceError> {
        match self {
            RouterConfig::Teleportation { modes, transit } => {
                let models = modes
                    .iter()
                    .map(|(mode, conf)| {
                        if !(conf.speed.is_finite() && conf.speed > 0.0) {
                            return Err(ModeChoiceError::BuildError(format!(
                                "teleportation speed for mode '{mode}' must be positive, found {}",
                                conf.speed
                            )));
                        }
                        let model = TeleportationModel {
                            speed: conf.speed_unit.to_uom(conf.speed),
                            beeline_distance_factor: conf.beeline_distance_factor,
                        };
                        Ok((mode.clone(), model))
                    })
                    .collect::<Result<HashMap<_, _>, _>>()?;
                let teleportation = TeleportationRouter::new(models);
                match transit {
                    None => Ok(Arc::new(teleportation)),
                    Some(conf) => {
                        let router = build_transit_router(conf, teleportation)?;
                        Ok(Arc::new(router))
                    }
                }
            }
        }
    }
}

fn build_transit_router(
    conf: &TransitRouterConfig,
    teleportation: TeleportationRouter,
) -> Result<ScheduleTransitRouter, ModeChoiceError> {
    let schedule_error =
        |e: ScheduleError| ModeChoiceError::BuildError(format!("while building transit router, {e}"));
    if !(conf.max_access_distance.is_finite() && conf.max_access_distance >= 0.0) {
        return Err(ModeChoiceError::BuildError(format!(
            "transit max_access_distance must be non-negative, found {}",
            conf.max_access_distance
        )));
    }
    let stops = TransitStops::try_from(Path::new(&conf.stops_input_file)).map_err(schedule_error)?;
    let route_stops: Vec<RouteStopRow> =
        read_csv_rows(Path::new(&conf.route_stops_input_file)).map_err(schedule_error)?;
    let schedule =
        TransitSchedule::from_rows(route_stops, std::iter::empty(), &ScheduleLoadingPolicy::All)
            .map_err(schedule_error)?;
    log::debug!(
        "built transit router over {} stops and {} routes",
        stops.len(),
        schedule.n_routes()
    );
    ScheduleTransitRouter::new(
        &conf.mode,
        &conf.access_mode,
        Length::new::<meter>(conf.max_access_distance),
        Arc::new(schedule),
        stops,
        teleportation,
    )
}
