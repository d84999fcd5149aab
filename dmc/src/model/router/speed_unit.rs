use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

impl SpeedUnit {
    pub fn to_uom(&self, value: f64) -> Velocity {
        use uom::si::velocity;
        match self {
            SpeedUnit::MetersPerSecond => Velocity::new::<velocity::meter_per_second>(value),
            SpeedUnit::KilometersPerHour => Velocity::new::<velocity::kilometer_per_hour>(value),
            SpeedUnit::MilesPerHour => Velocity::new::<velocity::mile_per_hour>(value),
        }
    }
}
