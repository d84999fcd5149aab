use dmc_core::model::{component::ModeAvailability, plan::Person, trip::Trip};

pub const CAR_MODE: &str = "car";
pub const CAR_AVAILABILITY_ATTRIBUTE: &str = "car_availability";
pub const HAS_LICENSE_ATTRIBUTE: &str = "has_license";

/// offers a fixed list of modes but withholds `car` from persons who have no
/// car available or no driving license.
#[derive(Debug, Clone)]
pub struct CarModeAvailability {
    modes: Vec<String>,
}

impl CarModeAvailability {
    pub fn new(modes: Vec<String>) -> Self {
        Self { modes }
    }

    fn car_available(person: &Person) -> bool {
        let no_car = person.attribute(CAR_AVAILABILITY_ATTRIBUTE) == Some("never");
        let no_license = person.attribute(HAS_LICENSE_ATTRIBUTE) == Some("no");
        !(no_car || no_license)
    }
}

impl ModeAvailability for CarModeAvailability {
    fn available_modes(&self, person: &Person, _trips: &[Trip]) -> Vec<String> {
        if Self::car_available(person) {
            self.modes.clone()
        } else {
            self.modes
                .iter()
                .filter(|m| m.as_str() != CAR_MODE)
                .cloned()
                .collect()
        }
    }
}
