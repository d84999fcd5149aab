use super::PlanElement;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use xxhash_rust::xxh3::xxh3_64;

/// a simulated traveler with the plan that is subject to mode choice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subpopulation: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    pub plan: Vec<PlanElement>,
}

impl Person {
    pub fn new(id: &str, plan: Vec<PlanElement>) -> Person {
        Person {
            id: id.to_string(),
            subpopulation: None,
            attributes: HashMap::new(),
            plan,
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Person {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_subpopulation(mut self, subpopulation: &str) -> Person {
        self.subpopulation = Some(subpopulation.to_string());
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// XXH3 hash of the person id. the same across runs, platforms and
    /// compiler versions, and independent of the plan contents.
    pub fn stable_hash(&self) -> u64 {
        xxh3_64(self.id.as_bytes())
    }
}
