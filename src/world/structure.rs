//! Structures: named, fixed locations agents can run to

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    name: String,
    location: Point,
}

impl Structure {
    pub fn new(name: impl Into<String>, location: Point) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn describe(&self) -> String {
        format!("Structure {} at {}", self.name, self.location)
    }
}
