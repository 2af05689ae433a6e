use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::ElementKind;

pub const METRIC_MIN: f64 = 0.0;
pub const METRIC_MAX: f64 = 100.0;

/// Clamps a planet metric or resource into `[METRIC_MIN, METRIC_MAX]`.
pub fn clamp_metric(value: f64) -> f64 {
    value.clamp(METRIC_MIN, METRIC_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resources {
    pub food: f64,
    pub energy: f64,
    pub materials: f64,
}

impl Resources {
    pub fn clamp_all(&mut self) {
        self.food = clamp_metric(self.food);
        self.energy = clamp_metric(self.energy);
        self.materials = clamp_metric(self.materials);
    }

    pub fn values(&self) -> [f64; 3] {
        [self.food, self.energy, self.materials]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetState {
    pub health: f64,
    pub pollution: f64,
    pub biodiversity: f64,
    pub knowledge: f64,
    pub generation: u64,
    pub resources: Resources,
}

impl PlanetState {
    /// The state every new session starts from.
    pub fn initial() -> Self {
        Self {
            health: 70.0,
            pollution: 10.0,
            biodiversity: 30.0,
            knowledge: 20.0,
            generation: 1,
            resources: Resources {
                food: 50.0,
                energy: 50.0,
                materials: 50.0,
            },
        }
    }

    /// Every bounded value, metrics first, then food, energy, materials.
    pub fn bounded_values(&self) -> [f64; 7] {
        let [food, energy, materials] = self.resources.values();
        [
            self.health,
            self.pollution,
            self.biodiversity,
            self.knowledge,
            food,
            energy,
            materials,
        ]
    }

    pub fn is_within_bounds(&self) -> bool {
        self.bounded_values()
            .iter()
            .all(|v| (METRIC_MIN..=METRIC_MAX).contains(v))
    }
}

impl Default for PlanetState {
    fn default() -> Self {
        Self::initial()
    }
}

/// A point on (or near) the unit sphere. Recorded as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit-length copy; the origin has no direction and is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Where a renderer anchors a marker for this position at `radius`.
    pub fn anchored(&self, radius: f64) -> Self {
        let unit = self.normalized();
        Self::new(unit.x * radius, unit.y * radius, unit.z * radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub id: ElementId,
    pub kind: ElementKind,
    pub position: Position,
    pub generation_placed: u64,
}

impl PlacedElement {
    /// Display label in the `<kind>-<seq>` form shown to players.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PlacedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.id.raw())
    }
}
