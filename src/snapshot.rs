use serde::{Deserialize, Serialize};

use crate::components::ElementKind;
use crate::emotion::Emotion;
use crate::engine::PlanetEngine;
use crate::world::{PlacedElement, PlanetState};

/// Everything a presentation layer can observe about the engine at one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub planet: PlanetState,
    pub emotion: Emotion,
    pub placed_elements: Vec<PlacedElement>,
    pub selected_element: Option<ElementKind>,
    pub actions_this_generation: u32,
    pub max_actions_per_generation: u32,
    pub score: u64,
    pub is_playing: bool,
    pub show_tutorial: bool,
}

impl EngineSnapshot {
    pub fn capture(engine: &PlanetEngine) -> Self {
        Self {
            planet: *engine.planet(),
            emotion: engine.emotion(),
            placed_elements: engine.placed_elements().to_vec(),
            selected_element: engine.selected_element(),
            actions_this_generation: engine.actions_this_generation(),
            max_actions_per_generation: engine.max_actions_per_generation(),
            score: engine.score(),
            is_playing: engine.is_playing(),
            show_tutorial: engine.show_tutorial(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Position;

    #[test]
    fn snapshot_json_carries_planet_and_elements() {
        let mut engine = PlanetEngine::new();
        engine.select_element(Some(ElementKind::Mountain));
        engine.place_element(Position::new(1.0, 0.0, 0.0));

        let json = engine.snapshot().to_json_pretty().unwrap();
        assert!(json.contains("\"emotion\": \"content\""));
        assert!(json.contains("\"kind\": \"mountain\""));
        assert!(json.contains("\"materials\": 58.0"));

        let decoded: EngineSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, engine.snapshot());
    }
}
