use crate::world::{clamp_metric, PlanetState};

const BASE_HEALTH: f64 = 50.0;
const POLLUTION_PENALTY: f64 = 0.7;
const BIODIVERSITY_BONUS: f64 = 0.4;
const KNOWLEDGE_BONUS: f64 = 0.2;

/// Planet vitality derived from pollution, biodiversity and knowledge.
pub fn health_from(pollution: f64, biodiversity: f64, knowledge: f64) -> f64 {
    clamp_metric(
        BASE_HEALTH - pollution * POLLUTION_PENALTY
            + biodiversity * BIODIVERSITY_BONUS
            + knowledge * KNOWLEDGE_BONUS,
    )
}

pub fn calculate_health(state: &PlanetState) -> f64 {
    health_from(state.pollution, state.biodiversity, state.knowledge)
}
