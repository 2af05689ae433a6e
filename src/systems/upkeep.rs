use crate::{
    engine::{GenerationContext, System},
    world::{clamp_metric, PlanetState},
};

/// Flat food and energy consumption paid every generation.
pub struct UpkeepSystem {
    food_per_generation: f64,
    energy_per_generation: f64,
}

impl UpkeepSystem {
    pub fn new() -> Self {
        Self {
            food_per_generation: 5.0,
            energy_per_generation: 3.0,
        }
    }
}

impl Default for UpkeepSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for UpkeepSystem {
    fn name(&self) -> &str {
        "upkeep"
    }

    fn run(&mut self, _ctx: &GenerationContext<'_>, planet: &mut PlanetState) {
        let resources = &mut planet.resources;
        resources.food = clamp_metric(resources.food - self.food_per_generation);
        resources.energy = clamp_metric(resources.energy - self.energy_per_generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::ElementCensus;

    #[test]
    fn upkeep_never_drives_resources_negative() {
        let census = ElementCensus::default();
        let ctx = GenerationContext {
            generation: 2,
            census: &census,
        };
        let mut planet = PlanetState::initial();
        planet.resources.food = 3.0;
        planet.resources.energy = 1.0;
        UpkeepSystem::new().run(&ctx, &mut planet);
        assert_eq!(planet.resources.food, 0.0);
        assert_eq!(planet.resources.energy, 0.0);
        assert_eq!(planet.resources.materials, 50.0);
    }
}
