use crate::{
    components::ElementKind,
    engine::{GenerationContext, System},
    world::{clamp_metric, PlanetState},
};

/// Established trees keep spreading life and scrubbing the air.
pub struct GrowthSystem {
    biodiversity_per_tree: f64,
    pollution_scrub_per_tree: f64,
}

impl GrowthSystem {
    pub fn new() -> Self {
        Self {
            biodiversity_per_tree: 0.5,
            pollution_scrub_per_tree: 0.3,
        }
    }
}

impl Default for GrowthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for GrowthSystem {
    fn name(&self) -> &str {
        "growth"
    }

    fn run(&mut self, ctx: &GenerationContext<'_>, planet: &mut PlanetState) {
        let trees = ctx.census.count(ElementKind::Tree) as f64;
        planet.biodiversity = clamp_metric(planet.biodiversity + trees * self.biodiversity_per_tree);
        planet.pollution = clamp_metric(planet.pollution - trees * self.pollution_scrub_per_tree);
    }
}
