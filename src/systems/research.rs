use crate::{
    components::ElementKind,
    engine::{GenerationContext, System},
    world::{clamp_metric, PlanetState},
};

/// Scientists keep working on cleaner processes every generation.
pub struct ResearchSystem {
    pollution_cut_per_scientist: f64,
}

impl ResearchSystem {
    pub fn new() -> Self {
        Self {
            pollution_cut_per_scientist: 1.5,
        }
    }
}

impl Default for ResearchSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for ResearchSystem {
    fn name(&self) -> &str {
        "research"
    }

    fn run(&mut self, ctx: &GenerationContext<'_>, planet: &mut PlanetState) {
        let scientists = ctx.census.count(ElementKind::Scientist) as f64;
        planet.pollution =
            clamp_metric(planet.pollution - scientists * self.pollution_cut_per_scientist);
    }
}
