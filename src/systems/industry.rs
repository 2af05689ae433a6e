use crate::{
    components::ElementKind,
    engine::{GenerationContext, System},
    world::{clamp_metric, PlanetState},
};

pub struct IndustrySystem {
    pollution_per_factory: f64,
}

impl IndustrySystem {
    pub fn new() -> Self {
        Self {
            pollution_per_factory: 2.0,
        }
    }
}

impl Default for IndustrySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for IndustrySystem {
    fn name(&self) -> &str {
        "industry"
    }

    fn run(&mut self, ctx: &GenerationContext<'_>, planet: &mut PlanetState) {
        let factories = ctx.census.count(ElementKind::Factory) as f64;
        planet.pollution = clamp_metric(planet.pollution + factories * self.pollution_per_factory);
    }
}
