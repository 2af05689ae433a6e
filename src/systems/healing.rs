use crate::{
    components::ElementKind,
    engine::{GenerationContext, System},
    world::{clamp_metric, PlanetState},
};

/// Healers restore health directly. The engine recomputes health from the
/// derived formula once the pipeline finishes, so this bump is transient.
pub struct HealingSystem {
    health_per_healer: f64,
}

impl HealingSystem {
    pub fn new() -> Self {
        Self {
            health_per_healer: 3.0,
        }
    }
}

impl Default for HealingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for HealingSystem {
    fn name(&self) -> &str {
        "healing"
    }

    fn run(&mut self, ctx: &GenerationContext<'_>, planet: &mut PlanetState) {
        let healers = ctx.census.count(ElementKind::Healer) as f64;
        planet.health = clamp_metric(planet.health + healers * self.health_per_healer);
    }
}
