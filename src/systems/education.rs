use crate::{
    components::ElementKind,
    engine::{GenerationContext, System},
    world::{clamp_metric, PlanetState},
};

pub struct EducationSystem {
    knowledge_per_educator: f64,
}

impl EducationSystem {
    pub fn new() -> Self {
        Self {
            knowledge_per_educator: 2.0,
        }
    }
}

impl Default for EducationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for EducationSystem {
    fn name(&self) -> &str {
        "education"
    }

    fn run(&mut self, ctx: &GenerationContext<'_>, planet: &mut PlanetState) {
        let educators = ctx.census.count(ElementKind::Educator) as f64;
        planet.knowledge = clamp_metric(planet.knowledge + educators * self.knowledge_per_educator);
    }
}
