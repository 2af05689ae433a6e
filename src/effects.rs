//! Static effect catalog: what placing each element does to the planet.

use crate::components::ElementKind;
use crate::world::{clamp_metric, PlanetState};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResourceDelta {
    pub food: f64,
    pub energy: f64,
    pub materials: f64,
}

/// Partial delta; absent fields leave the planet untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EffectDelta {
    pub biodiversity: Option<f64>,
    pub pollution: Option<f64>,
    pub knowledge: Option<f64>,
    pub health: Option<f64>,
    pub resources: Option<ResourceDelta>,
}

impl EffectDelta {
    /// Adds every present field and clamps each one right after its own addition.
    ///
    /// The health delta is written here but the caller recomputes health from
    /// the derived formula afterwards, so it never survives a transition.
    pub fn apply(&self, planet: &mut PlanetState) {
        if let Some(delta) = self.biodiversity {
            planet.biodiversity = clamp_metric(planet.biodiversity + delta);
        }
        if let Some(delta) = self.pollution {
            planet.pollution = clamp_metric(planet.pollution + delta);
        }
        if let Some(delta) = self.knowledge {
            planet.knowledge = clamp_metric(planet.knowledge + delta);
        }
        if let Some(delta) = self.health {
            planet.health = clamp_metric(planet.health + delta);
        }
        if let Some(delta) = self.resources {
            let resources = &mut planet.resources;
            resources.food += delta.food;
            resources.energy += delta.energy;
            resources.materials += delta.materials;
            resources.clamp_all();
        }
    }
}

const fn resources(food: f64, energy: f64, materials: f64) -> Option<ResourceDelta> {
    Some(ResourceDelta {
        food,
        energy,
        materials,
    })
}

const NONE: EffectDelta = EffectDelta {
    biodiversity: None,
    pollution: None,
    knowledge: None,
    health: None,
    resources: None,
};

pub fn effect_for(kind: ElementKind) -> EffectDelta {
    match kind {
        ElementKind::Tree => EffectDelta {
            biodiversity: Some(5.0),
            pollution: Some(-3.0),
            health: Some(2.0),
            ..NONE
        },
        ElementKind::Factory => EffectDelta {
            pollution: Some(8.0),
            resources: resources(0.0, 10.0, 5.0),
            ..NONE
        },
        ElementKind::River => EffectDelta {
            biodiversity: Some(7.0),
            health: Some(3.0),
            ..NONE
        },
        ElementKind::Mountain => EffectDelta {
            biodiversity: Some(3.0),
            resources: resources(0.0, 0.0, 8.0),
            ..NONE
        },
        ElementKind::Farmer => EffectDelta {
            biodiversity: Some(-1.0),
            resources: resources(15.0, 0.0, 0.0),
            ..NONE
        },
        ElementKind::Scientist => EffectDelta {
            pollution: Some(-5.0),
            knowledge: Some(8.0),
            health: Some(2.0),
            ..NONE
        },
        ElementKind::Educator => EffectDelta {
            knowledge: Some(10.0),
            ..NONE
        },
        ElementKind::Builder => EffectDelta {
            pollution: Some(2.0),
            resources: resources(0.0, -2.0, -5.0),
            ..NONE
        },
        ElementKind::Healer => EffectDelta {
            biodiversity: Some(2.0),
            health: Some(8.0),
            ..NONE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_effect_touches_only_its_fields() {
        let mut planet = PlanetState::initial();
        effect_for(ElementKind::Tree).apply(&mut planet);
        assert_eq!(planet.biodiversity, 35.0);
        assert_eq!(planet.pollution, 7.0);
        assert_eq!(planet.health, 72.0);
        assert_eq!(planet.knowledge, 20.0);
        assert_eq!(planet.resources, PlanetState::initial().resources);
    }

    #[test]
    fn builder_drains_energy_and_materials() {
        let mut planet = PlanetState::initial();
        effect_for(ElementKind::Builder).apply(&mut planet);
        assert_eq!(planet.pollution, 12.0);
        assert_eq!(planet.resources.food, 50.0);
        assert_eq!(planet.resources.energy, 48.0);
        assert_eq!(planet.resources.materials, 45.0);
    }

    #[test]
    fn each_field_is_clamped_independently() {
        let mut planet = PlanetState::initial();
        planet.pollution = 2.0;
        planet.knowledge = 97.0;
        effect_for(ElementKind::Scientist).apply(&mut planet);
        assert_eq!(planet.pollution, 0.0);
        assert_eq!(planet.knowledge, 100.0);

        planet.resources.food = 95.0;
        effect_for(ElementKind::Farmer).apply(&mut planet);
        assert_eq!(planet.resources.food, 100.0);
    }

    #[test]
    fn educator_has_single_knowledge_delta() {
        let effect = effect_for(ElementKind::Educator);
        assert_eq!(effect.knowledge, Some(10.0));
        assert_eq!(effect.biodiversity, None);
        assert_eq!(effect.pollution, None);
        assert_eq!(effect.health, None);
        assert_eq!(effect.resources, None);
    }
}
