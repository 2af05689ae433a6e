//! Headless play: drives an engine through a scenario one generation at a time.

use log::{debug, info};
use serde::Serialize;

use crate::{
    components::ElementKind,
    emotion::Emotion,
    engine::{EngineBuilder, PlanetEngine},
    rng::PlacementRng,
    scenario::{Scenario, Strategy},
    world::PlanetState,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    /// The generation the placements were made in.
    pub generation: u64,
    pub placed: Vec<ElementKind>,
    /// Planet after the generation advanced.
    pub planet: PlanetState,
    pub emotion: Emotion,
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub scenario: String,
    pub seed: u64,
    pub generations_played: u64,
    pub elements_placed: usize,
    pub final_planet: PlanetState,
    pub final_emotion: Emotion,
    pub score: u64,
    pub reports: Vec<GenerationReport>,
}

pub struct SessionRunner {
    scenario: Scenario,
    engine: PlanetEngine,
    rng: PlacementRng,
    played: u64,
}

impl SessionRunner {
    pub fn new(scenario: Scenario) -> Self {
        let engine = EngineBuilder::standard(scenario.engine_settings()).build();
        let rng = PlacementRng::new(scenario.seed);
        Self {
            scenario,
            engine,
            rng,
            played: 0,
        }
    }

    pub fn engine(&self) -> &PlanetEngine {
        &self.engine
    }

    /// Mutable access, e.g. to subscribe listeners before running.
    pub fn engine_mut(&mut self) -> &mut PlanetEngine {
        &mut self.engine
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn run(&mut self, generations: u64) -> RunSummary {
        self.run_with_hook(generations, |_| {})
    }

    pub fn run_with_hook<F>(&mut self, generations: u64, mut hook: F) -> RunSummary
    where
        F: FnMut(&GenerationReport),
    {
        if !self.engine.is_playing() {
            self.engine.start_game();
        }
        if self.engine.show_tutorial() {
            self.engine.close_tutorial();
        }

        let mut reports = Vec::new();
        for _ in 0..generations {
            let report = self.play_generation();
            hook(&report);
            reports.push(report);
        }

        info!(
            "scenario '{}' finished after {} generations with score {}",
            self.scenario.name,
            reports.len(),
            self.engine.score()
        );
        RunSummary {
            scenario: self.scenario.name.clone(),
            seed: self.rng.master_seed(),
            generations_played: reports.len() as u64,
            elements_placed: self.engine.placed_elements().len(),
            final_planet: *self.engine.planet(),
            final_emotion: self.engine.emotion(),
            score: self.engine.score(),
            reports,
        }
    }

    fn play_generation(&mut self) -> GenerationReport {
        let generation = self.engine.planet().generation;
        let mut stream = self.rng.generation_stream(generation);
        let kinds: Vec<ElementKind> = match self.scenario.strategy {
            Strategy::Random => (0..self.engine.actions_remaining())
                .map(|_| stream.next_kind())
                .collect(),
            Strategy::Scripted => self.scenario.script_row(self.played).to_vec(),
        };

        let mut placed = Vec::with_capacity(kinds.len());
        for kind in kinds {
            self.engine.select_element(Some(kind));
            if self.engine.place_element(stream.next_surface_point()).is_none() {
                debug!("generation {generation}: action cap reached before placing {kind}");
                break;
            }
            placed.push(kind);
        }
        self.engine.select_element(None);
        self.engine.advance_generation();
        self.played += 1;

        GenerationReport {
            generation,
            placed,
            planet: *self.engine.planet(),
            emotion: self.engine.emotion(),
            score: self.engine.score(),
        }
    }
}
