use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    components::ElementKind,
    config::LoggingConfig,
    engine::{EngineSettings, DEFAULT_MAX_ACTIONS_PER_GENERATION},
    world::{PlanetState, METRIC_MAX, METRIC_MIN},
};

/// Upper bound on generations a single scenario run may request.
pub const MAX_GENERATIONS: u64 = 100_000;

fn default_generations() -> u64 {
    10
}

fn default_max_actions() -> u32 {
    DEFAULT_MAX_ACTIONS_PER_GENERATION
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Random kinds at random surface points, filling every action slot.
    #[default]
    Random,
    /// Kinds from `script`, one row per generation, cycling when exhausted.
    Scripted,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_generations")]
    pub generations: u64,
    #[serde(default = "default_max_actions")]
    pub max_actions_per_generation: u32,
    #[serde(default)]
    pub initial: PlanetInit,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub script: Vec<Vec<ElementKind>>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Overrides applied on top of the fixed initial planet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanetInit {
    pub health: Option<f64>,
    pub pollution: Option<f64>,
    pub biodiversity: Option<f64>,
    pub knowledge: Option<f64>,
    pub generation: Option<u64>,
    pub food: Option<f64>,
    pub energy: Option<f64>,
    pub materials: Option<f64>,
}

impl PlanetInit {
    pub fn build(&self) -> PlanetState {
        let mut planet = PlanetState::initial();
        if let Some(value) = self.health {
            planet.health = value;
        }
        if let Some(value) = self.pollution {
            planet.pollution = value;
        }
        if let Some(value) = self.biodiversity {
            planet.biodiversity = value;
        }
        if let Some(value) = self.knowledge {
            planet.knowledge = value;
        }
        if let Some(value) = self.generation {
            planet.generation = value;
        }
        if let Some(value) = self.food {
            planet.resources.food = value;
        }
        if let Some(value) = self.energy {
            planet.resources.energy = value;
        }
        if let Some(value) = self.materials {
            planet.resources.materials = value;
        }
        planet
    }

    fn metrics(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("health", self.health),
            ("pollution", self.pollution),
            ("biodiversity", self.biodiversity),
            ("knowledge", self.knowledge),
            ("food", self.food),
            ("energy", self.energy),
            ("materials", self.materials),
        ]
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("scenario must define a name")]
    MissingName,
    #[error("scenario '{scenario}': max_actions_per_generation must be at least 1")]
    ZeroActionCap { scenario: String },
    #[error("scenario '{scenario}': scripted strategy needs at least one generation in `script`")]
    EmptyScript { scenario: String },
    #[error(
        "scenario '{scenario}': script generation {index} places {count} elements but only {cap} actions are allowed"
    )]
    ScriptOverCap {
        scenario: String,
        index: usize,
        count: usize,
        cap: u32,
    },
    #[error("scenario '{scenario}': initial {field} = {value} is outside [0, 100]")]
    MetricOutOfRange {
        scenario: String,
        field: &'static str,
        value: f64,
    },
    #[error("scenario '{scenario}': {generations} generations exceeds the limit of {limit}")]
    TooManyGenerations {
        scenario: String,
        generations: u64,
        limit: u64,
    },
    #[error("scenario '{scenario}': initial generation must be at least 1")]
    ZeroGeneration { scenario: String },
    #[error("scenario '{scenario}': unknown log level '{level}'")]
    InvalidLogLevel { scenario: String, level: String },
}

impl Scenario {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let scenario: Scenario =
            serde_yaml::from_str(text).context("Failed to parse scenario YAML")?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        let scenario = || self.name.clone();
        if self.name.trim().is_empty() {
            return Err(ScenarioError::MissingName);
        }
        if self.generations > MAX_GENERATIONS {
            return Err(ScenarioError::TooManyGenerations {
                scenario: scenario(),
                generations: self.generations,
                limit: MAX_GENERATIONS,
            });
        }
        if self.max_actions_per_generation == 0 {
            return Err(ScenarioError::ZeroActionCap {
                scenario: scenario(),
            });
        }
        if self.strategy == Strategy::Scripted && self.script.is_empty() {
            return Err(ScenarioError::EmptyScript {
                scenario: scenario(),
            });
        }
        for (index, row) in self.script.iter().enumerate() {
            if row.len() > self.max_actions_per_generation as usize {
                return Err(ScenarioError::ScriptOverCap {
                    scenario: scenario(),
                    index,
                    count: row.len(),
                    cap: self.max_actions_per_generation,
                });
            }
        }
        for (field, value) in self.initial.metrics() {
            if let Some(value) = value {
                if !(METRIC_MIN..=METRIC_MAX).contains(&value) {
                    return Err(ScenarioError::MetricOutOfRange {
                        scenario: scenario(),
                        field,
                        value,
                    });
                }
            }
        }
        if self.initial.generation == Some(0) {
            return Err(ScenarioError::ZeroGeneration {
                scenario: scenario(),
            });
        }
        if self.logging.level_filter().is_none() {
            return Err(ScenarioError::InvalidLogLevel {
                scenario: scenario(),
                level: self.logging.level.clone(),
            });
        }
        Ok(())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            max_actions_per_generation: self.max_actions_per_generation,
            initial_planet: self.initial.build(),
        }
    }

    pub fn generations(&self, override_generations: Option<u64>) -> u64 {
        override_generations.unwrap_or(self.generations)
    }

    /// The scripted kinds for the `index`-th generation played.
    pub fn script_row(&self, index: u64) -> &[ElementKind] {
        if self.script.is_empty() {
            return &[];
        }
        &self.script[(index % self.script.len() as u64) as usize]
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .validate()
            .with_context(|| format!("Invalid scenario {}", path.display()))?;
        Ok(scenario)
    }
}
