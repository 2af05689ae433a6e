//! The per-generation pipeline. Each system folds one kind of long-running
//! influence into the planet; order matters because every step clamps.

mod education;
mod growth;
mod healing;
mod industry;
mod research;
mod upkeep;

pub use education::EducationSystem;
pub use growth::GrowthSystem;
pub use healing::HealingSystem;
pub use industry::IndustrySystem;
pub use research::ResearchSystem;
pub use upkeep::UpkeepSystem;

use crate::engine::System;

/// The canonical generation pipeline in the order it must run.
pub fn standard_pipeline() -> Vec<Box<dyn System>> {
    vec![
        Box::new(GrowthSystem::new()),
        Box::new(IndustrySystem::new()),
        Box::new(ResearchSystem::new()),
        Box::new(EducationSystem::new()),
        Box::new(HealingSystem::new()),
        Box::new(UpkeepSystem::new()),
    ]
}
