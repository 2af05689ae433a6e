use log::{debug, info, trace};

use crate::census::ElementCensus;
use crate::components::ElementKind;
use crate::effects::effect_for;
use crate::emotion::{calculate_emotion, Emotion};
use crate::health::calculate_health;
use crate::snapshot::EngineSnapshot;
use crate::systems;
use crate::world::{ElementId, PlacedElement, PlanetState, Position};

pub const DEFAULT_MAX_ACTIONS_PER_GENERATION: u32 = 5;

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub max_actions_per_generation: u32,
    pub initial_planet: PlanetState,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_actions_per_generation: DEFAULT_MAX_ACTIONS_PER_GENERATION,
            initial_planet: PlanetState::initial(),
        }
    }
}

pub struct EngineBuilder {
    settings: EngineSettings,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            systems: Vec::new(),
        }
    }

    /// Builder preloaded with the canonical generation pipeline.
    pub fn standard(settings: EngineSettings) -> Self {
        Self {
            settings,
            systems: systems::standard_pipeline(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn push_system(&mut self, system: impl System + 'static) {
        self.systems.push(Box::new(system));
    }

    pub fn build(self) -> PlanetEngine {
        let planet = self.settings.initial_planet;
        PlanetEngine {
            emotion: calculate_emotion(planet.health),
            planet,
            placed: Vec::new(),
            census: ElementCensus::default(),
            selected: None,
            actions_this_generation: 0,
            score: 0,
            playing: false,
            show_tutorial: true,
            next_element: 0,
            listeners: Vec::new(),
            next_subscription: 0,
            dispatching: 0,
            systems: self.systems,
            settings: self.settings,
        }
    }
}

pub struct GenerationContext<'a> {
    /// The generation being entered.
    pub generation: u64,
    pub census: &'a ElementCensus,
}

/// One step of the generation pipeline.
pub trait System {
    fn name(&self) -> &str;
    fn run(&mut self, ctx: &GenerationContext<'_>, planet: &mut PlanetState);
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ElementSelected(Option<ElementKind>),
    ElementPlaced {
        element: PlacedElement,
        score_gained: u64,
    },
    GenerationAdvanced {
        generation: u64,
    },
    HealthRefreshed,
    GameStarted,
    GameReset,
    TutorialClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&EngineEvent, &PlanetEngine)>;

struct Listener {
    id: SubscriptionId,
    callback: Callback,
}

/// Owns the planet and the play session. Every mutation goes through the
/// methods below and is followed by a synchronous listener notification.
pub struct PlanetEngine {
    settings: EngineSettings,
    systems: Vec<Box<dyn System>>,
    planet: PlanetState,
    emotion: Emotion,
    placed: Vec<PlacedElement>,
    census: ElementCensus,
    selected: Option<ElementKind>,
    actions_this_generation: u32,
    score: u64,
    playing: bool,
    show_tutorial: bool,
    next_element: u64,
    listeners: Vec<Listener>,
    next_subscription: u64,
    /// Listeners taken out of `listeners` while a notification is running.
    dispatching: usize,
}

impl Default for PlanetEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanetEngine {
    /// Engine with default settings and the standard generation pipeline.
    pub fn new() -> Self {
        EngineBuilder::standard(EngineSettings::default()).build()
    }

    pub fn planet(&self) -> &PlanetState {
        &self.planet
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    pub fn placed_elements(&self) -> &[PlacedElement] {
        &self.placed
    }

    pub fn census(&self) -> &ElementCensus {
        &self.census
    }

    pub fn selected_element(&self) -> Option<ElementKind> {
        self.selected
    }

    pub fn actions_this_generation(&self) -> u32 {
        self.actions_this_generation
    }

    pub fn max_actions_per_generation(&self) -> u32 {
        self.settings.max_actions_per_generation
    }

    pub fn actions_remaining(&self) -> u32 {
        self.settings
            .max_actions_per_generation
            .saturating_sub(self.actions_this_generation)
    }

    /// Whether the player has used up this generation's actions. Advancing is
    /// still allowed at any time; this is the gate the UI shows.
    pub fn can_advance_generation(&self) -> bool {
        self.actions_this_generation >= self.settings.max_actions_per_generation
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn show_tutorial(&self) -> bool {
        self.show_tutorial
    }

    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::capture(self)
    }

    pub fn select_element(&mut self, kind: Option<ElementKind>) {
        self.selected = kind;
        self.notify(EngineEvent::ElementSelected(kind));
    }

    /// Places the selected element at `position`. Without a selection, or
    /// once the generation's actions are spent, nothing happens and `None`
    /// is returned.
    pub fn place_element(&mut self, position: Position) -> Option<ElementId> {
        let Some(kind) = self.selected else {
            debug!("placement ignored: no element selected");
            return None;
        };
        if self.actions_this_generation >= self.settings.max_actions_per_generation {
            debug!(
                "placement of {kind} ignored: {} actions already used this generation",
                self.actions_this_generation
            );
            return None;
        }

        let id = ElementId::new(self.next_element);
        self.next_element += 1;
        let element = PlacedElement {
            id,
            kind,
            position,
            generation_placed: self.planet.generation,
        };

        let mut working = self.planet;
        effect_for(kind).apply(&mut working);
        self.settle(working);

        self.placed.push(element.clone());
        self.census.record(kind);
        self.actions_this_generation += 1;
        let score_gained = self.planet.health.floor() as u64;
        self.score += score_gained;
        debug!(
            "placed {element} (health {:.1}, +{score_gained} score)",
            self.planet.health
        );

        self.notify(EngineEvent::ElementPlaced {
            element,
            score_gained,
        });
        Some(id)
    }

    /// Moves to the next generation, applying the long-running influence of
    /// every element placed so far. Returns the new generation number.
    pub fn advance_generation(&mut self) -> u64 {
        let mut working = self.planet;
        working.generation += 1;
        let ctx = GenerationContext {
            generation: working.generation,
            census: &self.census,
        };
        for system in self.systems.iter_mut() {
            trace!("running {} for generation {}", system.name(), ctx.generation);
            system.run(&ctx, &mut working);
        }
        self.settle(working);
        self.actions_this_generation = 0;

        let generation = self.planet.generation;
        info!(
            "generation {generation}: health {:.1} ({}), pollution {:.1}, biodiversity {:.1}, knowledge {:.1}",
            self.planet.health,
            self.emotion,
            self.planet.pollution,
            self.planet.biodiversity,
            self.planet.knowledge
        );
        self.notify(EngineEvent::GenerationAdvanced { generation });
        generation
    }

    /// Re-derives health and emotion from the current metrics.
    pub fn refresh_health(&mut self) {
        let working = self.planet;
        self.settle(working);
        self.notify(EngineEvent::HealthRefreshed);
    }

    pub fn start_game(&mut self) {
        self.playing = true;
        self.notify(EngineEvent::GameStarted);
    }

    pub fn reset_game(&mut self) {
        self.planet = self.settings.initial_planet;
        self.emotion = calculate_emotion(self.planet.health);
        self.placed.clear();
        self.census.clear();
        self.selected = None;
        self.actions_this_generation = 0;
        self.score = 0;
        self.playing = false;
        self.show_tutorial = true;
        info!("game reset");
        self.notify(EngineEvent::GameReset);
    }

    pub fn close_tutorial(&mut self) {
        self.show_tutorial = false;
        self.notify(EngineEvent::TutorialClosed);
    }

    /// Registers a listener called after every state change, in subscription
    /// order, with a read-only view of the engine.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&EngineEvent, &PlanetEngine) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push(Listener {
            id,
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    /// Subscribed listeners, including those being called right now.
    pub fn listener_count(&self) -> usize {
        self.listeners.len() + self.dispatching
    }

    fn settle(&mut self, mut working: PlanetState) {
        working.health = calculate_health(&working);
        self.emotion = calculate_emotion(working.health);
        self.planet = working;
    }

    fn notify(&mut self, event: EngineEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let mut listeners = std::mem::take(&mut self.listeners);
        self.dispatching = listeners.len();
        for listener in listeners.iter_mut() {
            trace!("notifying listener {:?} of {:?}", listener.id, event);
            (listener.callback)(&event, self);
        }
        self.dispatching = 0;
        self.listeners = listeners;
    }
}
