use tiny_planet::{
    calculate_health, EngineBuilder, EngineSettings, ElementKind, Emotion,
    PlanetEngine, PlanetState, Position,
};

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn equator() -> Position {
    Position::new(1.0, 0.0, 0.0)
}

#[test]
fn placing_a_tree_from_the_initial_planet() {
    let mut engine = PlanetEngine::new();
    engine.select_element(Some(ElementKind::Tree));
    engine.place_element(equator()).expect("tree placed");

    let planet = engine.planet();
    approx(planet.biodiversity, 35.0);
    approx(planet.pollution, 7.0);
    approx(planet.knowledge, 20.0);
    approx(planet.health, 63.1);
    assert_eq!(engine.emotion(), Emotion::Content);
    assert_eq!(engine.score(), 63);
    assert_eq!(engine.actions_this_generation(), 1);
}

#[test]
fn placing_a_factory_from_the_initial_planet() {
    let mut engine = PlanetEngine::new();
    engine.select_element(Some(ElementKind::Factory));
    engine.place_element(equator()).expect("factory placed");

    let planet = engine.planet();
    approx(planet.pollution, 18.0);
    approx(planet.health, 53.4);
    approx(planet.resources.energy, 60.0);
    approx(planet.resources.materials, 55.0);
    approx(planet.resources.food, 50.0);
    assert_eq!(engine.emotion(), Emotion::Worried);
    assert_eq!(engine.score(), 53);
}

#[test]
fn direct_health_effects_are_superseded_by_the_formula() {
    let mut engine = PlanetEngine::new();
    engine.select_element(Some(ElementKind::Healer));
    engine.place_element(equator());

    // Healer carries +8 health, but only its biodiversity shows up.
    approx(engine.planet().biodiversity, 32.0);
    approx(engine.planet().health, calculate_health(engine.planet()));
    approx(engine.planet().health, 59.8);
}

#[test]
fn placement_without_selection_changes_nothing() {
    let mut engine = PlanetEngine::new();
    let before = engine.snapshot();
    assert_eq!(engine.place_element(equator()), None);
    assert_eq!(engine.snapshot(), before);

    engine.select_element(Some(ElementKind::Farmer));
    engine.place_element(equator());
    engine.select_element(None);
    let before = engine.snapshot();
    assert_eq!(engine.place_element(equator()), None);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn action_cap_turns_further_placements_into_no_ops() {
    let mut engine = PlanetEngine::new();
    engine.select_element(Some(ElementKind::Educator));
    for _ in 0..engine.max_actions_per_generation() {
        assert!(engine.place_element(equator()).is_some());
    }
    assert!(engine.can_advance_generation());
    assert_eq!(engine.actions_remaining(), 0);

    let capped = engine.snapshot();
    assert_eq!(engine.place_element(equator()), None);
    assert_eq!(engine.place_element(equator()), None);
    assert_eq!(engine.snapshot(), capped);

    engine.advance_generation();
    assert!(engine.place_element(equator()).is_some());
}

#[test]
fn custom_action_cap_is_respected() {
    let settings = EngineSettings {
        max_actions_per_generation: 2,
        ..EngineSettings::default()
    };
    let mut engine = EngineBuilder::standard(settings).build();
    engine.select_element(Some(ElementKind::Mountain));
    assert!(engine.place_element(equator()).is_some());
    assert!(engine.place_element(equator()).is_some());
    assert!(engine.place_element(equator()).is_none());
    assert_eq!(engine.placed_elements().len(), 2);
}

#[test]
fn placement_records_position_and_generation_as_given() {
    let mut engine = PlanetEngine::new();
    engine.advance_generation();
    engine.advance_generation();
    let off_sphere = Position::new(0.3, -2.0, 7.5);

    engine.select_element(Some(ElementKind::Builder));
    let id = engine.place_element(off_sphere).unwrap();

    let placed = engine.placed_elements().last().unwrap();
    assert_eq!(placed.id, id);
    assert_eq!(placed.kind, ElementKind::Builder);
    assert_eq!(placed.position, off_sphere);
    assert_eq!(placed.generation_placed, 3);
    assert_eq!(engine.planet().generation, 3);
}

#[test]
fn placements_keep_insertion_order_and_duplicates() {
    let mut engine = PlanetEngine::new();
    let order = [
        ElementKind::Tree,
        ElementKind::Tree,
        ElementKind::River,
        ElementKind::Tree,
    ];
    for kind in order {
        engine.select_element(Some(kind));
        engine.place_element(equator());
    }
    let kinds: Vec<_> = engine.placed_elements().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, order);
    let mut ids: Vec<_> = engine.placed_elements().iter().map(|e| e.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn metrics_saturate_instead_of_overflowing() {
    let settings = EngineSettings {
        max_actions_per_generation: 50,
        initial_planet: PlanetState {
            pollution: 1.0,
            knowledge: 95.0,
            ..PlanetState::initial()
        },
    };
    let mut engine = EngineBuilder::standard(settings).build();
    engine.select_element(Some(ElementKind::Scientist));
    engine.place_element(equator());
    assert_eq!(engine.planet().pollution, 0.0);
    assert_eq!(engine.planet().knowledge, 100.0);

    engine.select_element(Some(ElementKind::Builder));
    for _ in 0..20 {
        engine.place_element(equator());
    }
    assert_eq!(engine.planet().resources.energy, 10.0);
    assert_eq!(engine.planet().resources.materials, 0.0);
    assert!(engine.planet().is_within_bounds());
}
