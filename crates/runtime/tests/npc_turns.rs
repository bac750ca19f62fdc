use game_content::{LevelLoader, builtin_catalog};
use game_core::state::Openable;
use game_core::{
    CardinalDirection, EntityId, GameConfig, GameState, InputEvent, Position, ReportAudience,
};
use runtime::{NpcBehavior, Session};

fn build(level: &str) -> Session {
    let config = GameConfig::default();
    let state = LevelLoader::parse(level)
        .unwrap()
        .build(&builtin_catalog().unwrap(), &config)
        .unwrap();
    Session::builder().initial_state(state).build().unwrap()
}

fn npc_at(session: &Session, position: Position) -> EntityId {
    session.state().occupant_at(position).unwrap()
}

fn door_open(session: &Session, position: Position) -> bool {
    let state = session.state();
    let door = state.fixture_at(position).unwrap();
    state.entity(door).unwrap().as_openable().unwrap().is_open()
}

#[test]
fn wanderer_walks_until_blocked_then_turns() {
    let mut session = build(
        r######"(
            width: 5,
            height: 4,
            rows: ["#####", "#...#", "#...#", "#####"],
            entry: (x: 1, y: 2),
            npcs: [(name: "grunt", at: (x: 3, y: 2), behavior: Wander)],
        )"######,
    );
    let grunt = npc_at(&session, Position::new(3, 2));

    session.submit(InputEvent::Wait).unwrap();
    assert_eq!(
        session.state().standing_position(grunt).unwrap(),
        Position::new(3, 1)
    );

    // North, north-east, east and south-east are all walls.
    for _ in 0..4 {
        session.submit(InputEvent::Wait).unwrap();
        assert_eq!(
            session.state().standing_position(grunt).unwrap(),
            Position::new(3, 1)
        );
    }

    session.submit(InputEvent::Wait).unwrap();
    assert_eq!(
        session.state().standing_position(grunt).unwrap(),
        Position::new(3, 2)
    );
    assert!(session.narration().is_empty());
}

#[test]
fn idle_npcs_stay_put() {
    let mut session = build(
        r#"(
            width: 4,
            height: 1,
            rows: ["...."],
            entry: (x: 0, y: 0),
            npcs: [(name: "grunt", at: (x: 3, y: 0), behavior: Idle)],
        )"#,
    );
    let grunt = npc_at(&session, Position::new(3, 0));
    for _ in 0..5 {
        session.submit(InputEvent::Wait).unwrap();
    }
    assert_eq!(
        session.state().standing_position(grunt).unwrap(),
        Position::new(3, 0)
    );
    assert_eq!(session.state().turn.0, 6);
}

#[test]
fn npcs_in_view_are_narrated_in_the_third_person() {
    let mut session = build(
        r######"(
            width: 5,
            height: 4,
            rows: ["#+###", "#...#", "#...#", "#####"],
            entry: (x: 3, y: 2),
            npcs: [(name: "grunt", at: (x: 1, y: 1), behavior: Wander)],
        )"######,
    );
    let grunt = npc_at(&session, Position::new(1, 1));
    assert_eq!(
        session.state().entity(grunt).unwrap().report,
        ReportAudience::Observer
    );

    session.submit(InputEvent::Wait).unwrap();
    assert!(door_open(&session, Position::new(1, 0)));
    assert_eq!(session.narration().last(), Some("The grunt opens the door."));
}

#[test]
fn npcs_out_of_view_act_silently() {
    let mut session = build(
        r########"(
            width: 7,
            height: 3,
            rows: ["#+#####", "#.#...#", "#######"],
            entry: (x: 4, y: 1),
            npcs: [(name: "grunt", at: (x: 1, y: 1), behavior: Wander)],
        )"########,
    );
    let grunt = npc_at(&session, Position::new(1, 1));
    assert_eq!(
        session.state().entity(grunt).unwrap().report,
        ReportAudience::Silent
    );

    session.submit(InputEvent::Wait).unwrap();
    assert!(door_open(&session, Position::new(1, 0)));
    assert!(session.narration().is_empty());
}

#[test]
fn npcs_do_not_act_on_free_inputs() {
    let mut session = build(
        r#"(
            width: 4,
            height: 3,
            rows: ["....", "....", "...."],
            entry: (x: 0, y: 0),
            npcs: [(name: "grunt", at: (x: 3, y: 2), behavior: Wander)],
        )"#,
    );
    let grunt = npc_at(&session, Position::new(3, 2));

    session.submit(InputEvent::ShowInventory(None)).unwrap();
    session.submit(InputEvent::HideInventory).unwrap();
    session.submit(InputEvent::Open).unwrap();
    assert_eq!(
        session.state().standing_position(grunt).unwrap(),
        Position::new(3, 2)
    );
    assert_eq!(session.state().turn.0, 1);
}

struct Scripted {
    steps: Vec<InputEvent>,
}

impl NpcBehavior for Scripted {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn decide(&mut self, _actor: EntityId, _state: &GameState) -> Option<InputEvent> {
        self.steps.pop()
    }
}

#[test]
fn builder_overrides_default_behaviors() {
    let level = r#"(
        width: 4,
        height: 1,
        rows: ["...."],
        entry: (x: 0, y: 0),
        npcs: [(name: "grunt", at: (x: 3, y: 0), behavior: Idle)],
    )"#;
    let config = GameConfig::default();
    let state = LevelLoader::parse(level)
        .unwrap()
        .build(&builtin_catalog().unwrap(), &config)
        .unwrap();
    let grunt = state.occupant_at(Position::new(3, 0)).unwrap();

    let mut session = Session::builder()
        .initial_state(state)
        .behavior(grunt, Scripted {
            steps: vec![InputEvent::Move(CardinalDirection::West)],
        })
        .build()
        .unwrap();
    session.submit(InputEvent::Wait).unwrap();
    assert_eq!(
        session.state().standing_position(grunt).unwrap(),
        Position::new(2, 0)
    );

    session.submit(InputEvent::Wait).unwrap();
    assert_eq!(
        session.state().standing_position(grunt).unwrap(),
        Position::new(2, 0)
    );
}
