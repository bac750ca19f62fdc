//! Verbs aimed at a neighbouring tile: get, open, close, lock and unlock.
//!
//! Starting one of these verbs looks for eligible targets around the actor.
//! No target is narrated and costs nothing; a single target is acted on at
//! once; several targets put the machine into directional mode with a
//! continuation that [`complete`] finishes.

use arrayvec::ArrayVec;

use crate::action::{
    ActionError, ActionTransition, CardinalDirection, Continuation, DirectionalVerb, Refusal,
    Resolution, perform,
};
use crate::error::ErrorContext;
use crate::state::{
    EntityId, EntityKind, FixtureRejection, GameState, Openable, Position, StateError,
};

// ============================================================================
// Fixture verbs
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixtureVerb {
    Open,
    Close,
    Lock,
    Unlock,
}

impl FixtureVerb {
    pub fn from_directional(verb: DirectionalVerb) -> Option<Self> {
        match verb {
            DirectionalVerb::Get => None,
            DirectionalVerb::Open => Some(Self::Open),
            DirectionalVerb::Close => Some(Self::Close),
            DirectionalVerb::Lock => Some(Self::Lock),
            DirectionalVerb::Unlock => Some(Self::Unlock),
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
        }
    }

    /// Whether a fixture in this state would be offered as a target.
    pub fn is_candidate(self, fixture: &dyn Openable) -> bool {
        match self {
            Self::Open => fixture.is_closed(),
            Self::Close => fixture.is_open(),
            Self::Lock => fixture.has_lock() && fixture.is_closed() && !fixture.is_locked(),
            Self::Unlock => fixture.is_locked(),
        }
    }

    fn run(self, fixture: &mut dyn Openable) -> Result<(), FixtureRejection> {
        match self {
            Self::Open => fixture.open(),
            Self::Close => fixture.close(),
            Self::Lock => fixture.lock(),
            Self::Unlock => fixture.unlock(),
        }
    }
}

/// Opens, closes, locks or unlocks a fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixtureAction {
    pub actor: EntityId,
    pub fixture: EntityId,
    pub verb: FixtureVerb,
}

impl ActionTransition for FixtureAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let entity = state.entity(self.fixture)?;
        let EntityKind::Fixture(mut trial) = entity.kind else {
            return Err(StateError::NotAFixture(self.fixture).into());
        };
        let openable = trial.as_openable_mut();
        let noun = openable.noun();
        let refuse = |rejection: FixtureRejection| {
            Refusal::unmet(rejection.message(noun, self.verb.phrase()))
        };

        self.verb.run(openable).map_err(refuse)?;

        if self.verb == FixtureVerb::Close
            && let Some(position) = entity.position()
            && (state.occupant_at(position).is_some() || state.item_at(position).is_some())
        {
            return Err(refuse(FixtureRejection::Obstructed));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        let context = ErrorContext::new(state.turn, self.actor);
        let openable = state
            .entity_mut(self.fixture)?
            .as_openable_mut()
            .ok_or(StateError::NotAFixture(self.fixture))?;
        self.verb
            .run(openable)
            .map_err(|_| ActionError::drift("fixture", context))?;
        let noun = openable.noun();

        let phrase = self.verb.phrase();
        state.report(
            self.actor,
            format!("You {phrase} the {noun}."),
            |who| format!("{who} {phrase}s the {noun}."),
        );
        Ok(())
    }
}

// ============================================================================
// Picking up
// ============================================================================

/// Moves the item lying at `position` into the actor's inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickUpAction {
    pub actor: EntityId,
    pub position: Position,
}

impl ActionTransition for PickUpAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let Some(item) = state.item_at(self.position) else {
            return Err(Refusal::unmet("There is nothing there to pick up."));
        };
        let item = state.entity(item)?;
        if !state.actor(self.actor)?.inventory.can_hold(item.weight) {
            return Err(Refusal::unmet(format!(
                "You have no room for {}.",
                item.definite_name()
            )));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        let item = state.pick_up(self.actor, self.position)?;
        let name = state.entity(item)?.definite_name();
        state.report(
            self.actor,
            format!("You pick up {name}."),
            |who| format!("{who} picks up {name}."),
        );
        Ok(())
    }
}

// ============================================================================
// Disambiguation
// ============================================================================

fn is_candidate(state: &GameState, verb: DirectionalVerb, position: Position) -> bool {
    match FixtureVerb::from_directional(verb) {
        None => state.item_at(position).is_some(),
        Some(fixture_verb) => state
            .fixture_at(position)
            .and_then(|id| state.entities.get(id))
            .and_then(|entity| entity.as_openable())
            .is_some_and(|openable| fixture_verb.is_candidate(openable)),
    }
}

/// Applies `verb` to whatever sits at `target`, regardless of its state.
///
/// Returns `None` when the tile has nothing the verb could act on.
fn act_on(
    state: &mut GameState,
    verb: DirectionalVerb,
    actor: EntityId,
    target: Position,
) -> Result<Option<bool>, ActionError> {
    match FixtureVerb::from_directional(verb) {
        None => {
            if state.item_at(target).is_none() {
                return Ok(None);
            }
            perform(state, &PickUpAction { actor, position: target }).map(Some)
        }
        Some(fixture_verb) => {
            let Some(fixture) = state.fixture_at(target) else {
                return Ok(None);
            };
            let action = FixtureAction {
                actor,
                fixture,
                verb: fixture_verb,
            };
            perform(state, &action).map(Some)
        }
    }
}

/// Starts a directional verb from the actor's current tile.
pub fn begin(
    state: &mut GameState,
    actor: EntityId,
    verb: DirectionalVerb,
) -> Result<Resolution, ActionError> {
    let origin = state.standing_position(actor)?;

    if verb == DirectionalVerb::Get && state.item_at(origin).is_some() {
        let done = perform(state, &PickUpAction { actor, position: origin })?;
        return Ok(Resolution::immediate(done));
    }

    let candidates: ArrayVec<Position, 8> = origin
        .neighbors()
        .filter(|position| is_candidate(state, verb, *position))
        .collect();

    match candidates.as_slice() {
        [] => {
            state.tell(
                actor,
                format!("There is nothing here for you to {}.", verb.phrase()),
            );
            Ok(Resolution::immediate(false))
        }
        [target] => {
            let done = act_on(state, verb, actor, *target)?.unwrap_or(false);
            Ok(Resolution::immediate(done))
        }
        _ => {
            state.tell(actor, format!("Which direction to {} in?", verb.phrase()));
            Ok(Resolution::pending(Continuation::Directional {
                verb,
                actor,
                origin,
            }))
        }
    }
}

/// Finishes a pending directional verb with the chosen direction.
pub fn complete(
    state: &mut GameState,
    verb: DirectionalVerb,
    actor: EntityId,
    origin: Position,
    direction: CardinalDirection,
) -> Result<Resolution, ActionError> {
    let target = direction.step(origin);
    match act_on(state, verb, actor, target)? {
        Some(done) => Ok(Resolution::immediate(done)),
        None => {
            state.tell(
                actor,
                format!("There is nothing there to {}.", verb.phrase()),
            );
            Ok(Resolution::immediate(false))
        }
    }
}
