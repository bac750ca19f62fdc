//! Turn-synchronous game session.
//!
//! A [`Session`] owns the game state and the interaction state machine. Each
//! [`Session::submit`] runs to completion: the player's input is resolved, and
//! if it spent a turn every NPC acts, the turn counter advances and the
//! player's field of view is recomputed.

use std::collections::BTreeMap;

use game_core::{
    Behavior, EntityId, FieldOfView, GameConfig, GameState, InputEvent, Interaction,
    InteractionMode, Narration, Position, RenderModel, ReportAudience, Step, compute_visible,
    resolve,
};

use crate::api::{Result, RuntimeError};
use crate::providers::{NpcBehavior, behavior_for};

/// What a submitted input led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continue { turn_elapsed: bool },
    Exit,
}

pub struct Session {
    state: GameState,
    config: GameConfig,
    interaction: Interaction,
    view: FieldOfView,
    npcs: BTreeMap<EntityId, Box<dyn NpcBehavior>>,
}

impl Session {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn narration(&self) -> &Narration {
        &self.state.narration
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode
    }

    /// The player's current field of view.
    pub fn view(&self) -> &FieldOfView {
        &self.view
    }

    pub fn render_model(&self) -> Result<RenderModel> {
        Ok(RenderModel::build(
            &self.state,
            &self.view,
            self.interaction.mode,
            EntityId::PLAYER,
        )?)
    }

    /// Feeds one player input through the state machine.
    pub fn submit(&mut self, input: InputEvent) -> Result<StepOutcome> {
        let _span = tracing::debug_span!("submit", ?input, turn = self.state.turn.0).entered();

        let step = resolve(
            &mut self.state,
            &self.config,
            EntityId::PLAYER,
            self.interaction,
            input,
        )?;
        let resolution = match step {
            Step::Exit => {
                tracing::info!("player left the game");
                return Ok(StepOutcome::Exit);
            }
            Step::Continue(resolution) => resolution,
        };

        if resolution.mode != self.interaction.mode {
            tracing::debug!(
                from = self.interaction.mode.label(),
                to = resolution.mode.label(),
                "interaction mode changed"
            );
        }
        self.interaction.advance(resolution);

        if resolution.turn_elapsed {
            self.end_turn()?;
        }
        Ok(StepOutcome::Continue {
            turn_elapsed: resolution.turn_elapsed,
        })
    }

    fn end_turn(&mut self) -> Result<()> {
        self.refresh_view()?;
        self.run_npcs()?;
        let turn = self.state.advance_turn();
        tracing::debug!(turn = turn.0, "turn advanced");
        self.refresh_view()
    }

    fn run_npcs(&mut self) -> Result<()> {
        for (&npc, behavior) in self.npcs.iter_mut() {
            if self.state.entity(npc)?.position().is_none() {
                continue;
            }
            let Some(input) = behavior.decide(npc, &self.state) else {
                continue;
            };
            let step = resolve(
                &mut self.state,
                &self.config,
                npc,
                Interaction::default(),
                input,
            )?;
            let acted = step.resolution().is_some_and(|r| r.turn_elapsed);
            tracing::trace!(npc = npc.0, behavior = behavior.name(), ?input, acted, "npc turn");
            behavior.outcome(acted);
        }
        Ok(())
    }

    /// Recomputes the player's view and lets NPCs inside it be observed.
    fn refresh_view(&mut self) -> Result<()> {
        let origin = self.state.standing_position(EntityId::PLAYER)?;
        let radius = self.state.actor(EntityId::PLAYER)?.view_radius;
        self.view = compute_visible(&mut self.state, origin, radius);

        for &npc in self.npcs.keys() {
            let visible = self
                .state
                .entity(npc)?
                .position()
                .is_some_and(|position| self.view.is_visible(position));
            self.state.entity_mut(npc)?.report = if visible {
                ReportAudience::Observer
            } else {
                ReportAudience::Silent
            };
        }
        tracing::trace!(visible = self.view.len(), "view refreshed");
        Ok(())
    }
}

pub struct SessionBuilder {
    config: GameConfig,
    state: Option<GameState>,
    behaviors: BTreeMap<EntityId, Box<dyn NpcBehavior>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            state: None,
            behaviors: BTreeMap::new(),
        }
    }

    /// Override game configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Loads the built-in level with the configured settings.
    pub fn builtin_level(mut self) -> Result<Self> {
        let state = game_content::builtin_level(&self.config).map_err(RuntimeError::Content)?;
        self.state = Some(state);
        Ok(self)
    }

    /// Drives `npc` with `behavior` instead of the default for its tag.
    pub fn behavior(mut self, npc: EntityId, behavior: impl NpcBehavior + 'static) -> Self {
        self.behaviors.insert(npc, Box::new(behavior));
        self
    }

    /// Build the session
    pub fn build(mut self) -> Result<Session> {
        let state = self.state.ok_or(RuntimeError::MissingState)?;
        if state.player().is_none() {
            return Err(RuntimeError::MissingPlayer);
        }

        let mut npcs = BTreeMap::new();
        for entity in state.entities.iter() {
            let Some(actor) = entity.as_actor() else {
                continue;
            };
            if entity.id.is_player() || actor.behavior == Behavior::Player {
                continue;
            }
            let behavior = match self.behaviors.remove(&entity.id) {
                Some(behavior) => Some(behavior),
                None => behavior_for(actor.behavior),
            };
            if let Some(behavior) = behavior {
                npcs.insert(entity.id, behavior);
            }
        }
        tracing::info!(npcs = npcs.len(), "session ready");

        let mut session = Session {
            view: FieldOfView::empty(
                state
                    .player()
                    .and_then(|player| player.position())
                    .unwrap_or(Position::new(0, 0)),
            ),
            state,
            config: self.config,
            interaction: Interaction::default(),
            npcs,
        };
        session.refresh_view()?;
        Ok(session)
    }
}
