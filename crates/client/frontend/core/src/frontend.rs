//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;
use runtime::Session;

/// Frontend abstraction for UI layers.
///
/// A frontend takes ownership of the [`Session`] for as long as the player
/// is playing: it translates raw input into [`game_core::InputEvent`]s,
/// submits them one at a time and presents the narration and render model
/// after each step.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the player exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, session: Session) -> Result<()>;
}
