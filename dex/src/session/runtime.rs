use std::collections::VecDeque;

use rand::Rng;
use tracing::debug;

use super::command::Command;
use super::reducer::reduce;
use super::state::SessionState;
use crate::directory::Directory;
use crate::engine::Engine;

/// A running game session.
///
/// Commands go through [`reduce`]; any effects are executed one after
/// another on the [`Engine`] and their results reduced back in before
/// `dispatch` returns.
pub struct Session<D, R> {
    engine: Engine<D>,
    rng: R,
    state: SessionState,
}

impl<D: Directory, R: Rng + Send> Session<D, R> {
    pub fn new(directory: D, rng: R) -> Self {
        Self {
            engine: Engine::new(directory),
            rng,
            state: SessionState::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn engine(&self) -> &Engine<D> {
        &self.engine
    }

    /// Run `command` to completion and return the resulting state
    pub async fn dispatch(&mut self, command: Command) -> &SessionState {
        let mut pending = VecDeque::from([command]);

        while let Some(command) = pending.pop_front() {
            let (next, effects) = reduce(&self.state, command);
            self.state = next;

            for effect in effects {
                debug!(?effect, "Running effect");
                let completion = self.engine.run(effect, &mut self.rng).await;
                pending.push_back(completion);
            }
        }

        &self.state
    }
}
