use lib::agent::FALLBACK_MOVE;
use lib::wire::{MoveResponse, Turn};
use lib::{decode_state, Agent, Direction, GameState};
use tracing::{error, info, instrument};

/// Answers turn requests with the configured agent.
pub struct Engine {
    agent: Box<dyn Agent>,
}

impl Engine {
    pub fn new(agent: Box<dyn Agent>) -> Self {
        Self { agent }
    }

    pub fn agent_name(&self) -> &str {
        self.agent.name()
    }

    pub fn calc_move(&self, state: &GameState) -> color_eyre::Result<Direction> {
        let turn = Turn::try_from(state)?;
        Ok(self.agent.choose_move(&turn))
    }

    /// Decodes a `/move` body and picks a move. The server always has to answer,
    /// so a broken request gets the fallback move.
    #[instrument(skip_all, fields(agent = self.agent.name()))]
    pub fn respond(&self, body: String) -> MoveResponse {
        let direction = decode_state(body)
            .and_then(|state| {
                let direction = self.calc_move(&state)?;
                info!(game_id = %state.game.id, turn = state.turn, %direction, "move chosen");
                Ok(direction)
            })
            .unwrap_or_else(|err| {
                error!("could not compute a move: {err:?}");
                FALLBACK_MOVE
            });
        MoveResponse {
            direction,
            shout: None,
        }
    }
}
