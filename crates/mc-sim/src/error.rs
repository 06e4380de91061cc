use mc_cart::CartError;
use mc_core::{CartId, Position, Tick};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{cart} placed at {position}, which is not a straight segment")]
    InvalidPlacement { cart: CartId, position: Position },

    #[error("cart fault: {0}")]
    Fault(#[from] CartError),

    #[error("simulation already finished at {tick}")]
    Finished { tick: Tick },
}

pub type SimResult<T> = Result<T, SimError>;
