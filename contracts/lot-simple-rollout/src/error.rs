use thiserror::Error;

use cosmwasm_std::{Addr, StdError};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Only the trigger can start a rollout")]
    Unauthorized,

    #[error("Only coordinator can fulfill: have {have}, want {want}")]
    OnlyCoordinatorCanFulfill { have: Addr, want: Addr },

    #[error("Unknown request {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("Expected {expected} random words, got {got}")]
    InvalidRandomWords { expected: usize, got: usize },

    #[error("No failed callback for epoch {epoch}")]
    NoFailedCallback { epoch: u64 },
}
