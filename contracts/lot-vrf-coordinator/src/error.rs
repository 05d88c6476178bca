use thiserror::Error;

use cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Request {request_id} not found. It was never made or is already fulfilled.")]
    RequestNotFound { request_id: u64 },

    #[error("Number of words must be between 1 and {max}, got {got}")]
    InvalidNumWords { got: u32, max: u32 },

    #[error("Request confirmations must not exceed {max}, got {got}")]
    InvalidRequestConfirmations { got: u16, max: u16 },

    #[error("Expected {expected} random words, got {got}")]
    InvalidRandomWords { expected: u32, got: usize },
}
