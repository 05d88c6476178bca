use thiserror::Error;

use cosmwasm_std::{OverflowError, StdError, Uint128};

use crate::state::LotteryState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unknown state code {code}")]
    UnknownState { code: u8 },

    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: LotteryState, to: LotteryState },

    #[error("Lottery must be in state {expected} but is in {actual}")]
    WrongState {
        expected: LotteryState,
        actual: LotteryState,
    },

    #[error("A ticket needs exactly {expected} numbers in [1, {max}]")]
    InvalidNumbers { expected: usize, max: u32 },

    #[error("Ticket count must not be zero")]
    ZeroTickets,

    #[error("Only {remaining} tickets left")]
    SoldOut { remaining: u32 },

    #[error("Wrong payment: expected {expected}, got {got}")]
    WrongPayment { expected: Uint128, got: Uint128 },

    #[error("Expected {expected} results, got {got}")]
    InvalidResults { expected: usize, got: usize },

    #[error("Round {round} not found")]
    RoundNotFound { round: u64 },

    #[error("Round {round} was not drawn yet")]
    NotDrawn { round: u64 },

    #[error("Ticket {ticket_id} not found in round {round}")]
    TicketNotFound { round: u64, ticket_id: u64 },

    #[error("Ticket {ticket_id} of round {round} did not win")]
    NotAWinner { round: u64, ticket_id: u64 },

    #[error("Prize of ticket {ticket_id} in round {round} was already claimed")]
    AlreadyClaimed { round: u64, ticket_id: u64 },

    #[error("Round {round} has {shares} unclaimed winning shares")]
    UnclaimedPrizes { round: u64, shares: u32 },

    #[error("Epoch {epoch} is not newer than the last drawn epoch {last}")]
    StaleEpoch { epoch: u64, last: u64 },

    #[error("Pool of round {round} was already collected")]
    PoolAlreadyCollected { round: u64 },
}
