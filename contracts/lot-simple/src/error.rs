use thiserror::Error;

use cosmwasm_std::{Addr, StdError};

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("VRF coordinator is not set")]
    CoordinatorUnset,

    #[error("VRF coordinator is already set and cannot be changed")]
    CoordinatorAlreadySet,

    #[error("Only coordinator can fulfill: have {have}, want {want}")]
    OnlyCoordinatorCanFulfill { have: Addr, want: Addr },

    #[error("Direct fulfillment is only available in test mode")]
    TestModeDisabled,

    #[error("Roll in progress for {roller}")]
    RollInProgress { roller: Addr },

    #[error("Already rolled for {roller}")]
    AlreadyRolled { roller: Addr },

    #[error("Unknown request {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("Received no random words")]
    MissingRandomWords,
}
