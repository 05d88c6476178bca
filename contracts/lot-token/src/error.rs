use thiserror::Error;

use cosmwasm_std::{Addr, OverflowError, StdError, Uint128};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Insufficient balance of {sender}: have {balance}, need {needed}")]
    InsufficientBalance {
        sender: Addr,
        balance: Uint128,
        needed: Uint128,
    },

    #[error("Insufficient allowance of {spender}: have {allowance}, need {needed}")]
    InsufficientAllowance {
        spender: Addr,
        allowance: Uint128,
        needed: Uint128,
    },

    #[error("Invalid receiver: {receiver}")]
    InvalidReceiver { receiver: Addr },

    #[error("Account {account} is not the owner")]
    OwnableUnauthorizedAccount { account: Addr },

    #[error("Amount must not be zero")]
    ZeroAmount,
}
