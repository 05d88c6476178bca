use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::TokenInfo;

#[cw_serde]
pub struct InstantiateMsg {
    /// Supply in base units. Minted to the instantiator.
    pub initial_supply: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    /// Sets the allowance of `spender` over the sender's tokens, replacing the previous one
    Approve {
        spender: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Buys `amount` lottery tickets carrying `numbers`.
    ///
    /// The price is queried from the lottery and paid from the sender's balance.
    Buy {
        lottery: String,
        amount: u32,
        numbers: Vec<u32>,
    },
    TransferOwnership {
        new_owner: String,
    },
    RenounceOwnership {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(OwnershipResponse)]
    Ownership {},
}

pub type TokenInfoResponse = TokenInfo;

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Option<Addr>,
}
