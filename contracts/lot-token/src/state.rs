use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// The owner. `None` once ownership was renounced.
pub const OWNER: Item<Option<Addr>> = Item::new("owner");

pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Map from (owner, spender) to the amount the spender may move
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");
