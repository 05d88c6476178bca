use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, HexBinary, StdResult, Storage};
use cw_storage_plus::{Item, Map};

/// A randomness request waiting for its fulfillment
#[cw_serde]
pub struct PendingRequest {
    /// The contract that requested the randomness and receives the callback
    pub requester: Addr,
    pub sub_id: u64,
    pub key_hash: HexBinary,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub extra_args: Binary,
    /// Block height of the request
    pub height: u64,
}

/// Pending requests by request ID. Requests are removed once fulfilled.
pub const REQUESTS: Map<u64, PendingRequest> = Map::new("requests");

/// The ID the next request gets. Starts at 1.
const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");

const FULFILLED_COUNT: Item<u64> = Item::new("fulfilled_count");

pub fn next_request_id(storage: &dyn Storage) -> StdResult<u64> {
    Ok(NEXT_REQUEST_ID.may_load(storage)?.unwrap_or(1))
}

/// Hands out the next request ID and moves the counter
pub fn take_request_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let id = next_request_id(storage)?;
    NEXT_REQUEST_ID.save(storage, &(id + 1))?;
    Ok(id)
}

pub fn fulfilled_count(storage: &dyn Storage) -> StdResult<u64> {
    Ok(FULFILLED_COUNT.may_load(storage)?.unwrap_or_default())
}

pub fn increment_fulfilled_count(storage: &mut dyn Storage) -> StdResult<u64> {
    let count = fulfilled_count(storage)? + 1;
    FULFILLED_COUNT.save(storage, &count)?;
    Ok(count)
}
