use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint256};
use lot_protocol::RandomWordsRequest;

use crate::state::PendingRequest;

/// The mock coordinator has no configuration
#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Registers a randomness request from the sender. The request ID is emitted as
    /// the `request_id` attribute and set as response data.
    RequestRandomWords(RandomWordsRequest),
    /// Delivers random words to the requester of the given request.
    /// If `random_words` is empty, words are derived from the request ID.
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// The requester of a pending request
    #[returns(Option<Addr>)]
    Requester { request_id: u64 },
    /// Details of a pending request
    #[returns(Option<RequestResponse>)]
    Request { request_id: u64 },
    /// Pending requests in ascending ID order
    #[returns(RequestsResponse)]
    PendingRequests {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct RequestResponse {
    pub request_id: u64,
    pub request: PendingRequest,
}

#[cw_serde]
pub struct RequestsResponse {
    pub requests: Vec<RequestResponse>,
}

#[cw_serde]
pub struct StatsResponse {
    /// The ID the next request will get
    pub next_request_id: u64,
    /// Number of requests fulfilled so far
    pub fulfilled: u64,
}
