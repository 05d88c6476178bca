use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The VRF subscription the requests are billed against
    pub subscription_id: u64,
    pub vrf_coordinator: Addr,
    /// The account allowed to start rollouts
    pub trigger: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// A rollout waiting for its randomness
#[cw_serde]
pub struct PendingRollout {
    pub epoch: u64,
    /// Contract that receives the results
    pub callback: Addr,
}

/// The current rollout epoch. 0 before the first rollout.
pub const ROLLOUT_EPOCH: Item<u64> = Item::new("rollout_epoch");

/// The ID of the latest randomness request
pub const LATEST_REQUEST_ID: Item<u64> = Item::new("latest_request_id");

/// Map from request ID to the rollout waiting for it
pub const PENDING: Map<u64, PendingRollout> = Map::new("pending");

/// Map from epoch to dice results
pub const ROLLOUT_RESULTS: Map<u64, Vec<u32>> = Map::new("rollout_results");

/// Rollout currently being sent to the coordinator. Read in the reply.
pub const IN_FLIGHT: Item<PendingRollout> = Item::new("in_flight");

/// Result deliveries in flight, innermost last. Popped in the reply.
pub const DELIVERIES: Item<Vec<PendingRollout>> = Item::new("deliveries");

/// A results delivery the callback contract rejected
#[cw_serde]
pub struct FailedCallback {
    pub callback: Addr,
    pub error: String,
}

/// Rejected deliveries by epoch. Cleared by a successful retry.
pub const FAILED_CALLBACKS: Map<u64, FailedCallback> = Map::new("failed_callbacks");
