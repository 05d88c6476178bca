use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The instantiator. Only the owner can roll the dice.
    pub owner: Addr,
    /// The VRF subscription the requests are billed against
    pub subscription_id: u64,
    /// Address of the VRF coordinator. Can be set once after instantiation if unset.
    pub vrf_coordinator: Option<Addr>,
    /// In test mode results can be fulfilled directly, bypassing the coordinator
    pub test_mode: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// The dice roll of a roller
#[cw_serde]
pub enum Roll {
    /// Randomness was requested but not yet delivered
    InProgress { request_id: u64 },
    /// The dice landed. Results are never overwritten.
    Landed { request_id: u64, result: u32 },
}

impl Roll {
    pub fn request_id(&self) -> u64 {
        match self {
            Roll::InProgress { request_id } | Roll::Landed { request_id, .. } => *request_id,
        }
    }
}

/// Map from roller to their roll
pub const ROLLS: Map<&Addr, Roll> = Map::new("rolls");

/// Map from pending request ID to roller
pub const REQUESTS: Map<u64, Addr> = Map::new("requests");

/// Roller of the request currently being sent to the coordinator. Read in the reply.
pub const PENDING_ROLLER: Item<Addr> = Item::new("pending_roller");
