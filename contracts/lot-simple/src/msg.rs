use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint256};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    pub subscription_id: u64,
    /// Address of the VRF coordinator. When unset here, it must be set
    /// with `SetVrfCoordinator` before the first roll.
    pub vrf_coordinator: Option<String>,
    /// Enables `FulfillRandomWords`. Defaults to false.
    pub test_mode: Option<bool>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Requests randomness for the roller. Owner only.
    RollDice { roller: String },
    /// Callback of the VRF coordinator
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
    /// Fulfills a request without the coordinator. Test mode only.
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
    SetVrfCoordinator { addr: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// The dice result of a roller
    #[returns(ResultResponse)]
    Result { roller: String },
    /// The roller of a pending request
    #[returns(Option<Addr>)]
    Request { request_id: u64 },
}

pub type ConfigResponse = Config;

#[cw_serde]
pub struct ResultResponse {
    pub roller: Addr,
    /// The request of the roll, if the dice was rolled
    pub request_id: Option<u64>,
    /// The result in [1, 2000]. None until the randomness was delivered.
    pub result: Option<u32>,
}
