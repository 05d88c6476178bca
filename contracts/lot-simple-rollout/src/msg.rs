use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;

use crate::state::{Config, FailedCallback, PendingRollout};

#[cw_serde]
pub struct InstantiateMsg {
    pub subscription_id: u64,
    pub vrf_coordinator: String,
    /// The account allowed to start rollouts
    pub trigger: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Starts a new rollout epoch. The results are sent to `callback` once the randomness landed.
    RolloutCall { callback: String },
    /// Callback of the VRF coordinator
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
    /// Hands the trigger role to another account
    SetTrigger { trigger: String },
    /// Sends the stored results of `epoch` again after the callback contract rejected them
    RetryCallback { epoch: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// The latest request ID
    #[returns(Option<u64>)]
    RequestId {},
    #[returns(u64)]
    RolloutEpoch {},
    #[returns(Option<Vec<u32>>)]
    RolloutResults { epoch: u64 },
    #[returns(Option<PendingRollout>)]
    Pending { request_id: u64 },
    /// The rejected delivery of `epoch`, if any
    #[returns(Option<FailedCallback>)]
    FailedCallback { epoch: u64 },
}

pub type ConfigResponse = Config;
