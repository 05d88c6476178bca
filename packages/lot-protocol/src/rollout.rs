use cosmwasm_schema::cw_serde;

/// Sent by the rollout contract to the callback contract once the rollout randomness landed.
/// Receivers must include this variant in their `ExecuteMsg`.
#[cw_serde]
pub enum RolloutCallbackMsg {
    RolloutCallback {
        /// The rollout epoch the results belong to
        epoch: u64,
        /// Dice results, each in [1, DICE_SIDES]
        results: Vec<u32>,
    },
}
