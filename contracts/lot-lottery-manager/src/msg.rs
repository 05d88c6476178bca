use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use lot_protocol::{TicketPriceResponse, TicketPurchase};

use crate::state::{Config, LotteryState, Round, Ticket};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub owner: String,
    pub rollout_contract: String,
    pub name: String,
    /// Maximum number of tickets per round
    pub supply: u32,
    pub price: Uint128,
    pub token_contract: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Moves the lifecycle to the state with the given code
    /// (0 ready, 1 distribute, 2 rollout, 3 terminal)
    TransState { state: u8 },
    /// Sent by the token after a ticket purchase was paid
    ReceiveTickets(TicketPurchase),
    /// Sent by the rollout contract with the draw results
    RolloutCallback { epoch: u64, results: Vec<u32> },
    ClaimPrize { round: u64, ticket_id: u64 },
    /// Sends the pool of a round without winners to the owner
    CollectPool { round: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(StateResponse)]
    State {},
    #[returns(Option<Round>)]
    Round { round: u64 },
    #[returns(Option<Ticket>)]
    Ticket { round: u64, ticket_id: u64 },
    /// Tickets of a round in ascending ID order
    #[returns(TicketsResponse)]
    Tickets {
        round: u64,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(TicketPriceResponse)]
    TicketPrice {},
}

pub type ConfigResponse = Config;

#[cw_serde]
pub struct StateResponse {
    pub state: LotteryState,
    /// Numeric code of `state`
    pub code: u8,
    pub round: u64,
}

#[cw_serde]
pub struct TicketsResponse {
    pub tickets: Vec<Ticket>,
}
