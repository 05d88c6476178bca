use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// How many numbers a lottery ticket carries. Draws produce the same amount of results.
pub const NUMBERS_PER_TICKET: usize = 3;

/// A purchase the token forwards to the lottery after the payment was moved
#[cw_serde]
pub struct TicketPurchase {
    pub buyer: Addr,
    /// Number of tickets bought with the same numbers
    pub count: u32,
    pub numbers: Vec<u32>,
    /// Amount of LOT base units transferred to the lottery for this purchase
    pub paid: Uint128,
}

/// Execute interface of a contract that sells tickets for LOT tokens
#[cw_serde]
pub enum TicketReceiverMsg {
    ReceiveTickets(TicketPurchase),
}

/// The query the token uses to price a purchase
#[cw_serde]
#[derive(QueryResponses)]
pub enum TicketPriceQuery {
    #[returns(TicketPriceResponse)]
    TicketPrice {},
}

#[cw_serde]
pub struct TicketPriceResponse {
    /// Price of a single ticket in LOT base units
    pub price: Uint128,
}

/// The part of the token's execute interface other contracts use
#[cw_serde]
pub enum TokenExecuteMsg {
    Transfer { recipient: String, amount: Uint128 },
}
