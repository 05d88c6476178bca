//! Messages shared between the LOT contracts.
//!
//! Contracts talk to each other through the types in this crate instead of depending
//! on each other's crates. Every enum here mirrors a subset of the receiving contract's
//! own `ExecuteMsg`/`QueryMsg`, so the JSON on the wire is identical.

mod rollout;
mod tickets;
mod vrf;

pub use rollout::RolloutCallbackMsg;
pub use tickets::{
    TicketPriceQuery, TicketPriceResponse, TicketPurchase, TicketReceiverMsg, TokenExecuteMsg,
    NUMBERS_PER_TICKET,
};
pub use vrf::{
    request_id_from_events, roll_result, ConsumerExecuteMsg, CoordinatorExecuteMsg,
    RandomWordsRequest, RequestRandomWordsResponse, ATTR_REQUEST_ID, DICE_SIDES,
};
