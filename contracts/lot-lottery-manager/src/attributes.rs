//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

pub const ATTR_ROUND: &str = "round";

pub const ATTR_FROM_STATE: &str = "from_state";

pub const ATTR_TO_STATE: &str = "to_state";

pub const ATTR_TICKET_ID: &str = "ticket_id";

pub const ATTR_BUYER: &str = "buyer";

pub const ATTR_COUNT: &str = "count";

pub const ATTR_NUMBERS: &str = "numbers";

pub const ATTR_EPOCH: &str = "epoch";

pub const ATTR_WINNING_SHARES: &str = "winning_shares";

pub const ATTR_AMOUNT: &str = "amount";

pub const EVENT_TYPE_DRAW: &str = "lottery_draw";
