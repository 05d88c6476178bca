//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

pub const ATTR_FROM: &str = "from";

pub const ATTR_TO: &str = "to";

pub const ATTR_OWNER: &str = "owner";

pub const ATTR_SPENDER: &str = "spender";

pub const ATTR_AMOUNT: &str = "amount";

/// Number of tickets in a `buy`
pub const ATTR_TICKETS: &str = "tickets";

pub const ATTR_PREVIOUS_OWNER: &str = "previous_owner";

pub const ATTR_NEW_OWNER: &str = "new_owner";
