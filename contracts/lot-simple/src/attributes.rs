//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

pub use lot_protocol::ATTR_REQUEST_ID;

pub const ATTR_ROLLER: &str = "roller";

pub const ATTR_RESULT: &str = "result";

pub const EVENT_TYPE_DICE_ROLLED: &str = "dice_rolled";

pub const EVENT_TYPE_DICE_LANDED: &str = "dice_landed";
