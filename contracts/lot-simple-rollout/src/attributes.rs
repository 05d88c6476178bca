//! Stable event attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients rely on them.

/// Which entry point/message type was executed
pub const ATTR_ACTION: &str = "action";

pub use lot_protocol::ATTR_REQUEST_ID;

pub const ATTR_EPOCH: &str = "epoch";

/// Comma separated dice results
pub const ATTR_RESULTS: &str = "results";

pub const EVENT_TYPE_DICE_ROLLED: &str = "dice_rolled";

pub const EVENT_TYPE_DICE_LANDED: &str = "dice_landed";

pub const ATTR_CALLBACK_SUCCESS: &str = "success";
pub const ATTR_CALLBACK_ERROR_MSG: &str = "error_msg";

/// Emitted in the reply to every results delivery
pub const EVENT_TYPE_CALLBACK: &str = "rollout_callback";
