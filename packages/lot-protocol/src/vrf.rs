use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Event, HexBinary, Uint256};

/// Number of faces of the dice. Results are in the closed interval [1, DICE_SIDES].
pub const DICE_SIDES: u32 = 2000;

/// Attribute the coordinator uses to publish the ID of a new request.
/// Consumers rely on it to correlate the request with the later fulfillment.
pub const ATTR_REQUEST_ID: &str = "request_id";

/// Parameters of a randomness request.
#[cw_serde]
pub struct RandomWordsRequest {
    /// Identifies the proving key the request should be served with
    pub key_hash: HexBinary,
    /// The subscription the request is billed against. Opaque to the consumers.
    pub sub_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    /// How many random words the consumer expects in the callback
    pub num_words: u32,
    pub extra_args: Binary,
}

/// The part of the coordinator's execute interface consumers use
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomWords(RandomWordsRequest),
}

/// Data set on the response of a successful `RequestRandomWords`
#[cw_serde]
pub struct RequestRandomWordsResponse {
    pub request_id: u64,
}

/// The callback a coordinator sends to the requester.
/// Consumers must include this variant in their `ExecuteMsg`.
#[cw_serde]
pub enum ConsumerExecuteMsg {
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

/// Maps a raw random word into the dice range [1, DICE_SIDES].
///
/// This is a plain modulo reduction and carries a (tiny) modulo bias
/// for 256 bit words.
///
/// ## Example
///
/// ```
/// use cosmwasm_std::Uint256;
/// use lot_protocol::roll_result;
///
/// assert_eq!(roll_result(Uint256::from(123u32)), 124);
/// assert_eq!(roll_result(Uint256::from(1999u32)), 2000);
/// assert_eq!(roll_result(Uint256::from(2000u32)), 1);
/// ```
pub fn roll_result(word: Uint256) -> u32 {
    let remainder = word % Uint256::from(DICE_SIDES);
    let bytes = remainder.to_be_bytes();
    // remainder < DICE_SIDES, so only the lowest 4 bytes can be non-zero
    let low = u32::from_be_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]);
    low + 1
}

/// Finds the request ID emitted by the coordinator in a list of events.
///
/// Consumers call this in the reply of their `RequestRandomWords` sub-message.
pub fn request_id_from_events(events: &[Event]) -> Option<u64> {
    events
        .iter()
        .filter(|event| event.ty == "wasm")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == ATTR_REQUEST_ID)
        .and_then(|attr| attr.value.parse().ok())
}
