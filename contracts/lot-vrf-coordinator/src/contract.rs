use cosmwasm_std::{
    ensure, to_json_binary, Addr, Attribute, Deps, DepsMut, Empty, Env, Event, MessageInfo,
    Order, QueryResponse, Reply, Response, StdResult, SubMsg, SubMsgResult, Uint256, WasmMsg,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw_storage_plus::Bound;
use lot_protocol::{ConsumerExecuteMsg, RandomWordsRequest, RequestRandomWordsResponse};
use sha2::{Digest, Sha256};

use crate::attributes::{
    ATTR_ACTION, ATTR_CALLBACK_ERROR_MSG, ATTR_CALLBACK_SUCCESS, ATTR_REQUESTER, ATTR_REQUEST_ID,
    EVENT_TYPE_CALLBACK,
};
use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, QueryMsg, RequestResponse, RequestsResponse, StatsResponse,
};
use crate::state::{
    fulfilled_count, increment_fulfilled_count, next_request_id, take_request_id, PendingRequest,
    REQUESTS,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const MAX_NUM_WORDS: u32 = 500;
pub const MAX_REQUEST_CONFIRMATIONS: u16 = 200;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> StdResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute(ATTR_ACTION, "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: Empty) -> StdResult<Response> {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RequestRandomWords(request) => {
            execute_request_random_words(deps, env, info, request)
        }
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => execute_fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

fn execute_request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request: RandomWordsRequest,
) -> Result<Response, ContractError> {
    let RandomWordsRequest {
        key_hash,
        sub_id,
        request_confirmations,
        callback_gas_limit,
        num_words,
        extra_args,
    } = request;

    ensure!(
        (1..=MAX_NUM_WORDS).contains(&num_words),
        ContractError::InvalidNumWords {
            got: num_words,
            max: MAX_NUM_WORDS,
        }
    );
    ensure!(
        request_confirmations <= MAX_REQUEST_CONFIRMATIONS,
        ContractError::InvalidRequestConfirmations {
            got: request_confirmations,
            max: MAX_REQUEST_CONFIRMATIONS,
        }
    );

    let request_id = take_request_id(deps.storage)?;
    REQUESTS.save(
        deps.storage,
        request_id,
        &PendingRequest {
            requester: info.sender.clone(),
            sub_id,
            key_hash: key_hash.clone(),
            request_confirmations,
            callback_gas_limit,
            num_words,
            extra_args,
            height: env.block.height,
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&RequestRandomWordsResponse { request_id })?)
        .add_attribute(ATTR_ACTION, "request_random_words")
        .add_attribute(ATTR_REQUEST_ID, request_id.to_string())
        .add_attribute(ATTR_REQUESTER, info.sender)
        .add_attribute("sub_id", sub_id.to_string())
        .add_attribute("key_hash", key_hash.to_hex())
        .add_attribute("callback_gas_limit", callback_gas_limit.to_string())
        .add_attribute("request_confirmations", request_confirmations.to_string())
        .add_attribute("num_words", num_words.to_string()))
}

fn execute_fulfill_random_words(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let Some(request) = REQUESTS.may_load(deps.storage, request_id)? else {
        return Err(ContractError::RequestNotFound { request_id });
    };

    let random_words = if random_words.is_empty() {
        derive_random_words(request_id, request.num_words)
    } else {
        random_words
    };
    ensure!(
        random_words.len() == request.num_words as usize,
        ContractError::InvalidRandomWords {
            expected: request.num_words,
            got: random_words.len(),
        }
    );

    // Fulfillment is final, even if the callback fails
    REQUESTS.remove(deps.storage, request_id);
    increment_fulfilled_count(deps.storage)?;

    // Replies are keyed by request ID
    let msg = SubMsg::reply_always(
        WasmMsg::Execute {
            contract_addr: request.requester.to_string(),
            msg: to_json_binary(&ConsumerExecuteMsg::RawFulfillRandomWords {
                request_id,
                random_words,
            })?,
            funds: vec![],
        },
        request_id,
    );

    Ok(Response::new()
        .add_submessage(msg)
        .add_attribute(ATTR_ACTION, "fulfill_random_words")
        .add_attribute(ATTR_REQUEST_ID, request_id.to_string())
        .add_attribute(ATTR_REQUESTER, request.requester))
}

/// Deterministic stand-in words for fulfillments without explicit words
fn derive_random_words(request_id: u64, num_words: u32) -> Vec<Uint256> {
    (0..num_words)
        .map(|index| {
            let mut hasher = Sha256::new();
            hasher.update(request_id.to_be_bytes());
            hasher.update(index.to_be_bytes());
            let hash: [u8; 32] = hasher.finalize().into();
            Uint256::from_be_bytes(hash)
        })
        .collect()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    let request_id = reply.id;
    let mut attributes = vec![Attribute::new(ATTR_REQUEST_ID, request_id.to_string())];
    match reply.result {
        SubMsgResult::Ok(_) => {
            attributes.push(Attribute::new(ATTR_CALLBACK_SUCCESS, "true"));
        }
        SubMsgResult::Err(err) => {
            attributes.push(Attribute::new(ATTR_CALLBACK_SUCCESS, "false"));
            attributes.push(Attribute::new(ATTR_CALLBACK_ERROR_MSG, err));
        }
    };
    let callback_event = Event::new(EVENT_TYPE_CALLBACK).add_attributes(attributes);
    Ok(Response::new().add_event(callback_event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Requester { request_id } => {
            to_json_binary(&query_requester(deps, request_id)?)?
        }
        QueryMsg::Request { request_id } => to_json_binary(&query_request(deps, request_id)?)?,
        QueryMsg::PendingRequests { start_after, limit } => {
            to_json_binary(&query_pending_requests(deps, start_after, limit)?)?
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?)?,
    };
    Ok(response)
}

fn query_requester(deps: Deps, request_id: u64) -> StdResult<Option<Addr>> {
    let request = REQUESTS.may_load(deps.storage, request_id)?;
    Ok(request.map(|r| r.requester))
}

fn query_request(deps: Deps, request_id: u64) -> StdResult<Option<RequestResponse>> {
    let request = REQUESTS.may_load(deps.storage, request_id)?;
    Ok(request.map(|request| RequestResponse {
        request_id,
        request,
    }))
}

fn query_pending_requests(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RequestsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let requests = REQUESTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(request_id, request)| RequestResponse { request_id, request }))
        .collect::<StdResult<_>>()?;
    Ok(RequestsResponse { requests })
}

fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    Ok(StatsResponse {
        next_request_id: next_request_id(deps.storage)?,
        fulfilled: fulfilled_count(deps.storage)?,
    })
}
