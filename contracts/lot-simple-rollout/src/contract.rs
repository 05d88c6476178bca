use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Attribute, Binary, Deps, DepsMut, Empty, Env, Event,
    HexBinary, MessageInfo, QueryResponse, Reply, Response, StdError, StdResult, Storage, SubMsg,
    SubMsgResult, Uint256, WasmMsg,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use lot_protocol::{
    request_id_from_events, roll_result, CoordinatorExecuteMsg, RandomWordsRequest,
    RolloutCallbackMsg, NUMBERS_PER_TICKET,
};

use crate::attributes::{
    ATTR_ACTION, ATTR_CALLBACK_ERROR_MSG, ATTR_CALLBACK_SUCCESS, ATTR_EPOCH, ATTR_REQUEST_ID,
    ATTR_RESULTS, EVENT_TYPE_CALLBACK, EVENT_TYPE_DICE_LANDED, EVENT_TYPE_DICE_ROLLED,
};
use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    Config, FailedCallback, PendingRollout, CONFIG, DELIVERIES, FAILED_CALLBACKS, IN_FLIGHT,
    LATEST_REQUEST_ID, PENDING, ROLLOUT_EPOCH, ROLLOUT_RESULTS,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REQUEST_ID: u64 = 1;
pub const CALLBACK_ID: u64 = 2;

const KEY_HASH: &str = "787d74caea10b2b357790d5b5247c2f63d1d91572a9846f780606e4d953677ae";
const CALLBACK_GAS_LIMIT: u32 = 200_000;
const REQUEST_CONFIRMATIONS: u16 = 3;
/// A rollout draws one number per ticket position
const NUM_WORDS: usize = NUMBERS_PER_TICKET;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let vrf_coordinator = deps.api.addr_validate(&msg.vrf_coordinator)?;
    let trigger = deps.api.addr_validate(&msg.trigger)?;

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(
        deps.storage,
        &Config {
            subscription_id: msg.subscription_id,
            vrf_coordinator: vrf_coordinator.clone(),
            trigger: trigger.clone(),
        },
    )?;
    ROLLOUT_EPOCH.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("vrf_coordinator", vrf_coordinator)
        .add_attribute("trigger", trigger))
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
        ExecuteMsg::RolloutCall { callback } => execute_rollout_call(deps, env, info, callback),
        ExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        } => execute_raw_fulfill_random_words(deps, info, request_id, random_words),
        ExecuteMsg::SetTrigger { trigger } => execute_set_trigger(deps, info, trigger),
        ExecuteMsg::RetryCallback { epoch } => execute_retry_callback(deps, info, epoch),
    }
}

fn execute_rollout_call(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    callback: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.trigger, ContractError::Unauthorized);
    let callback = deps.api.addr_validate(&callback)?;

    let epoch = ROLLOUT_EPOCH.load(deps.storage)? + 1;
    ROLLOUT_EPOCH.save(deps.storage, &epoch)?;
    IN_FLIGHT.save(deps.storage, &PendingRollout { epoch, callback })?;

    let request = RandomWordsRequest {
        key_hash: HexBinary::from_hex(KEY_HASH)?,
        sub_id: config.subscription_id,
        request_confirmations: REQUEST_CONFIRMATIONS,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
        num_words: NUM_WORDS as u32,
        extra_args: Binary::default(),
    };
    let msg = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: config.vrf_coordinator.into(),
            msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords(request))?,
            funds: vec![],
        },
        REQUEST_ID,
    );

    Ok(Response::new()
        .add_submessage(msg)
        .add_attribute(ATTR_ACTION, "rollout_call")
        .add_attribute(ATTR_EPOCH, epoch.to_string()))
}

fn execute_raw_fulfill_random_words(
    deps: DepsMut,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(
        info.sender,
        config.vrf_coordinator,
        ContractError::OnlyCoordinatorCanFulfill {
            have: info.sender,
            want: config.vrf_coordinator,
        }
    );
    let Some(PendingRollout { epoch, callback }) = PENDING.may_load(deps.storage, request_id)?
    else {
        return Err(ContractError::UnknownRequest { request_id });
    };
    ensure!(
        random_words.len() == NUM_WORDS,
        ContractError::InvalidRandomWords {
            expected: NUM_WORDS,
            got: random_words.len(),
        }
    );

    // Results are kept even if the callback contract rejects them
    let results: Vec<u32> = random_words.into_iter().map(roll_result).collect();
    PENDING.remove(deps.storage, request_id);
    ROLLOUT_RESULTS.save(deps.storage, epoch, &results)?;
    let msg = deliver(deps.storage, PendingRollout { epoch, callback }, results.clone())?;

    let joined = results
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let event = Event::new(EVENT_TYPE_DICE_LANDED)
        .add_attribute(ATTR_REQUEST_ID, request_id.to_string())
        .add_attribute(ATTR_EPOCH, epoch.to_string())
        .add_attribute(ATTR_RESULTS, joined);

    Ok(Response::new()
        .add_submessage(msg)
        .add_event(event)
        .add_attribute(ATTR_ACTION, "raw_fulfill_random_words"))
}

/// Builds the results callback and records it as in flight
fn deliver(
    storage: &mut dyn Storage,
    rollout: PendingRollout,
    results: Vec<u32>,
) -> StdResult<SubMsg> {
    let msg = WasmMsg::Execute {
        contract_addr: rollout.callback.to_string(),
        msg: to_json_binary(&RolloutCallbackMsg::RolloutCallback {
            epoch: rollout.epoch,
            results,
        })?,
        funds: vec![],
    };
    let mut deliveries = DELIVERIES.may_load(storage)?.unwrap_or_default();
    deliveries.push(rollout);
    DELIVERIES.save(storage, &deliveries)?;
    Ok(SubMsg::reply_always(msg, CALLBACK_ID))
}

fn execute_set_trigger(
    deps: DepsMut,
    info: MessageInfo,
    trigger: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.trigger, ContractError::Unauthorized);
    config.trigger = deps.api.addr_validate(&trigger)?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_trigger")
        .add_attribute("trigger", config.trigger))
}

fn execute_retry_callback(
    deps: DepsMut,
    info: MessageInfo,
    epoch: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.trigger, ContractError::Unauthorized);
    let Some(failed) = FAILED_CALLBACKS.may_load(deps.storage, epoch)? else {
        return Err(ContractError::NoFailedCallback { epoch });
    };
    let results = ROLLOUT_RESULTS.load(deps.storage, epoch)?;
    FAILED_CALLBACKS.remove(deps.storage, epoch);

    let msg = deliver(
        deps.storage,
        PendingRollout {
            epoch,
            callback: failed.callback,
        },
        results,
    )?;
    Ok(Response::new()
        .add_submessage(msg)
        .add_attribute(ATTR_ACTION, "retry_callback")
        .add_attribute(ATTR_EPOCH, epoch.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        REQUEST_ID => {
            let response = reply.result.into_result().map_err(StdError::generic_err)?;
            let request_id = request_id_from_events(&response.events)
                .ok_or_else(|| StdError::generic_err("coordinator did not emit a request ID"))?;
            let rollout = IN_FLIGHT.load(deps.storage)?;
            IN_FLIGHT.remove(deps.storage);

            LATEST_REQUEST_ID.save(deps.storage, &request_id)?;
            PENDING.save(deps.storage, request_id, &rollout)?;

            let event = Event::new(EVENT_TYPE_DICE_ROLLED)
                .add_attribute(ATTR_REQUEST_ID, request_id.to_string())
                .add_attribute(ATTR_EPOCH, rollout.epoch.to_string());
            Ok(Response::new().add_event(event))
        }
        CALLBACK_ID => {
            let mut deliveries = DELIVERIES.may_load(deps.storage)?.unwrap_or_default();
            let PendingRollout { epoch, callback } = deliveries
                .pop()
                .ok_or_else(|| StdError::generic_err("no results delivery in flight"))?;
            DELIVERIES.save(deps.storage, &deliveries)?;

            let mut attributes = vec![Attribute::new(ATTR_EPOCH, epoch.to_string())];
            match reply.result {
                SubMsgResult::Ok(_) => {
                    attributes.push(Attribute::new(ATTR_CALLBACK_SUCCESS, "true"));
                }
                SubMsgResult::Err(error) => {
                    attributes.push(Attribute::new(ATTR_CALLBACK_SUCCESS, "false"));
                    attributes.push(Attribute::new(ATTR_CALLBACK_ERROR_MSG, error.clone()));
                    let failed = FailedCallback { callback, error };
                    FAILED_CALLBACKS.save(deps.storage, epoch, &failed)?;
                }
            }
            let callback_event = Event::new(EVENT_TYPE_CALLBACK).add_attributes(attributes);
            Ok(Response::new().add_event(callback_event))
        }
        _ => Err(StdError::generic_err("invalid reply id or result").into()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::RequestId {} => to_json_binary(&LATEST_REQUEST_ID.may_load(deps.storage)?)?,
        QueryMsg::RolloutEpoch {} => to_json_binary(&ROLLOUT_EPOCH.load(deps.storage)?)?,
        QueryMsg::RolloutResults { epoch } => {
            to_json_binary(&ROLLOUT_RESULTS.may_load(deps.storage, epoch)?)?
        }
        QueryMsg::Pending { request_id } => {
            to_json_binary(&PENDING.may_load(deps.storage, request_id)?)?
        }
        QueryMsg::FailedCallback { epoch } => {
            to_json_binary(&FAILED_CALLBACKS.may_load(deps.storage, epoch)?)?
        }
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    CONFIG.load(deps.storage)
}
