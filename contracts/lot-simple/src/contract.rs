use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, HexBinary,
    MessageInfo, QueryResponse, Reply, Response, StdError, StdResult, SubMsg, Uint256, WasmMsg,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use lot_protocol::{request_id_from_events, roll_result, CoordinatorExecuteMsg, RandomWordsRequest};

use crate::attributes::{
    ATTR_ACTION, ATTR_REQUEST_ID, ATTR_RESULT, ATTR_ROLLER, EVENT_TYPE_DICE_LANDED,
    EVENT_TYPE_DICE_ROLLED,
};
use crate::error::ContractError;
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, ResultResponse};
use crate::state::{Config, Roll, CONFIG, PENDING_ROLLER, REQUESTS, ROLLS};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REQUEST_ID: u64 = 1;

/// The gas lane to use
const KEY_HASH: &str = "787d74caea10b2b357790d5b5247c2f63d1d91572a9846f780606e4d953677ae";
const CALLBACK_GAS_LIMIT: u32 = 40_000;
const REQUEST_CONFIRMATIONS: u16 = 3;
/// One word per roll
const NUM_WORDS: u32 = 1;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let InstantiateMsg {
        subscription_id,
        vrf_coordinator,
        test_mode,
    } = msg;
    let vrf_coordinator = match vrf_coordinator {
        Some(addr) => Some(deps.api.addr_validate(&addr)?),
        None => None,
    };
    let test_mode = test_mode.unwrap_or(false);

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(
        deps.storage,
        &Config {
            owner: info.sender.clone(),
            subscription_id,
            vrf_coordinator,
            test_mode,
        },
    )?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("test_mode", test_mode.to_string()))
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
        ExecuteMsg::RollDice { roller } => execute_roll_dice(deps, info, roller),
        ExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        } => execute_raw_fulfill_random_words(deps, env, info, request_id, random_words),
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => execute_fulfill_random_words(deps, env, info, request_id, random_words),
        ExecuteMsg::SetVrfCoordinator { addr } => execute_set_vrf_coordinator(deps, info, addr),
    }
}

fn execute_roll_dice(
    deps: DepsMut,
    info: MessageInfo,
    roller: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);
    let Some(coordinator) = config.vrf_coordinator else {
        return Err(ContractError::CoordinatorUnset);
    };

    let roller = deps.api.addr_validate(&roller)?;
    match ROLLS.may_load(deps.storage, &roller)? {
        Some(Roll::InProgress { .. }) => return Err(ContractError::RollInProgress { roller }),
        Some(Roll::Landed { .. }) => return Err(ContractError::AlreadyRolled { roller }),
        None => {}
    }
    PENDING_ROLLER.save(deps.storage, &roller)?;

    let request = RandomWordsRequest {
        key_hash: HexBinary::from_hex(KEY_HASH)?,
        sub_id: config.subscription_id,
        request_confirmations: REQUEST_CONFIRMATIONS,
        callback_gas_limit: CALLBACK_GAS_LIMIT,
        num_words: NUM_WORDS,
        extra_args: Binary::default(),
    };
    let msg = SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: coordinator.into(),
            msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords(request))?,
            funds: vec![],
        },
        REQUEST_ID,
    );

    Ok(Response::new()
        .add_submessage(msg)
        .add_attribute(ATTR_ACTION, "roll_dice")
        .add_attribute(ATTR_ROLLER, roller))
}

fn execute_raw_fulfill_random_words(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let Some(coordinator) = config.vrf_coordinator else {
        return Err(ContractError::CoordinatorUnset);
    };
    ensure_eq!(
        info.sender,
        coordinator,
        ContractError::OnlyCoordinatorCanFulfill {
            have: info.sender,
            want: coordinator,
        }
    );
    fulfill_random_words(deps, request_id, &random_words, "raw_fulfill_random_words")
}

fn execute_fulfill_random_words(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure!(config.test_mode, ContractError::TestModeDisabled);
    fulfill_random_words(deps, request_id, &random_words, "fulfill_random_words")
}

fn fulfill_random_words(
    deps: DepsMut,
    request_id: u64,
    random_words: &[Uint256],
    action: &str,
) -> Result<Response, ContractError> {
    let Some(roller) = REQUESTS.may_load(deps.storage, request_id)? else {
        return Err(ContractError::UnknownRequest { request_id });
    };
    let Some(word) = random_words.first() else {
        return Err(ContractError::MissingRandomWords);
    };

    let result = roll_result(*word);
    REQUESTS.remove(deps.storage, request_id);
    ROLLS.save(deps.storage, &roller, &Roll::Landed { request_id, result })?;

    let event = Event::new(EVENT_TYPE_DICE_LANDED)
        .add_attribute(ATTR_REQUEST_ID, request_id.to_string())
        .add_attribute(ATTR_ROLLER, roller)
        .add_attribute(ATTR_RESULT, result.to_string());
    Ok(Response::new()
        .add_event(event)
        .add_attribute(ATTR_ACTION, action))
}

/// Sets the coordinator for instances that were created without one.
/// Once set, it is immutable.
fn execute_set_vrf_coordinator(
    deps: DepsMut,
    info: MessageInfo,
    addr: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);
    ensure!(
        config.vrf_coordinator.is_none(),
        ContractError::CoordinatorAlreadySet
    );

    let coordinator = deps.api.addr_validate(&addr)?;
    config.vrf_coordinator = Some(coordinator.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_vrf_coordinator")
        .add_attribute("vrf_coordinator", coordinator))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        REQUEST_ID => {
            let response = reply.result.into_result().map_err(StdError::generic_err)?;
            let request_id = request_id_from_events(&response.events)
                .ok_or_else(|| StdError::generic_err("coordinator did not emit a request ID"))?;
            let roller = PENDING_ROLLER.load(deps.storage)?;
            PENDING_ROLLER.remove(deps.storage);

            REQUESTS.save(deps.storage, request_id, &roller)?;
            ROLLS.save(deps.storage, &roller, &Roll::InProgress { request_id })?;

            let event = Event::new(EVENT_TYPE_DICE_ROLLED)
                .add_attribute(ATTR_REQUEST_ID, request_id.to_string())
                .add_attribute(ATTR_ROLLER, roller);
            Ok(Response::new().add_event(event))
        }
        _ => Err(StdError::generic_err("invalid reply id or result").into()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Result { roller } => to_json_binary(&query_result(deps, roller)?)?,
        QueryMsg::Request { request_id } => to_json_binary(&query_request(deps, request_id)?)?,
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    CONFIG.load(deps.storage)
}

fn query_result(deps: Deps, roller: String) -> StdResult<ResultResponse> {
    let roller = deps.api.addr_validate(&roller)?;
    let roll = ROLLS.may_load(deps.storage, &roller)?;
    let result = match roll {
        Some(Roll::Landed { result, .. }) => Some(result),
        _ => None,
    };
    Ok(ResultResponse {
        roller,
        request_id: roll.as_ref().map(Roll::request_id),
        result,
    })
}

fn query_request(deps: Deps, request_id: u64) -> StdResult<Option<Addr>> {
    REQUESTS.may_load(deps.storage, request_id)
}
