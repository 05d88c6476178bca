use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, Deps, DepsMut, Empty, Env, MessageInfo,
    QueryResponse, Response, StdResult, Storage, Uint128, WasmMsg,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use lot_protocol::{TicketPriceQuery, TicketPriceResponse, TicketPurchase, TicketReceiverMsg};

use crate::attributes::{
    ATTR_ACTION, ATTR_AMOUNT, ATTR_FROM, ATTR_NEW_OWNER, ATTR_OWNER, ATTR_PREVIOUS_OWNER,
    ATTR_SPENDER, ATTR_TICKETS, ATTR_TO,
};
use crate::error::ContractError;
use crate::msg::{
    AllowanceResponse, BalanceResponse, ExecuteMsg, InstantiateMsg, OwnershipResponse, QueryMsg,
    TokenInfoResponse,
};
use crate::state::{TokenInfo, ALLOWANCES, BALANCES, OWNER, TOKEN_INFO};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = "LOT Token";
pub const SYMBOL: &str = "LOT";
pub const DECIMALS: u8 = 18;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: NAME.to_string(),
            symbol: SYMBOL.to_string(),
            decimals: DECIMALS,
            total_supply: msg.initial_supply,
        },
    )?;
    BALANCES.save(deps.storage, &info.sender, &msg.initial_supply)?;
    OWNER.save(deps.storage, &Some(info.sender.clone()))?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute(ATTR_OWNER, info.sender)
        .add_attribute(ATTR_AMOUNT, msg.initial_supply))
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
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::Buy {
            lottery,
            amount,
            numbers,
        } => execute_buy(deps, env, info, lottery, amount, numbers),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, Some(new_owner))
        }
        ExecuteMsg::RenounceOwnership {} => execute_transfer_ownership(deps, info, None),
    }
}

/// Moves `amount` from `from` to `to`. The token contract itself can't receive.
fn move_tokens(
    storage: &mut dyn Storage,
    env: &Env,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    ensure!(
        *to != env.contract.address,
        ContractError::InvalidReceiver {
            receiver: to.clone()
        }
    );
    let balance = BALANCES.may_load(storage, from)?.unwrap_or_default();
    ensure!(
        balance >= amount,
        ContractError::InsufficientBalance {
            sender: from.clone(),
            balance,
            needed: amount,
        }
    );
    BALANCES.save(storage, from, &(balance - amount))?;
    let to_balance = BALANCES.may_load(storage, to)?.unwrap_or_default();
    BALANCES.save(storage, to, &to_balance.checked_add(amount)?)?;
    Ok(())
}

fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    move_tokens(deps.storage, &env, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "transfer")
        .add_attribute(ATTR_FROM, info.sender)
        .add_attribute(ATTR_TO, recipient)
        .add_attribute(ATTR_AMOUNT, amount))
}

fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &amount)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "approve")
        .add_attribute(ATTR_OWNER, info.sender)
        .add_attribute(ATTR_SPENDER, spender)
        .add_attribute(ATTR_AMOUNT, amount))
}

fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &info.sender))?
        .unwrap_or_default();
    ensure!(
        allowance >= amount,
        ContractError::InsufficientAllowance {
            spender: info.sender,
            allowance,
            needed: amount,
        }
    );
    ALLOWANCES.save(deps.storage, (&owner, &info.sender), &(allowance - amount))?;
    move_tokens(deps.storage, &env, &owner, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "transfer_from")
        .add_attribute(ATTR_SPENDER, info.sender)
        .add_attribute(ATTR_FROM, owner)
        .add_attribute(ATTR_TO, recipient)
        .add_attribute(ATTR_AMOUNT, amount))
}

fn execute_buy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lottery: String,
    amount: u32,
    numbers: Vec<u32>,
) -> Result<Response, ContractError> {
    ensure!(amount != 0, ContractError::ZeroAmount);
    let lottery = deps.api.addr_validate(&lottery)?;

    let TicketPriceResponse { price } = deps
        .querier
        .query_wasm_smart(&lottery, &TicketPriceQuery::TicketPrice {})?;
    let paid = price.checked_mul(Uint128::from(amount))?;
    move_tokens(deps.storage, &env, &info.sender, &lottery, paid)?;

    // A rejection by the lottery reverts the payment above
    let msg = WasmMsg::Execute {
        contract_addr: lottery.to_string(),
        msg: to_json_binary(&TicketReceiverMsg::ReceiveTickets(TicketPurchase {
            buyer: info.sender.clone(),
            count: amount,
            numbers,
            paid,
        }))?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute(ATTR_ACTION, "buy")
        .add_attribute(ATTR_FROM, info.sender)
        .add_attribute(ATTR_TO, lottery)
        .add_attribute(ATTR_TICKETS, amount.to_string())
        .add_attribute(ATTR_AMOUNT, paid))
}

fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: Option<String>,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    ensure_eq!(
        owner.as_ref(),
        Some(&info.sender),
        ContractError::OwnableUnauthorizedAccount {
            account: info.sender
        }
    );
    let new_owner = new_owner
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    OWNER.save(deps.storage, &new_owner)?;

    let action = if new_owner.is_some() {
        "transfer_ownership"
    } else {
        "renounce_ownership"
    };
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, action)
        .add_attribute(ATTR_PREVIOUS_OWNER, info.sender)
        .add_attribute(
            ATTR_NEW_OWNER,
            new_owner.map(String::from).unwrap_or_default(),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?)?,
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?)?,
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)?
        }
        QueryMsg::Ownership {} => to_json_binary(&OwnershipResponse {
            owner: OWNER.load(deps.storage)?,
        })?,
    };
    Ok(response)
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    TOKEN_INFO.load(deps.storage)
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}
