use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, Addr, Deps, DepsMut, Empty, Env, Event, MessageInfo,
    Order, QueryResponse, Response, StdResult, Uint128, WasmMsg,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cw_storage_plus::Bound;
use lot_protocol::{
    TicketPriceResponse, TicketPurchase, TokenExecuteMsg, DICE_SIDES, NUMBERS_PER_TICKET,
};

use crate::attributes::{
    ATTR_ACTION, ATTR_AMOUNT, ATTR_BUYER, ATTR_COUNT, ATTR_EPOCH, ATTR_FROM_STATE, ATTR_NUMBERS,
    ATTR_ROUND, ATTR_TICKET_ID, ATTR_TO_STATE, ATTR_WINNING_SHARES, EVENT_TYPE_DRAW,
};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg, StateResponse, TicketsResponse,
};
use crate::state::{
    Config, LotteryState, Round, Ticket, CONFIG, CURRENT_ROUND, LAST_DRAWN_EPOCH, ROUNDS, STATE,
    TICKETS,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        owner: deps.api.addr_validate(&msg.owner)?,
        rollout_contract: deps.api.addr_validate(&msg.rollout_contract)?,
        name: msg.name,
        supply: msg.supply,
        price: msg.price,
        token_contract: deps.api.addr_validate(&msg.token_contract)?,
    };

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;
    STATE.save(deps.storage, &LotteryState::Ready)?;
    CURRENT_ROUND.save(deps.storage, &1)?;
    ROUNDS.save(deps.storage, 1, &Round::new(1))?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute("name", config.name)
        .add_attribute("admin", config.admin)
        .add_attribute("owner", config.owner))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: Empty) -> StdResult<Response> {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::TransState { state } => execute_trans_state(deps, info, state),
        ExecuteMsg::ReceiveTickets(purchase) => execute_receive_tickets(deps, info, purchase),
        ExecuteMsg::RolloutCallback { epoch, results } => {
            execute_rollout_callback(deps, info, epoch, results)
        }
        ExecuteMsg::ClaimPrize { round, ticket_id } => {
            execute_claim_prize(deps, info, round, ticket_id)
        }
        ExecuteMsg::CollectPool { round } => execute_collect_pool(deps, info, round),
    }
}

fn ensure_state(deps: Deps, expected: LotteryState) -> Result<(), ContractError> {
    let actual = STATE.load(deps.storage)?;
    ensure_eq!(
        actual,
        expected,
        ContractError::WrongState { expected, actual }
    );
    Ok(())
}

fn execute_trans_state(
    deps: DepsMut,
    info: MessageInfo,
    code: u8,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.admin, ContractError::Unauthorized);
    let to = LotteryState::from_code(code).ok_or(ContractError::UnknownState { code })?;
    let from = STATE.load(deps.storage)?;

    let mut round = CURRENT_ROUND.load(deps.storage)?;
    match (from, to) {
        (LotteryState::Ready, LotteryState::Distribute)
        | (LotteryState::Distribute, LotteryState::Rollout) => {}
        (LotteryState::Terminal, LotteryState::Distribute) => {
            round += 1;
            CURRENT_ROUND.save(deps.storage, &round)?;
            ROUNDS.save(deps.storage, round, &Round::new(round))?;
        }
        _ => return Err(ContractError::InvalidTransition { from, to }),
    }
    STATE.save(deps.storage, &to)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "trans_state")
        .add_attribute(ATTR_FROM_STATE, from.to_string())
        .add_attribute(ATTR_TO_STATE, to.to_string())
        .add_attribute(ATTR_ROUND, round.to_string()))
}

fn valid_numbers(numbers: &[u32]) -> bool {
    numbers.len() == NUMBERS_PER_TICKET && numbers.iter().all(|n| (1..=DICE_SIDES).contains(n))
}

fn execute_receive_tickets(
    deps: DepsMut,
    info: MessageInfo,
    purchase: TicketPurchase,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.token_contract, ContractError::Unauthorized);
    ensure_state(deps.as_ref(), LotteryState::Distribute)?;

    let TicketPurchase {
        buyer,
        count,
        numbers,
        paid,
    } = purchase;
    ensure!(count != 0, ContractError::ZeroTickets);
    ensure!(
        valid_numbers(&numbers),
        ContractError::InvalidNumbers {
            expected: NUMBERS_PER_TICKET,
            max: DICE_SIDES,
        }
    );

    let round_id = CURRENT_ROUND.load(deps.storage)?;
    let mut round = ROUNDS.load(deps.storage, round_id)?;
    let remaining = config.supply.saturating_sub(round.sold);
    ensure!(count <= remaining, ContractError::SoldOut { remaining });
    let expected = config.price.checked_mul(Uint128::from(count))?;
    ensure_eq!(
        paid,
        expected,
        ContractError::WrongPayment {
            expected,
            got: paid
        }
    );

    let ticket_id = round.next_ticket_id;
    round.next_ticket_id += 1;
    round.sold += count;
    round.pool = round.pool.checked_add(paid)?;
    ROUNDS.save(deps.storage, round_id, &round)?;

    let numbers_attr = numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    TICKETS.save(
        deps.storage,
        (round_id, ticket_id),
        &Ticket {
            ticket_id,
            buyer: buyer.clone(),
            count,
            numbers,
            claimed: false,
        },
    )?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "receive_tickets")
        .add_attribute(ATTR_ROUND, round_id.to_string())
        .add_attribute(ATTR_TICKET_ID, ticket_id.to_string())
        .add_attribute(ATTR_BUYER, buyer)
        .add_attribute(ATTR_COUNT, count.to_string())
        .add_attribute(ATTR_NUMBERS, numbers_attr))
}

fn execute_rollout_callback(
    deps: DepsMut,
    info: MessageInfo,
    epoch: u64,
    results: Vec<u32>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(
        info.sender,
        config.rollout_contract,
        ContractError::Unauthorized
    );
    ensure_state(deps.as_ref(), LotteryState::Rollout)?;
    ensure!(
        results.len() == NUMBERS_PER_TICKET,
        ContractError::InvalidResults {
            expected: NUMBERS_PER_TICKET,
            got: results.len(),
        }
    );
    let last = LAST_DRAWN_EPOCH.may_load(deps.storage)?.unwrap_or_default();
    ensure!(epoch > last, ContractError::StaleEpoch { epoch, last });
    LAST_DRAWN_EPOCH.save(deps.storage, &epoch)?;

    let round_id = CURRENT_ROUND.load(deps.storage)?;
    let mut round = ROUNDS.load(deps.storage, round_id)?;
    let mut winning_shares = 0u32;
    for ticket in TICKETS
        .prefix(round_id)
        .range(deps.storage, None, None, Order::Ascending)
    {
        let (_, ticket) = ticket?;
        if ticket.numbers == results {
            winning_shares += ticket.count;
        }
    }

    let results_attr = results
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    round.epoch = Some(epoch);
    round.winning_numbers = Some(results);
    round.winning_shares = winning_shares;
    ROUNDS.save(deps.storage, round_id, &round)?;
    STATE.save(deps.storage, &LotteryState::Terminal)?;

    let event = Event::new(EVENT_TYPE_DRAW)
        .add_attribute(ATTR_ROUND, round_id.to_string())
        .add_attribute(ATTR_EPOCH, epoch.to_string())
        .add_attribute(ATTR_NUMBERS, results_attr)
        .add_attribute(ATTR_WINNING_SHARES, winning_shares.to_string());
    Ok(Response::new()
        .add_event(event)
        .add_attribute(ATTR_ACTION, "rollout_callback"))
}

/// Loads a round that has been drawn already
fn load_drawn_round(deps: Deps, round_id: u64) -> Result<Round, ContractError> {
    let round = ROUNDS
        .may_load(deps.storage, round_id)?
        .ok_or(ContractError::RoundNotFound { round: round_id })?;
    ensure!(
        round.winning_numbers.is_some(),
        ContractError::NotDrawn { round: round_id }
    );
    Ok(round)
}

fn payout(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    })
}

fn execute_claim_prize(
    deps: DepsMut,
    info: MessageInfo,
    round_id: u64,
    ticket_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = load_drawn_round(deps.as_ref(), round_id)?;
    let mut ticket = TICKETS
        .may_load(deps.storage, (round_id, ticket_id))?
        .ok_or(ContractError::TicketNotFound {
            round: round_id,
            ticket_id,
        })?;
    ensure_eq!(info.sender, ticket.buyer, ContractError::Unauthorized);
    ensure!(
        round.winning_numbers.as_ref() == Some(&ticket.numbers),
        ContractError::NotAWinner {
            round: round_id,
            ticket_id,
        }
    );
    ensure!(
        !ticket.claimed,
        ContractError::AlreadyClaimed {
            round: round_id,
            ticket_id,
        }
    );

    // winning_shares >= ticket.count > 0 for any winning ticket
    let prize = round
        .pool
        .multiply_ratio(ticket.count, round.winning_shares);
    ticket.claimed = true;
    TICKETS.save(deps.storage, (round_id, ticket_id), &ticket)?;
    round.claimed_shares += ticket.count;
    round.paid_out = round.paid_out.checked_add(prize)?;
    ROUNDS.save(deps.storage, round_id, &round)?;

    let mut response = Response::new()
        .add_attribute(ATTR_ACTION, "claim_prize")
        .add_attribute(ATTR_ROUND, round_id.to_string())
        .add_attribute(ATTR_TICKET_ID, ticket_id.to_string())
        .add_attribute(ATTR_AMOUNT, prize);
    if !prize.is_zero() {
        response = response.add_message(payout(&config.token_contract, &ticket.buyer, prize)?);
    }
    Ok(response)
}

fn execute_collect_pool(
    deps: DepsMut,
    info: MessageInfo,
    round_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);
    let mut round = load_drawn_round(deps.as_ref(), round_id)?;
    let unclaimed = round.winning_shares - round.claimed_shares;
    ensure!(
        unclaimed == 0,
        ContractError::UnclaimedPrizes {
            round: round_id,
            shares: unclaimed,
        }
    );
    ensure!(
        !round.pool_collected,
        ContractError::PoolAlreadyCollected { round: round_id }
    );

    // The whole pool without winners, the rounding remainder otherwise
    let amount = round.pool.checked_sub(round.paid_out)?;
    round.pool_collected = true;
    ROUNDS.save(deps.storage, round_id, &round)?;

    let mut response = Response::new()
        .add_attribute(ATTR_ACTION, "collect_pool")
        .add_attribute(ATTR_ROUND, round_id.to_string())
        .add_attribute(ATTR_AMOUNT, amount);
    if !amount.is_zero() {
        response = response.add_message(payout(&config.token_contract, &config.owner, amount)?);
    }
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::State {} => to_json_binary(&query_state(deps)?)?,
        QueryMsg::Round { round } => to_json_binary(&ROUNDS.may_load(deps.storage, round)?)?,
        QueryMsg::Ticket { round, ticket_id } => {
            to_json_binary(&TICKETS.may_load(deps.storage, (round, ticket_id))?)?
        }
        QueryMsg::Tickets {
            round,
            start_after,
            limit,
        } => to_json_binary(&query_tickets(deps, round, start_after, limit)?)?,
        QueryMsg::TicketPrice {} => to_json_binary(&TicketPriceResponse {
            price: CONFIG.load(deps.storage)?.price,
        })?,
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    CONFIG.load(deps.storage)
}

fn query_state(deps: Deps) -> StdResult<StateResponse> {
    let state = STATE.load(deps.storage)?;
    Ok(StateResponse {
        state,
        code: state.code(),
        round: CURRENT_ROUND.load(deps.storage)?,
    })
}

fn query_tickets(
    deps: Deps,
    round: u64,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TicketsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let tickets = TICKETS
        .prefix(round)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, ticket)| ticket))
        .collect::<StdResult<_>>()?;
    Ok(TicketsResponse { tickets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{
        message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{from_json, CosmosMsg, OwnedDeps};

    const PRICE: u128 = 10;

    struct Accounts {
        admin: Addr,
        owner: Addr,
        rollout: Addr,
        token: Addr,
        alice: Addr,
        bob: Addr,
    }

    fn setup(supply: u32) -> (OwnedDeps<MockStorage, MockApi, MockQuerier>, Accounts) {
        let mut deps = mock_dependencies();
        let accounts = Accounts {
            admin: deps.api.addr_make("admin"),
            owner: deps.api.addr_make("owner"),
            rollout: deps.api.addr_make("rollout"),
            token: deps.api.addr_make("token"),
            alice: deps.api.addr_make("alice"),
            bob: deps.api.addr_make("bob"),
        };
        let msg = InstantiateMsg {
            admin: accounts.admin.to_string(),
            owner: accounts.owner.to_string(),
            rollout_contract: accounts.rollout.to_string(),
            name: "MyLottery".to_string(),
            supply,
            price: Uint128::new(PRICE),
            token_contract: accounts.token.to_string(),
        };
        instantiate(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.admin, &[]),
            msg,
        )
        .unwrap();
        (deps, accounts)
    }

    fn trans(
        deps: DepsMut,
        sender: &Addr,
        state: LotteryState,
    ) -> Result<Response, ContractError> {
        let msg = ExecuteMsg::TransState {
            state: state.code(),
        };
        execute(deps, mock_env(), message_info(sender, &[]), msg)
    }

    fn buy(
        deps: DepsMut,
        accounts: &Accounts,
        buyer: &Addr,
        count: u32,
        numbers: Vec<u32>,
    ) -> Result<Response, ContractError> {
        let msg = ExecuteMsg::ReceiveTickets(TicketPurchase {
            buyer: buyer.clone(),
            count,
            numbers,
            paid: Uint128::new(PRICE * count as u128),
        });
        execute(deps, mock_env(), message_info(&accounts.token, &[]), msg)
    }

    fn draw(
        deps: DepsMut,
        accounts: &Accounts,
        results: Vec<u32>,
    ) -> Result<Response, ContractError> {
        let msg = ExecuteMsg::RolloutCallback { epoch: 1, results };
        execute(deps, mock_env(), message_info(&accounts.rollout, &[]), msg)
    }

    fn state(deps: Deps) -> StateResponse {
        from_json(query(deps, mock_env(), QueryMsg::State {}).unwrap()).unwrap()
    }

    #[test]
    fn instantiate_works() {
        let (deps, accounts) = setup(100);
        let config: ConfigResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
        assert_eq!(config.admin, accounts.admin);
        assert_eq!(config.supply, 100);
        assert_eq!(
            state(deps.as_ref()),
            StateResponse {
                state: LotteryState::Ready,
                code: 0,
                round: 1,
            }
        );
        let price: TicketPriceResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::TicketPrice {}).unwrap())
                .unwrap();
        assert_eq!(price.price, Uint128::new(PRICE));
    }

    #[test]
    fn trans_state_follows_lifecycle() {
        let (mut deps, accounts) = setup(100);

        let err = trans(deps.as_mut(), &accounts.owner, LotteryState::Distribute).unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        let err = trans(deps.as_mut(), &accounts.admin, LotteryState::Rollout).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidTransition {
                from: LotteryState::Ready,
                to: LotteryState::Rollout,
            }
        );

        let msg = ExecuteMsg::TransState { state: 7 };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.admin, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::UnknownState { code: 7 });

        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        trans(deps.as_mut(), &accounts.admin, LotteryState::Rollout).unwrap();
        // only the rollout contract finishes a draw
        let err = trans(deps.as_mut(), &accounts.admin, LotteryState::Terminal).unwrap_err();
        assert!(matches!(err, ContractError::InvalidTransition { .. }));

        draw(deps.as_mut(), &accounts, vec![1, 2, 3]).unwrap();
        assert_eq!(state(deps.as_ref()).state, LotteryState::Terminal);

        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        assert_eq!(
            state(deps.as_ref()),
            StateResponse {
                state: LotteryState::Distribute,
                code: 1,
                round: 2,
            }
        );
        let round: Option<Round> =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Round { round: 2 }).unwrap())
                .unwrap();
        assert_eq!(round, Some(Round::new(2)));
    }

    #[test]
    fn receive_tickets_validates() {
        let (mut deps, accounts) = setup(5);

        // not distributing yet
        let err = buy(deps.as_mut(), &accounts, &accounts.alice, 1, vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ContractError::WrongState {
                expected: LotteryState::Distribute,
                actual: LotteryState::Ready,
            }
        );
        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();

        // only from the token
        let msg = ExecuteMsg::ReceiveTickets(TicketPurchase {
            buyer: accounts.alice.clone(),
            count: 1,
            numbers: vec![1, 2, 3],
            paid: Uint128::new(PRICE),
        });
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.alice, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        for numbers in [vec![1, 2], vec![1, 2, 3, 4], vec![0, 2, 3], vec![1, 2, 2001]] {
            let err = buy(deps.as_mut(), &accounts, &accounts.alice, 1, numbers).unwrap_err();
            assert_eq!(
                err,
                ContractError::InvalidNumbers {
                    expected: 3,
                    max: 2000
                }
            );
        }

        let err = buy(deps.as_mut(), &accounts, &accounts.alice, 0, vec![1, 2, 3]).unwrap_err();
        assert_eq!(err, ContractError::ZeroTickets);

        let msg = ExecuteMsg::ReceiveTickets(TicketPurchase {
            buyer: accounts.alice.clone(),
            count: 2,
            numbers: vec![1, 2, 3],
            paid: Uint128::new(PRICE),
        });
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.token, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::WrongPayment {
                expected: Uint128::new(2 * PRICE),
                got: Uint128::new(PRICE),
            }
        );

        buy(deps.as_mut(), &accounts, &accounts.alice, 4, vec![1, 2, 2000]).unwrap();
        let err = buy(deps.as_mut(), &accounts, &accounts.bob, 2, vec![1, 2, 3]).unwrap_err();
        assert_eq!(err, ContractError::SoldOut { remaining: 1 });

        let round = ROUNDS.load(deps.as_ref().storage, 1).unwrap();
        assert_eq!(round.sold, 4);
        assert_eq!(round.pool, Uint128::new(4 * PRICE));
        assert_eq!(round.next_ticket_id, 2);
    }

    #[test]
    fn draw_and_claim_prizes() {
        let (mut deps, accounts) = setup(100);
        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        buy(deps.as_mut(), &accounts, &accounts.alice, 3, vec![7, 8, 9]).unwrap(); // ticket 1
        buy(deps.as_mut(), &accounts, &accounts.bob, 1, vec![7, 8, 9]).unwrap(); // ticket 2
        buy(deps.as_mut(), &accounts, &accounts.bob, 2, vec![9, 8, 7]).unwrap(); // ticket 3

        // draw only in rollout state
        let err = draw(deps.as_mut(), &accounts, vec![7, 8, 9]).unwrap_err();
        assert!(matches!(err, ContractError::WrongState { .. }));
        trans(deps.as_mut(), &accounts.admin, LotteryState::Rollout).unwrap();

        let msg = ExecuteMsg::RolloutCallback {
            epoch: 1,
            results: vec![7, 8, 9],
        };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.admin, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
        let err = draw(deps.as_mut(), &accounts, vec![7, 8]).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidResults {
                expected: 3,
                got: 2
            }
        );

        let res = draw(deps.as_mut(), &accounts, vec![7, 8, 9]).unwrap();
        assert_eq!(res.events[0].ty, "lottery_draw");
        let round = ROUNDS.load(deps.as_ref().storage, 1).unwrap();
        assert_eq!(round.winning_numbers, Some(vec![7, 8, 9]));
        assert_eq!(round.winning_shares, 4);
        assert_eq!(round.pool, Uint128::new(6 * PRICE));

        // alice holds 3 of 4 shares of a pool of 60
        let msg = ExecuteMsg::ClaimPrize {
            round: 1,
            ticket_id: 1,
        };
        let res = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.alice, &[]),
            msg.clone(),
        )
        .unwrap();
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: accounts.token.to_string(),
                msg: to_json_binary(&TokenExecuteMsg::Transfer {
                    recipient: accounts.alice.to_string(),
                    amount: Uint128::new(45),
                })
                .unwrap(),
                funds: vec![],
            })
        );
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.alice, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::AlreadyClaimed {
                round: 1,
                ticket_id: 1
            }
        );

        // not the buyer
        let msg = ExecuteMsg::ClaimPrize {
            round: 1,
            ticket_id: 2,
        };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.alice, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        // numbers in the wrong order
        let msg = ExecuteMsg::ClaimPrize {
            round: 1,
            ticket_id: 3,
        };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.bob, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotAWinner {
                round: 1,
                ticket_id: 3
            }
        );

        // bob's winning share is still unclaimed
        let msg = ExecuteMsg::CollectPool { round: 1 };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.owner, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::UnclaimedPrizes {
                round: 1,
                shares: 1
            }
        );
        let round = ROUNDS.load(deps.as_ref().storage, 1).unwrap();
        assert_eq!(round.claimed_shares, 3);
        assert_eq!(round.paid_out, Uint128::new(45));
    }

    #[test]
    fn collect_pool_remainder_after_claims() {
        let (mut deps, accounts) = setup(100);
        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        buy(deps.as_mut(), &accounts, &accounts.alice, 1, vec![7, 8, 9]).unwrap(); // ticket 1
        buy(deps.as_mut(), &accounts, &accounts.bob, 2, vec![7, 8, 9]).unwrap(); // ticket 2
        buy(deps.as_mut(), &accounts, &accounts.alice, 1, vec![1, 1, 1]).unwrap(); // ticket 3
        trans(deps.as_mut(), &accounts.admin, LotteryState::Rollout).unwrap();
        draw(deps.as_mut(), &accounts, vec![7, 8, 9]).unwrap();

        // a pool of 40 split in thirds leaves 1 behind
        for (buyer, ticket_id) in [(&accounts.alice, 1), (&accounts.bob, 2)] {
            let msg = ExecuteMsg::ClaimPrize {
                round: 1,
                ticket_id,
            };
            execute(deps.as_mut(), mock_env(), message_info(buyer, &[]), msg).unwrap();
        }
        let round = ROUNDS.load(deps.as_ref().storage, 1).unwrap();
        assert_eq!(round.paid_out, Uint128::new(13 + 26));

        let msg = ExecuteMsg::CollectPool { round: 1 };
        let res = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.owner, &[]),
            msg.clone(),
        )
        .unwrap();
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: accounts.token.to_string(),
                msg: to_json_binary(&TokenExecuteMsg::Transfer {
                    recipient: accounts.owner.to_string(),
                    amount: Uint128::new(1),
                })
                .unwrap(),
                funds: vec![],
            })
        );
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.owner, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::PoolAlreadyCollected { round: 1 });
    }

    #[test]
    fn rollout_callback_needs_newer_epoch() {
        let (mut deps, accounts) = setup(100);
        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        trans(deps.as_mut(), &accounts.admin, LotteryState::Rollout).unwrap();
        draw(deps.as_mut(), &accounts, vec![1, 2, 3]).unwrap();

        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        trans(deps.as_mut(), &accounts.admin, LotteryState::Rollout).unwrap();
        // epoch 1 was drawn in round 1 already
        let err = draw(deps.as_mut(), &accounts, vec![4, 5, 6]).unwrap_err();
        assert_eq!(err, ContractError::StaleEpoch { epoch: 1, last: 1 });
        assert_eq!(state(deps.as_ref()).state, LotteryState::Rollout);

        let msg = ExecuteMsg::RolloutCallback {
            epoch: 3,
            results: vec![4, 5, 6],
        };
        execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.rollout, &[]),
            msg,
        )
        .unwrap();
        let round = ROUNDS.load(deps.as_ref().storage, 2).unwrap();
        assert_eq!(round.epoch, Some(3));
        assert_eq!(LAST_DRAWN_EPOCH.load(deps.as_ref().storage).unwrap(), 3);
        assert_eq!(state(deps.as_ref()).state, LotteryState::Terminal);
    }

    #[test]
    fn collect_pool_without_winners() {
        let (mut deps, accounts) = setup(100);
        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        buy(deps.as_mut(), &accounts, &accounts.alice, 2, vec![1, 2, 3]).unwrap();

        let msg = ExecuteMsg::CollectPool { round: 1 };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.owner, &[]),
            msg.clone(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NotDrawn { round: 1 });

        trans(deps.as_mut(), &accounts.admin, LotteryState::Rollout).unwrap();
        draw(deps.as_mut(), &accounts, vec![4, 5, 6]).unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.admin, &[]),
            msg.clone(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        let res = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.owner, &[]),
            msg.clone(),
        )
        .unwrap();
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: accounts.token.to_string(),
                msg: to_json_binary(&TokenExecuteMsg::Transfer {
                    recipient: accounts.owner.to_string(),
                    amount: Uint128::new(2 * PRICE),
                })
                .unwrap(),
                funds: vec![],
            })
        );
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.owner, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::PoolAlreadyCollected { round: 1 });

        let msg = ExecuteMsg::CollectPool { round: 9 };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            message_info(&accounts.owner, &[]),
            msg,
        )
        .unwrap_err();
        assert_eq!(err, ContractError::RoundNotFound { round: 9 });
    }

    #[test]
    fn query_tickets_paginates() {
        let (mut deps, accounts) = setup(100);
        trans(deps.as_mut(), &accounts.admin, LotteryState::Distribute).unwrap();
        for i in 1..=12 {
            buy(deps.as_mut(), &accounts, &accounts.alice, 1, vec![i, i, i]).unwrap();
        }

        let query_page = |start_after: Option<u64>, limit: Option<u32>| -> Vec<u64> {
            let res = query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::Tickets {
                    round: 1,
                    start_after,
                    limit,
                },
            )
            .unwrap();
            let TicketsResponse { tickets } = from_json(res).unwrap();
            tickets.into_iter().map(|t| t.ticket_id).collect()
        };

        assert_eq!(query_page(None, None), (1..=10).collect::<Vec<_>>());
        assert_eq!(query_page(Some(10), None), vec![11, 12]);
        assert_eq!(query_page(Some(3), Some(2)), vec![4, 5]);
        assert_eq!(query_page(None, Some(100)).len(), 12);

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Tickets {
                round: 2,
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
        let TicketsResponse { tickets } = from_json(res).unwrap();
        assert!(tickets.is_empty());

        let ticket: Option<Ticket> = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::Ticket {
                    round: 1,
                    ticket_id: 5,
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(ticket.unwrap().numbers, vec![5, 5, 5]);
    }
}
