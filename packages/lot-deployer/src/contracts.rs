//! Code wrappers of the LOT contracts for the in-process chain

use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn vrf_coordinator() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lot_vrf_coordinator::contract::execute,
        lot_vrf_coordinator::contract::instantiate,
        lot_vrf_coordinator::contract::query,
    )
    .with_reply(lot_vrf_coordinator::contract::reply)
    .with_migrate(lot_vrf_coordinator::contract::migrate);
    Box::new(contract)
}

pub fn token() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lot_token::contract::execute,
        lot_token::contract::instantiate,
        lot_token::contract::query,
    )
    .with_migrate(lot_token::contract::migrate);
    Box::new(contract)
}

pub fn simple_rollout() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lot_simple_rollout::contract::execute,
        lot_simple_rollout::contract::instantiate,
        lot_simple_rollout::contract::query,
    )
    .with_reply(lot_simple_rollout::contract::reply)
    .with_migrate(lot_simple_rollout::contract::migrate);
    Box::new(contract)
}

pub fn lottery_manager() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lot_lottery_manager::contract::execute,
        lot_lottery_manager::contract::instantiate,
        lot_lottery_manager::contract::query,
    )
    .with_migrate(lot_lottery_manager::contract::migrate);
    Box::new(contract)
}

pub fn simple() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        lot_simple::contract::execute,
        lot_simple::contract::instantiate,
        lot_simple::contract::query,
    )
    .with_reply(lot_simple::contract::reply)
    .with_migrate(lot_simple::contract::migrate);
    Box::new(contract)
}
