use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// Drives the lifecycle
    pub admin: Addr,
    /// Receives pools without winners
    pub owner: Addr,
    /// The only contract allowed to deliver draw results
    pub rollout_contract: Addr,
    pub name: String,
    /// Maximum number of tickets per round
    pub supply: u32,
    /// Price of a single ticket in LOT base units
    pub price: Uint128,
    /// The LOT token. Tickets are paid and prizes are paid out in it.
    pub token_contract: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
#[derive(Copy)]
pub enum LotteryState {
    Ready,
    Distribute,
    Rollout,
    Terminal,
}

impl LotteryState {
    /// The numeric code operators use for this state
    pub fn code(self) -> u8 {
        match self {
            LotteryState::Ready => 0,
            LotteryState::Distribute => 1,
            LotteryState::Rollout => 2,
            LotteryState::Terminal => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(LotteryState::Ready),
            1 => Some(LotteryState::Distribute),
            2 => Some(LotteryState::Rollout),
            3 => Some(LotteryState::Terminal),
            _ => None,
        }
    }
}

impl fmt::Display for LotteryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LotteryState::Ready => "ready",
            LotteryState::Distribute => "distribute",
            LotteryState::Rollout => "rollout",
            LotteryState::Terminal => "terminal",
        };
        f.write_str(name)
    }
}

pub const STATE: Item<LotteryState> = Item::new("state");

/// The current round. Starts at 1.
pub const CURRENT_ROUND: Item<u64> = Item::new("current_round");

/// Rollout epoch of the latest draw. A draw needs a newer epoch.
pub const LAST_DRAWN_EPOCH: Item<u64> = Item::new("last_drawn_epoch");

#[cw_serde]
pub struct Round {
    pub round: u64,
    /// Tickets sold so far
    pub sold: u32,
    /// Sum of all payments for this round
    pub pool: Uint128,
    /// The ID the next ticket gets. Starts at 1.
    pub next_ticket_id: u64,
    /// Rollout epoch the draw came from
    pub epoch: Option<u64>,
    /// Set once the round was drawn
    pub winning_numbers: Option<Vec<u32>>,
    /// Number of winning tickets. A purchase of `count` tickets has `count` shares.
    pub winning_shares: u32,
    /// Winning shares whose prize was claimed
    pub claimed_shares: u32,
    /// Sum of all prizes paid
    pub paid_out: Uint128,
    pub pool_collected: bool,
}

impl Round {
    pub fn new(round: u64) -> Self {
        Self {
            round,
            sold: 0,
            pool: Uint128::zero(),
            next_ticket_id: 1,
            epoch: None,
            winning_numbers: None,
            winning_shares: 0,
            claimed_shares: 0,
            paid_out: Uint128::zero(),
            pool_collected: false,
        }
    }
}

pub const ROUNDS: Map<u64, Round> = Map::new("rounds");

#[cw_serde]
pub struct Ticket {
    pub ticket_id: u64,
    pub buyer: Addr,
    /// How many tickets with these numbers were bought
    pub count: u32,
    pub numbers: Vec<u32>,
    pub claimed: bool,
}

/// Map from (round, ticket ID) to ticket
pub const TICKETS: Map<(u64, u64), Ticket> = Map::new("tickets");
