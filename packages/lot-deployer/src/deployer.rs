use std::fmt;

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, Contract, Executor};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DeployConfig;
use crate::contracts;
use crate::error::DeployError;

/// Name of the first signer. Deploys everything, owns the token supply and acts as
/// lottery admin and rollout trigger.
pub const SIGNER0: &str = "signer0";
/// Name of the second signer, the lottery owner
pub const SIGNER1: &str = "signer1";

pub const VRF_COORDINATOR: &str = "VRFCoordinatorV2";
pub const TOKEN: &str = "LOTToken";
pub const SIMPLE_ROLLOUT: &str = "SimpleRollout";
pub const LOTTERY_MANAGER: &str = "LotteryManager";
pub const SIMPLE: &str = "Simple";

/// Addresses of a full lottery deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub vrf_coordinator: Addr,
    pub token: Addr,
    pub simple_rollout: Addr,
    pub lottery_manager: Addr,
}

/// Address of a standalone dice consumer deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleDeployment {
    pub simple: Addr,
}

impl fmt::Display for SimpleDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SIMPLE} deployed to: {}", self.simple)
    }
}

/// Instantiates the LOT contracts in dependency order.
///
/// Every step completes before the next one starts. The first failing step
/// aborts the sequence and nothing is rolled back.
pub struct Deployer {
    app: App,
    config: DeployConfig,
    signer0: Addr,
    signer1: Addr,
}

impl Deployer {
    pub fn new(config: DeployConfig) -> Self {
        let app = App::default();
        let signer0 = app.api().addr_make(SIGNER0);
        let signer1 = app.api().addr_make(SIGNER1);
        Self {
            app,
            config,
            signer0,
            signer1,
        }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn signer0(&self) -> &Addr {
        &self.signer0
    }

    pub fn signer1(&self) -> &Addr {
        &self.signer1
    }

    fn instantiate<T: Serialize + fmt::Debug>(
        &mut self,
        contract: &'static str,
        code: Box<dyn Contract<Empty>>,
        msg: &T,
    ) -> Result<Addr, DeployError> {
        let code_id = self.app.store_code(code);
        debug!(contract, code_id, ?msg, "instantiating");
        let addr = self
            .app
            .instantiate_contract(code_id, self.signer0.clone(), msg, &[], contract, None)
            .map_err(|error| DeployError::Deploy { contract, error })?;
        info!(contract, %addr, "deployed");
        Ok(addr)
    }

    pub fn deploy_vrf_coordinator(&mut self) -> Result<Addr, DeployError> {
        self.instantiate(
            VRF_COORDINATOR,
            contracts::vrf_coordinator(),
            &lot_vrf_coordinator::msg::InstantiateMsg {},
        )
    }

    pub fn deploy_token(&mut self) -> Result<Addr, DeployError> {
        let msg = lot_token::msg::InstantiateMsg {
            initial_supply: self.config.initial_supply,
        };
        self.instantiate(TOKEN, contracts::token(), &msg)
    }

    pub fn deploy_simple_rollout(&mut self, vrf_coordinator: &Addr) -> Result<Addr, DeployError> {
        let msg = lot_simple_rollout::msg::InstantiateMsg {
            subscription_id: self.config.subscription_id,
            vrf_coordinator: vrf_coordinator.to_string(),
            trigger: self.signer0.to_string(),
        };
        self.instantiate(SIMPLE_ROLLOUT, contracts::simple_rollout(), &msg)
    }

    pub fn deploy_lottery_manager(
        &mut self,
        rollout_contract: &Addr,
        token_contract: &Addr,
    ) -> Result<Addr, DeployError> {
        let msg = lot_lottery_manager::msg::InstantiateMsg {
            admin: self.signer0.to_string(),
            owner: self.signer1.to_string(),
            rollout_contract: rollout_contract.to_string(),
            name: self.config.lottery_name.clone(),
            supply: self.config.ticket_supply,
            price: self.config.ticket_price,
            token_contract: token_contract.to_string(),
        };
        self.instantiate(LOTTERY_MANAGER, contracts::lottery_manager(), &msg)
    }

    /// Deploys a dice consumer. Without a coordinator it must be set on the
    /// contract before the first roll.
    pub fn deploy_simple_consumer(
        &mut self,
        vrf_coordinator: Option<&Addr>,
        test_mode: bool,
    ) -> Result<Addr, DeployError> {
        let msg = lot_simple::msg::InstantiateMsg {
            subscription_id: self.config.subscription_id,
            vrf_coordinator: vrf_coordinator.map(Addr::to_string),
            test_mode: Some(test_mode),
        };
        self.instantiate(SIMPLE, contracts::simple(), &msg)
    }

    /// Deploys coordinator, token, rollout and lottery manager
    pub fn deploy_all(&mut self) -> Result<Deployment, DeployError> {
        self.deploy_all_with(|_, _| {})
    }

    /// Like [`Deployer::deploy_all`], handing every contract to `report` right after its step
    pub fn deploy_all_with(
        &mut self,
        mut report: impl FnMut(&'static str, &Addr),
    ) -> Result<Deployment, DeployError> {
        let vrf_coordinator = self.deploy_vrf_coordinator()?;
        report(VRF_COORDINATOR, &vrf_coordinator);
        let token = self.deploy_token()?;
        report(TOKEN, &token);
        let simple_rollout = self.deploy_simple_rollout(&vrf_coordinator)?;
        report(SIMPLE_ROLLOUT, &simple_rollout);
        let lottery_manager = self.deploy_lottery_manager(&simple_rollout, &token)?;
        report(LOTTERY_MANAGER, &lottery_manager);
        Ok(Deployment {
            vrf_coordinator,
            token,
            simple_rollout,
            lottery_manager,
        })
    }

    /// Deploys a standalone dice consumer
    pub fn deploy_simple(&mut self) -> Result<SimpleDeployment, DeployError> {
        let simple = self.deploy_simple_consumer(None, false)?;
        Ok(SimpleDeployment { simple })
    }
}
