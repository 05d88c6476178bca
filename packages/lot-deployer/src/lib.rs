//! Deploys the LOT contracts into an in-process chain.
//!
//! The contracts are linked through their `library` feature and instantiated in
//! dependency order on a `cw_multi_test::App`. The integration tests in `tests/`
//! drive the deployed contracts through the same [`Deployer`].

mod config;
pub mod contracts;
mod deployer;
mod error;

pub use config::{DeployConfig, CONFIG_ENV};
pub use deployer::{
    Deployer, Deployment, SimpleDeployment, LOTTERY_MANAGER, SIGNER0, SIGNER1, SIMPLE,
    SIMPLE_ROLLOUT, TOKEN, VRF_COORDINATOR,
};
pub use error::DeployError;

use cosmwasm_std::Event;
use tracing_subscriber::EnvFilter;

/// Gets the value of the first attribute with the given key in events of the given type
pub fn first_attr(events: &[Event], ty: &str, key: &str) -> Option<String> {
    events
        .iter()
        .filter(|event| event.ty == ty)
        .flat_map(|event| event.attributes.iter())
        .find_map(|attr| {
            if attr.key == key {
                Some(attr.value.clone())
            } else {
                None
            }
        })
}

/// Sets up logging to stderr. The filter is taken from `RUST_LOG` and defaults to info.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "lot_deployer=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
