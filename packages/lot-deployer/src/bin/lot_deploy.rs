//! Deploys the VRF coordinator, the LOT token, the rollout contract and the lottery manager

use std::process::ExitCode;

use lot_deployer::{init_tracing, DeployConfig, DeployError, Deployer};

fn run() -> Result<(), DeployError> {
    let config = DeployConfig::from_env()?;
    Deployer::new(config)
        .deploy_all_with(|contract, addr| println!("{contract} deployed to: {addr}"))?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
