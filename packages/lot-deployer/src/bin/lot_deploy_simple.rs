//! Deploys a standalone dice consumer

use std::process::ExitCode;

use lot_deployer::{init_tracing, DeployConfig, DeployError, Deployer};

fn run() -> Result<(), DeployError> {
    let config = DeployConfig::from_env()?;
    let deployment = Deployer::new(config).deploy_simple()?;
    println!("{deployment}");
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
