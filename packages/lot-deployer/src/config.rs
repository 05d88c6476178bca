use std::path::Path;

use cosmwasm_std::Uint128;
use serde::Deserialize;

use crate::error::DeployError;

/// Environment variable holding the path of a TOML config file
pub const CONFIG_ENV: &str = "LOT_DEPLOY_CONFIG";

/// 10^18, the number of base units in one LOT
const LOT: u128 = 1_000_000_000_000_000_000;

/// Constructor arguments of a deployment.
///
/// Fields missing in a config file keep their default. Token amounts are given
/// in base units as strings, e.g. `ticket_price = "1000000000000000000"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// The VRF subscription the randomness requests are billed against
    pub subscription_id: u64,
    /// Supply of the LOT token, minted to the first signer
    pub initial_supply: Uint128,
    pub lottery_name: String,
    /// Maximum number of tickets per lottery round
    pub ticket_supply: u32,
    pub ticket_price: Uint128,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            subscription_id: 1,
            initial_supply: Uint128::new(100_000_000 * LOT),
            lottery_name: "MyLottery".to_string(),
            ticket_supply: 100,
            ticket_price: Uint128::new(LOT),
        }
    }
}

impl DeployConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeployError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DeployError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| DeployError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads the file named by `LOT_DEPLOY_CONFIG`, or the defaults if it is unset
    pub fn from_env() -> Result<Self, DeployError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_deploy_script() {
        let config = DeployConfig::default();
        assert_eq!(config.subscription_id, 1);
        assert_eq!(
            config.initial_supply,
            Uint128::new(100_000_000_000_000_000_000_000_000)
        );
        assert_eq!(config.lottery_name, "MyLottery");
        assert_eq!(config.ticket_supply, 100);
        assert_eq!(config.ticket_price, Uint128::new(1_000_000_000_000_000_000));
    }

    #[test]
    fn partial_file_overrides_listed_fields() {
        let config: DeployConfig = toml::from_str(
            r#"
            lottery_name = "Weekly"
            ticket_price = "5"
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            DeployConfig {
                lottery_name: "Weekly".to_string(),
                ticket_price: Uint128::new(5),
                ..DeployConfig::default()
            }
        );

        let config: DeployConfig = toml::from_str("").unwrap();
        assert_eq!(config, DeployConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = toml::from_str::<DeployConfig>("ticket_prize = \"5\"").unwrap_err();
        assert!(err.to_string().contains("ticket_prize"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DeployConfig::load("/nonexistent/lot-deploy.toml").unwrap_err();
        assert!(matches!(err, DeployError::ConfigRead { .. }));
    }
}
