//! Bill Configuration
//!
//! Runtime knobs for a bill. Every field has a default, so an empty JSON
//! object (or no config at all) yields a working setup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// What removing an item from one participant's list does to co-sharers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemovalPolicy {
    /// Hide it for that participant only. Co-sharers keep the same
    /// per-head cost.
    #[default]
    Detach,
    /// Drop that participant's share; remaining sharers split the full price
    DropShare,
    /// Delete the item for everyone
    DeleteItem,
}

impl RemovalPolicy {
    pub const ALL: [RemovalPolicy; 3] = [
        RemovalPolicy::Detach,
        RemovalPolicy::DropShare,
        RemovalPolicy::DeleteItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalPolicy::Detach => "detach",
            RemovalPolicy::DropShare => "drop-share",
            RemovalPolicy::DeleteItem => "delete-item",
        }
    }
}

impl FromStr for RemovalPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s.trim())
            .ok_or_else(|| DomainError::InvalidConfig(format!("unknown removal policy {:?}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillConfig {
    /// Behaviour of per-participant item removal
    pub removal: RemovalPolicy,
    /// Symbol prefixed to rendered amounts
    pub currency: String,
}

impl Default for BillConfig {
    fn default() -> Self {
        Self {
            removal: RemovalPolicy::default(),
            currency: String::from("$"),
        }
    }
}

impl BillConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::InvalidConfig(e.to_string()))
    }

    /// Apply one `key=value` override. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> DomainResult<()> {
        match key {
            "removal" => self.removal = value.parse()?,
            "currency" => {
                let symbol = value.trim();
                if symbol.is_empty() {
                    return Err(DomainError::InvalidConfig("empty currency symbol".to_string()));
                }
                self.currency = symbol.to_string();
            }
            _ => log::debug!("[CONFIG] Ignoring unknown key {:?}", key),
        }
        Ok(())
    }

    /// Apply every override, keeping the current value for any that fail
    pub fn with_overrides<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            if let Err(e) = self.apply(key.as_ref(), value.as_ref()) {
                log::warn!("[CONFIG] {}; keeping current {:?}", e, key.as_ref());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BillConfig::default();
        assert_eq!(config.removal, RemovalPolicy::Detach);
        assert_eq!(config.currency, "$");
    }

    #[test]
    fn test_from_json() {
        let config = BillConfig::from_json(r#"{"removal":"drop-share","currency":"€"}"#).unwrap();
        assert_eq!(config.removal, RemovalPolicy::DropShare);
        assert_eq!(config.currency, "€");

        let partial = BillConfig::from_json(r#"{"removal":"delete-item"}"#).unwrap();
        assert_eq!(partial.currency, "$");

        assert_eq!(BillConfig::from_json("{}").unwrap(), BillConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        let err = BillConfig::from_json(r#"{"removal":"shred"}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfig(_)));
    }

    #[test]
    fn test_policy_round_trip_through_str() {
        for policy in RemovalPolicy::ALL {
            assert_eq!(policy.as_str().parse::<RemovalPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_overrides_keep_default_on_bad_value() {
        let config = BillConfig::default().with_overrides([
            ("removal", "nonsense"),
            ("currency", "£"),
            ("theme", "dark"),
        ]);
        assert_eq!(config.removal, RemovalPolicy::Detach);
        assert_eq!(config.currency, "£");
    }
}
