use crate::domain::model::LoanPolicy;
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deployment configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryConfig {
    #[serde(default)]
    pub policy: PolicyConfig,
    pub gateway: Option<GatewayConfig>,
}

/// `[policy]` section; omitted fields fall back to the standing rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub loan_period_days: Option<i64>,
    pub max_active_loans: Option<u32>,
    pub daily_fee: Option<f64>,
    pub escalated_daily_fee: Option<f64>,
    pub escalation_threshold_days: Option<i64>,
    pub fee_cap: Option<f64>,
}

/// `[gateway]` section. The api key is usually supplied as `${VAR}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl LibraryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LibraryError::ConfigParse {
            field: "config_file".to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| LibraryError::ConfigParse {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` occurrences with the environment value,
    /// leaving unknown variables untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Resolves the `[policy]` section over the defaults.
    pub fn loan_policy(&self) -> LoanPolicy {
        let defaults = LoanPolicy::default();
        LoanPolicy {
            loan_period_days: self.policy.loan_period_days.unwrap_or(defaults.loan_period_days),
            max_active_loans: self.policy.max_active_loans.unwrap_or(defaults.max_active_loans),
            daily_fee: self.policy.daily_fee.unwrap_or(defaults.daily_fee),
            escalated_daily_fee: self
                .policy
                .escalated_daily_fee
                .unwrap_or(defaults.escalated_daily_fee),
            escalation_threshold_days: self
                .policy
                .escalation_threshold_days
                .unwrap_or(defaults.escalation_threshold_days),
            fee_cap: self.policy.fee_cap.unwrap_or(defaults.fee_cap),
        }
    }
}

impl Validate for LibraryConfig {
    fn validate(&self) -> Result<()> {
        let policy = self.loan_policy();
        validation::validate_range("policy.loan_period_days", policy.loan_period_days, 1, 365)?;
        validation::validate_positive_number(
            "policy.max_active_loans",
            policy.max_active_loans as usize,
            1,
        )?;
        validation::validate_range("policy.daily_fee", policy.daily_fee, 0.0, policy.fee_cap)?;
        validation::validate_range(
            "policy.escalated_daily_fee",
            policy.escalated_daily_fee,
            0.0,
            policy.fee_cap,
        )?;
        validation::validate_range(
            "policy.escalation_threshold_days",
            policy.escalation_threshold_days,
            0,
            policy.loan_period_days + 365,
        )?;

        if let Some(gateway) = &self.gateway {
            validation::validate_url("gateway.endpoint", &gateway.endpoint)?;
            if let Some(key) = &gateway.api_key {
                validation::validate_non_empty_string("gateway.api_key", key)?;
            }
        }

        Ok(())
    }
}
