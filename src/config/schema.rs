//! Config schema and deserialization

use crate::analyzer::scoring::DEFAULT_SUCCESS_THRESHOLD;
use crate::RuleKind;
use serde::Deserialize;
use std::collections::HashMap;

/// Rule switch in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleToggle {
    On,
    /// Skip the rule during analysis
    Off,
}

/// Root config structure for .tajweedrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Success threshold; accuracy must be strictly above it. Default: 80
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Per-rule switches. Key is the lowercase rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleToggle>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli_threshold: Option<u8>) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        self
    }

    /// Threshold to use, falling back to the default
    pub fn success_threshold(&self) -> u8 {
        self.threshold.unwrap_or(DEFAULT_SUCCESS_THRESHOLD)
    }

    /// Rules are on unless switched off
    pub fn is_rule_enabled(&self, kind: RuleKind) -> bool {
        self.rules.get(kind.id()) != Some(&RuleToggle::Off)
    }

    /// Rule ids in the config that name no known rule
    pub fn unknown_rules(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .rules
            .keys()
            .map(String::as_str)
            .filter(|id| RuleKind::from_id(id).is_none())
            .collect();
        unknown.sort_unstable();
        unknown
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        for (rule, toggle) in base.rules {
            self.rules.entry(rule).or_insert(toggle);
        }
    }
}
