//! Engine configuration

use chrono::Duration;
use serde::{Deserialize, Serialize};

// Duration holds at most i64::MAX milliseconds
const MAX_LEEWAY_SECS: i64 = i64::MAX / 1_000;

/// When a verified token's content is written into the receiving [`Token`](crate::Token)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyOrder {
    /// Replace header and claims, then check the MAC
    #[default]
    OverwriteThenCheck,
    /// Check the MAC, then replace header and claims
    CheckThenCommit,
}

/// Settings applied by [`Hs256`](crate::api::Hs256) around sign and verify.
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// let config: hsjwt::EngineConfig =
///     serde_json::from_str(r#"{"verify_order":"check_then_commit"}"#).unwrap();
/// assert_eq!(config.min_secret_len, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Verification ordering
    pub verify_order: VerifyOrder,
    /// Shortest accepted secret, in bytes; 0 accepts any secret
    pub min_secret_len: usize,
    /// When set, verified claims must pass the `exp`/`nbf` window check with this leeway
    pub leeway_secs: Option<i64>,
}

impl EngineConfig {
    /// Leeway for the time window check, if enabled. Negative values count
    /// as zero; values beyond the representable range are capped.
    #[must_use]
    pub fn leeway(&self) -> Option<Duration> {
        self.leeway_secs
            .map(|secs| Duration::seconds(secs.clamp(0, MAX_LEEWAY_SECS)))
    }
}
