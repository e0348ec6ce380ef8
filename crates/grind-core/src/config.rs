use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  info
};

const BUILTIN_DASHBOARD_TOML: &str =
  include_str!(
    "../assets/dashboard.toml"
  );

pub const DEFAULT_COPIED_ACK_MS: u32 =
  2_000;

/// Presentation settings for the
/// dashboard shell.
#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct DashboardConfig {
  pub brand:         String,
  pub reset_prompt:  String,
  pub copied_ack_ms: u32,
  /// Tags offered in the filter bar.
  /// A curated subset, independent of
  /// the tags the catalog actually
  /// uses.
  pub filter_tags:   Vec<String>,
  pub ticker:        Vec<String>
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      brand:         "THE GRIND"
        .to_string(),
      reset_prompt:  "RESET THE GRIND? \
                      This will clear \
                      all progress for \
                      today."
        .to_string(),
      copied_ack_ms:
        DEFAULT_COPIED_ACK_MS,
      filter_tags:   [
        "Top Tier",
        "Passive",
        "Hourly",
        "Testnet",
        "Bandwidth",
        "Game",
        "Social"
      ]
      .into_iter()
      .map(str::to_string)
      .collect(),
      ticker:        vec![]
    }
  }
}

impl DashboardConfig {
  #[tracing::instrument]
  pub fn builtin() -> anyhow::Result<Self>
  {
    Self::from_toml_str(
      BUILTIN_DASHBOARD_TOML
    )
    .context(
      "failed to load built-in \
       dashboard config"
    )
  }

  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: DashboardConfig =
      toml::from_str(text).context(
        "invalid dashboard config"
      )?;

    if cfg.copied_ack_ms == 0 {
      debug!(
        "copied_ack_ms of 0; using \
         default"
      );
      cfg.copied_ack_ms =
        DEFAULT_COPIED_ACK_MS;
    }

    let mut seen = Vec::new();
    cfg.filter_tags.retain(|tag| {
      if seen.contains(tag) {
        false
      } else {
        seen.push(tag.clone());
        true
      }
    });

    info!(
      brand = %cfg.brand,
      filter_tags = cfg.filter_tags.len(),
      ticker = cfg.ticker.len(),
      "loaded dashboard config"
    );
    Ok(cfg)
  }
}
