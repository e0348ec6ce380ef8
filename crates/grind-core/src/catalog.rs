use std::collections::{
  BTreeMap,
  BTreeSet
};

use anyhow::{
  Context,
  bail
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  info
};

const BUILTIN_CATALOG_TOML: &str =
  include_str!("../assets/catalog.toml");

const FALLBACK_COLOR: &str = "#6b7280";

/// Display group of a link. Declaration
/// order is the order cards are laid out.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  PassiveNodes,
  Bandwidth,
  Testnets,
  Faucets,
  Quests,
  Games,
  Social,
  Tools
}

impl Category {
  pub const ALL: [Category; 8] = [
    Category::PassiveNodes,
    Category::Bandwidth,
    Category::Testnets,
    Category::Faucets,
    Category::Quests,
    Category::Games,
    Category::Social,
    Category::Tools
  ];

  pub fn label(self) -> &'static str {
    match self {
      | Self::PassiveNodes => {
        "Passive Nodes (DePIN)"
      }
      | Self::Bandwidth => {
        "Bandwidth Sharing"
      }
      | Self::Testnets => {
        "Testnets (Airdrop Farming)"
      }
      | Self::Faucets => {
        "Faucets (Hourly Claims)"
      }
      | Self::Quests => "Quest Platforms",
      | Self::Games => "Play & Earn",
      | Self::Social => "SocialFi",
      | Self::Tools => {
        "Tools (Trackers & Wallets)"
      }
    }
  }

  /// Label without the parenthesized
  /// qualifier, used in card headers.
  pub fn short_label(
    self
  ) -> &'static str {
    let label = self.label();
    label
      .split('(')
      .next()
      .unwrap_or(label)
      .trim()
  }

  pub fn key(self) -> &'static str {
    match self {
      | Self::PassiveNodes => {
        "passive-nodes"
      }
      | Self::Bandwidth => "bandwidth",
      | Self::Testnets => "testnets",
      | Self::Faucets => "faucets",
      | Self::Quests => "quests",
      | Self::Games => "games",
      | Self::Social => "social",
      | Self::Tools => "tools"
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct CategoryStyle {
  pub color:       String,
  #[serde(default)]
  pub description: String
}

impl Default for CategoryStyle {
  fn default() -> Self {
    Self {
      color:       FALLBACK_COLOR
        .to_string(),
      description: String::new()
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct LinkItem {
  pub id:          String,
  pub title:       String,
  pub url:         String,
  pub category:    Category,
  #[serde(default)]
  pub tags:        Vec<String>,
  #[serde(default)]
  pub recommended: bool
}

impl LinkItem {
  pub fn has_tag(
    &self,
    tag: &str
  ) -> bool {
    self
      .tags
      .iter()
      .any(|value| value == tag)
  }
}

impl AsRef<LinkItem> for LinkItem {
  fn as_ref(&self) -> &LinkItem {
    self
  }
}

/// The static link collection plus the
/// per-category style table.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Catalog {
  #[serde(default)]
  styles: BTreeMap<Category, CategoryStyle>,
  #[serde(default)]
  links:  Vec<LinkItem>
}

impl Catalog {
  /// Catalog compiled into the binary.
  #[tracing::instrument]
  pub fn builtin() -> anyhow::Result<Self>
  {
    Self::from_toml_str(
      BUILTIN_CATALOG_TOML
    )
    .context(
      "failed to load built-in link \
       catalog"
    )
  }

  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let catalog: Catalog =
      toml::from_str(text).context(
        "invalid catalog document"
      )?;
    catalog.validate()?;

    info!(
      links = catalog.links.len(),
      styles = catalog.styles.len(),
      "loaded link catalog"
    );
    Ok(catalog)
  }

  pub fn new(
    links: Vec<LinkItem>,
    styles: BTreeMap<
      Category,
      CategoryStyle
    >
  ) -> anyhow::Result<Self> {
    let catalog =
      Catalog { styles, links };
    catalog.validate()?;
    Ok(catalog)
  }

  fn validate(
    &self
  ) -> anyhow::Result<()> {
    if self.links.is_empty() {
      bail!("catalog has no links");
    }

    let mut seen = BTreeSet::new();
    for link in &self.links {
      if link.id.trim().is_empty() {
        bail!(
          "catalog link '{}' has an \
           empty id",
          link.title
        );
      }
      if !seen.insert(link.id.as_str())
      {
        bail!(
          "duplicate catalog id '{}'",
          link.id
        );
      }
      if link.title.trim().is_empty() {
        bail!(
          "catalog link '{}' has an \
           empty title",
          link.id
        );
      }
      if link.url.trim().is_empty() {
        bail!(
          "catalog link '{}' has an \
           empty url",
          link.id
        );
      }

      let mut tags = BTreeSet::new();
      for tag in &link.tags {
        if !tags.insert(tag.as_str()) {
          bail!(
            "catalog link '{}' repeats \
             tag '{}'",
            link.id,
            tag
          );
        }
      }
    }

    for category in Category::ALL {
      if !self
        .styles
        .contains_key(&category)
      {
        debug!(
          category = category.key(),
          "no style entry; using \
           fallback"
        );
      }
    }

    Ok(())
  }

  pub fn links(&self) -> &[LinkItem] {
    &self.links
  }

  pub fn len(&self) -> usize {
    self.links.len()
  }

  pub fn is_empty(&self) -> bool {
    self.links.is_empty()
  }

  pub fn get(
    &self,
    id: &str
  ) -> Option<&LinkItem> {
    self
      .links
      .iter()
      .find(|link| link.id == id)
  }

  pub fn contains(
    &self,
    id: &str
  ) -> bool {
    self.get(id).is_some()
  }

  pub fn style(
    &self,
    category: Category
  ) -> CategoryStyle {
    self
      .styles
      .get(&category)
      .cloned()
      .unwrap_or_default()
  }
}
