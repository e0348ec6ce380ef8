use std::collections::{
  BTreeMap,
  BTreeSet
};

use anyhow::{
  Context,
  bail
};
use tracing::{
  debug,
  warn
};

use crate::theme::ThemeMode;

pub const THEME_STORAGE_KEY: &str =
  "theme";
pub const COMPLETED_STORAGE_KEY: &str =
  "completedLinks";

/// String-valued key-value storage that
/// survives reloads.
pub trait KeyValueStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;

  fn remove(
    &mut self,
    key: &str
  ) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries:   BTreeMap<String, String>,
  read_only: bool
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// A store that keeps its contents but
  /// rejects every write, like a browser
  /// storage over quota.
  pub fn read_only(
    entries: BTreeMap<String, String>
  ) -> Self {
    Self {
      entries,
      read_only: true
    }
  }

  pub fn entries(
    &self
  ) -> &BTreeMap<String, String> {
    &self.entries
  }
}

impl KeyValueStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    if self.read_only {
      bail!(
        "store is read-only; cannot set \
         {key}"
      );
    }
    self.entries.insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }

  fn remove(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    if self.read_only {
      bail!(
        "store is read-only; cannot \
         remove {key}"
      );
    }
    self.entries.remove(key);
    Ok(())
  }
}

/// Write-through persistence for the
/// theme and the completed set. Loads
/// degrade to defaults and writes never
/// fail the caller.
#[derive(Debug, Clone, Default)]
pub struct Persistence<S> {
  store: S
}

impl<S: KeyValueStore> Persistence<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn into_inner(self) -> S {
    self.store
  }

  #[tracing::instrument(skip(self))]
  pub fn load_theme(&self) -> ThemeMode {
    let stored = self
      .store
      .get(THEME_STORAGE_KEY)
      .unwrap_or_else(|error| {
        warn!(
          %error,
          "failed reading theme; \
           defaulting to light"
        );
        None
      });

    ThemeMode::from_storage(
      stored.as_deref()
    )
  }

  #[tracing::instrument(skip(self))]
  pub fn save_theme(
    &mut self,
    theme: ThemeMode
  ) {
    if let Err(error) = self.store.set(
      THEME_STORAGE_KEY,
      theme.storage_value()
    ) {
      warn!(
        %error,
        "failed persisting theme"
      );
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn load_completed(
    &self
  ) -> BTreeSet<String> {
    let stored = match self
      .store
      .get(COMPLETED_STORAGE_KEY)
    {
      | Ok(stored) => stored,
      | Err(error) => {
        warn!(
          %error,
          "failed reading completed \
           links"
        );
        None
      }
    };

    let Some(raw) = stored else {
      return BTreeSet::new();
    };

    match parse_completed(&raw) {
      | Ok(ids) => {
        debug!(
          count = ids.len(),
          "loaded completed links"
        );
        ids
      }
      | Err(error) => {
        warn!(
          %error,
          "discarding corrupt completed \
           links"
        );
        BTreeSet::new()
      }
    }
  }

  #[tracing::instrument(skip(self, ids), fields(count = ids.len()))]
  pub fn save_completed(
    &mut self,
    ids: &BTreeSet<String>
  ) {
    let json = match serde_json::to_string(
      ids
    ) {
      | Ok(json) => json,
      | Err(error) => {
        warn!(
          %error,
          "failed encoding completed \
           links"
        );
        return;
      }
    };

    if let Err(error) = self
      .store
      .set(COMPLETED_STORAGE_KEY, &json)
    {
      warn!(
        %error,
        "failed persisting completed \
         links"
      );
    }
  }

  #[tracing::instrument(skip(self))]
  pub fn clear_completed(&mut self) {
    if let Err(error) = self
      .store
      .remove(COMPLETED_STORAGE_KEY)
    {
      warn!(
        %error,
        "failed clearing completed \
         links"
      );
    }
  }
}

fn parse_completed(
  raw: &str
) -> anyhow::Result<BTreeSet<String>> {
  serde_json::from_str::<Vec<String>>(raw)
    .map(|ids| ids.into_iter().collect())
    .context(
      "completed links are not a JSON \
       array of strings"
    )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(
    values: &[&str]
  ) -> BTreeSet<String> {
    values
      .iter()
      .map(|value| value.to_string())
      .collect()
  }

  fn seeded(
    key: &str,
    value: &str
  ) -> Persistence<MemoryStore> {
    let mut store = MemoryStore::new();
    store
      .set(key, value)
      .expect("seed store");
    Persistence::new(store)
  }

  #[test]
  fn empty_store_yields_defaults() {
    let persistence =
      Persistence::new(MemoryStore::new());
    assert_eq!(
      persistence.load_theme(),
      ThemeMode::Light
    );
    assert!(
      persistence
        .load_completed()
        .is_empty()
    );
  }

  #[test]
  fn theme_is_stored_as_dark_or_light()
  {
    let mut persistence =
      Persistence::new(MemoryStore::new());
    persistence
      .save_theme(ThemeMode::Dark);
    assert_eq!(
      persistence
        .store()
        .entries()
        .get(THEME_STORAGE_KEY)
        .map(String::as_str),
      Some("dark")
    );
    assert_eq!(
      persistence.load_theme(),
      ThemeMode::Dark
    );

    persistence
      .save_theme(ThemeMode::Light);
    assert_eq!(
      persistence.load_theme(),
      ThemeMode::Light
    );
  }

  #[test]
  fn unknown_theme_value_reads_as_light()
  {
    let persistence =
      seeded(THEME_STORAGE_KEY, "sepia");
    assert_eq!(
      persistence.load_theme(),
      ThemeMode::Light
    );
  }

  #[test]
  fn completed_round_trips_as_json_array(
  ) {
    let mut persistence =
      Persistence::new(MemoryStore::new());
    persistence
      .save_completed(&ids(&["b", "a"]));
    assert_eq!(
      persistence
        .store()
        .entries()
        .get(COMPLETED_STORAGE_KEY)
        .map(String::as_str),
      Some(r#"["a","b"]"#)
    );
    assert_eq!(
      persistence.load_completed(),
      ids(&["a", "b"])
    );
  }

  #[test]
  fn corrupt_completed_yields_empty_set(
  ) {
    for raw in [
      "not json",
      "{\"a\":1}",
      "[1,2,3]",
      ""
    ] {
      let persistence =
        seeded(COMPLETED_STORAGE_KEY, raw);
      assert!(
        persistence
          .load_completed()
          .is_empty(),
        "{raw:?} should load as empty"
      );
    }
  }

  #[test]
  fn duplicate_ids_in_storage_collapse()
  {
    let persistence = seeded(
      COMPLETED_STORAGE_KEY,
      r#"["a","a","b"]"#
    );
    assert_eq!(
      persistence.load_completed(),
      ids(&["a", "b"])
    );
  }

  #[test]
  fn clear_removes_the_entry() {
    let mut persistence = seeded(
      COMPLETED_STORAGE_KEY,
      r#"["a"]"#
    );
    persistence.clear_completed();
    assert!(
      !persistence
        .store()
        .entries()
        .contains_key(
          COMPLETED_STORAGE_KEY
        )
    );
  }

  #[test]
  fn write_failures_are_swallowed() {
    let mut entries = BTreeMap::new();
    entries.insert(
      COMPLETED_STORAGE_KEY.to_string(),
      r#"["a"]"#.to_string()
    );
    let mut persistence =
      Persistence::new(
        MemoryStore::read_only(entries)
      );

    persistence
      .save_completed(&ids(&["a", "b"]));
    persistence
      .save_theme(ThemeMode::Dark);
    persistence.clear_completed();

    assert_eq!(
      persistence.load_completed(),
      ids(&["a"])
    );
    assert_eq!(
      persistence.load_theme(),
      ThemeMode::Light
    );
  }
}
