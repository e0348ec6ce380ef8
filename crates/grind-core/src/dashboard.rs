use std::collections::BTreeSet;

use tracing::{
  debug,
  info
};

use crate::store::{
  KeyValueStore,
  Persistence
};
use crate::theme::ThemeMode;

/// Everything the root view owns. Children
/// only ever see clones of it.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct DashboardState {
  pub theme:        ThemeMode,
  pub completed:    BTreeSet<String>,
  pub selected_tag: Option<String>
}

impl DashboardState {
  /// Startup load. The selected tag is
  /// never persisted.
  #[tracing::instrument(skip_all)]
  pub fn load<S: KeyValueStore>(
    persistence: &Persistence<S>
  ) -> Self {
    let state = Self {
      theme:        persistence
        .load_theme(),
      completed:    persistence
        .load_completed(),
      selected_tag: None
    };

    info!(
      theme = state.theme.storage_value(),
      completed = state.completed.len(),
      "loaded dashboard state"
    );
    state
  }

  pub fn is_dark(&self) -> bool {
    self.theme.is_dark()
  }

  pub fn is_completed(
    &self,
    id: &str
  ) -> bool {
    self.completed.contains(id)
  }

  #[tracing::instrument(skip_all)]
  pub fn toggle_theme<S: KeyValueStore>(
    &mut self,
    persistence: &mut Persistence<S>
  ) -> ThemeMode {
    self.theme = self.theme.next();
    persistence.save_theme(self.theme);
    debug!(
      theme = self.theme.storage_value(),
      "toggled theme"
    );
    self.theme
  }

  /// Flips `id` in the completed set and
  /// persists the result. Returns whether
  /// the link is now done.
  #[tracing::instrument(skip(self, persistence))]
  pub fn toggle_link_complete<
    S: KeyValueStore
  >(
    &mut self,
    id: &str,
    persistence: &mut Persistence<S>
  ) -> bool {
    let done = if self.completed.remove(id)
    {
      false
    } else {
      self.completed.insert(id.to_string());
      true
    };

    persistence
      .save_completed(&self.completed);
    debug!(
      done,
      total = self.completed.len(),
      "toggled link"
    );
    done
  }

  /// Second half of click-to-open: marks
  /// the link done unless it already is.
  /// Returns whether anything changed.
  #[tracing::instrument(skip(self, persistence))]
  pub fn mark_visited<S: KeyValueStore>(
    &mut self,
    id: &str,
    persistence: &mut Persistence<S>
  ) -> bool {
    if self.is_completed(id) {
      return false;
    }
    self.toggle_link_complete(
      id,
      persistence
    )
  }

  /// Clears all progress once `confirm`
  /// says yes. Returns whether a reset
  /// happened.
  #[tracing::instrument(skip_all)]
  pub fn reset_progress<S, F>(
    &mut self,
    confirm: F,
    persistence: &mut Persistence<S>
  ) -> bool
  where
    S: KeyValueStore,
    F: FnOnce() -> bool
  {
    if !confirm() {
      info!("progress reset canceled");
      return false;
    }

    let cleared = self.completed.len();
    self.completed.clear();
    persistence.clear_completed();
    info!(cleared, "progress reset");
    true
  }

  /// Single-select-or-none: picking the
  /// active tag again, or `None`, clears
  /// the filter.
  pub fn select_tag(
    &mut self,
    tag: Option<&str>
  ) {
    self.selected_tag = match tag {
      | Some(tag)
        if self.selected_tag.as_deref()
          != Some(tag) =>
      {
        Some(tag.to_string())
      }
      | _ => None
    };
    debug!(
      selected = ?self.selected_tag,
      "filter changed"
    );
  }
}
