use anyhow::{
  Context,
  anyhow
};
use grind_core::{
  KeyValueStore,
  Persistence,
  ThemeMode
};
use wasm_bindgen_futures::JsFuture;

const DARK_CLASS: &str = "dark";

/// `window.localStorage`, looked up on every
/// call so a storage that appears or
/// disappears mid-session is handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .context("no window")?
    .local_storage()
    .map_err(|error| {
      anyhow!(
        "localStorage unavailable: \
         {error:?}"
      )
    })?
    .context("localStorage disabled")
}

impl KeyValueStore for LocalStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(|error| {
        anyhow!(
          "failed reading {key}: \
           {error:?}"
        )
      })
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|error| {
        anyhow!(
          "failed writing {key}: \
           {error:?}"
        )
      })
  }

  fn remove(
    &mut self,
    key: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .remove_item(key)
      .map_err(|error| {
        anyhow!(
          "failed removing {key}: \
           {error:?}"
        )
      })
  }
}

pub fn persistence() -> Persistence<LocalStore>
{
  Persistence::new(LocalStore)
}

/// Toggles the `dark` class on `<html>`.
pub fn apply_theme(theme: ThemeMode) {
  let Some(root) = web_sys::window()
    .and_then(|window| window.document())
    .and_then(|document| {
      document.document_element()
    })
  else {
    tracing::warn!(
      "no document element; theme not \
       applied"
    );
    return;
  };

  if let Err(error) = root
    .class_list()
    .toggle_with_force(
      DARK_CLASS,
      theme.is_dark()
    )
  {
    tracing::warn!(
      ?error,
      "failed toggling theme class"
    );
  }
}

/// Blocking yes/no prompt. A missing
/// window or a failing dialog reads as
/// "no".
pub fn confirm(message: &str) -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .confirm_with_message(message)
        .ok()
    })
    .unwrap_or(false)
}

async fn write_clipboard(
  text: &str
) -> anyhow::Result<()> {
  let window =
    web_sys::window().context("no window")?;
  let promise = window
    .navigator()
    .clipboard()
    .write_text(text);
  JsFuture::from(promise)
    .await
    .map_err(|error| {
      anyhow!(
        "clipboard write rejected: \
         {error:?}"
      )
    })?;
  Ok(())
}

/// Fire-and-forget clipboard write.
pub fn copy_to_clipboard(text: String) {
  wasm_bindgen_futures::spawn_local(
    async move {
      match write_clipboard(&text).await {
        | Ok(()) => {
          tracing::debug!(
            bytes = text.len(),
            "copied to clipboard"
          );
        }
        | Err(error) => {
          tracing::warn!(
            error = ?error,
            "clipboard write failed"
          );
        }
      }
    }
  );
}
