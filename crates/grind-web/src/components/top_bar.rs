use grind_core::{
  Progress,
  ThemeMode
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::{
  ProgressMeter,
  Ticker
};

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
  pub brand:           String,
  pub progress:        Progress,
  pub theme:           ThemeMode,
  pub ticker:          Vec<String>,
  pub on_reset:        Callback<MouseEvent>,
  pub on_toggle_theme: Callback<MouseEvent>
}

#[function_component(TopBar)]
pub fn top_bar(
  props: &TopBarProps
) -> Html {
  let theme_icon = if props.theme.is_dark()
  {
    "☀"
  } else {
    "☾"
  };

  html! {
      <div class="topbar">
          <div class="topbar-left">
              <div class="brand">{ props.brand.clone() }</div>
              <ProgressMeter progress={props.progress} />
          </div>

          <Ticker items={props.ticker.clone()} />

          <div class="topbar-actions">
              <button
                  class="btn icon danger"
                  title="Reset Daily Progress"
                  aria-label="Reset Daily Progress"
                  onclick={props.on_reset.clone()}
              >
                  { "↻" }
              </button>
              <button
                  class="btn icon"
                  title={props.theme.toggle_label()}
                  aria-label={props.theme.toggle_label()}
                  onclick={props.on_toggle_theme.clone()}
              >
                  { theme_icon }
              </button>
          </div>
      </div>
  }
}
