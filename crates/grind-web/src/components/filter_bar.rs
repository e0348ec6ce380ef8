use std::collections::BTreeSet;
use std::rc::Rc;

use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  /// Curated buttons, in display order.
  pub tags:       Vec<String>,
  /// Tags the catalog actually uses.
  pub known_tags: Rc<BTreeSet<String>>,
  pub selected:   Option<String>,
  pub on_select:  Callback<Option<String>>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let on_select_all = {
    let on_select =
      props.on_select.clone();
    Callback::from(move |_: MouseEvent| {
      on_select.emit(None)
    })
  };

  html! {
      <div class="filter-bar">
          <span class="filter-icon" aria-hidden="true">{ "⏷" }</span>
          <button
              class={classes!("filter-btn", "filter-all", props.selected.is_none().then_some("active"))}
              onclick={on_select_all}
          >
              { "ALL" }
          </button>
          {
              for props.tags.iter().map(|tag| {
                  let on_select = props.on_select.clone();
                  let tag_value = tag.clone();
                  let is_active = props.selected.as_deref() == Some(tag.as_str());
                  let is_unused = !props.known_tags.contains(tag);
                  html! {
                      <button
                          class={classes!(
                              "filter-btn",
                              is_active.then_some("active"),
                              is_unused.then_some("unused")
                          )}
                          onclick={Callback::from(move |_| on_select.emit(Some(tag_value.clone())))}
                      >
                          { tag.clone() }
                      </button>
                  }
              })
          }
      </div>
  }
}
