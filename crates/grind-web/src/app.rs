use std::rc::Rc;

use grind_core::view::{
  all_tags,
  filtered_links,
  grouped_by_category,
  progress,
  visible_categories
};
use grind_core::{
  Catalog,
  DashboardConfig,
  DashboardState,
  LinkItem,
  ThemeMode
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_state
};

use crate::browser;
use crate::components::{
  FilterBar,
  LinkCard,
  TopBar
};

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub catalog: Rc<Catalog>,
  pub config:  Rc<DashboardConfig>
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let state = use_state(|| {
    DashboardState::load(
      &browser::persistence()
    )
  });

  use_effect_with(
    state.theme,
    |theme: &ThemeMode| {
      browser::apply_theme(*theme);
      || ()
    }
  );

  let known_tags = {
    let catalog = props.catalog.clone();
    use_memo((), move |_| {
      let tags = all_tags(&catalog);
      tracing::debug!(
        tags = tags.len(),
        "collected catalog tags"
      );
      tags
    })
  };

  let on_toggle_theme = {
    let state = state.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = (*state).clone();
      next.toggle_theme(
        &mut browser::persistence()
      );
      state.set(next);
    })
  };

  let on_reset = {
    let state = state.clone();
    let prompt =
      props.config.reset_prompt.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = (*state).clone();
      let reset = next.reset_progress(
        || browser::confirm(&prompt),
        &mut browser::persistence()
      );
      if reset {
        state.set(next);
      }
    })
  };

  let on_toggle_link = {
    let state = state.clone();
    Callback::from(move |id: String| {
      let mut next = (*state).clone();
      next.toggle_link_complete(
        &id,
        &mut browser::persistence()
      );
      state.set(next);
    })
  };

  let on_visit_link = {
    let state = state.clone();
    Callback::from(move |id: String| {
      let mut next = (*state).clone();
      if next.mark_visited(
        &id,
        &mut browser::persistence()
      ) {
        state.set(next);
      }
    })
  };

  let on_select_tag = {
    let state = state.clone();
    Callback::from(
      move |tag: Option<String>| {
        let mut next = (*state).clone();
        next.select_tag(tag.as_deref());
        state.set(next);
      }
    )
  };

  let catalog = &props.catalog;
  let selected =
    state.selected_tag.as_deref();
  let filtered =
    filtered_links(catalog, selected);
  let groups =
    grouped_by_category(&filtered);
  let categories =
    visible_categories(&groups, selected);
  let progress =
    progress(&state.completed, catalog);

  html! {
      <div class={classes!("app", state.theme.as_class())}>
          <TopBar
              brand={props.config.brand.clone()}
              progress={progress}
              theme={state.theme}
              ticker={props.config.ticker.clone()}
              on_reset={on_reset}
              on_toggle_theme={on_toggle_theme}
          />

          <FilterBar
              tags={props.config.filter_tags.clone()}
              known_tags={known_tags}
              selected={state.selected_tag.clone()}
              on_select={on_select_tag}
          />

          <div class="main">
              <div class="card-grid">
                  {
                      for categories.into_iter().map(|category| {
                          let links: Vec<LinkItem> = groups
                              .get(&category)
                              .map(|links| links.iter().map(|link| (*link).clone()).collect())
                              .unwrap_or_default();
                          html! {
                              <div class="card-slot" key={category.key()}>
                                  <LinkCard
                                      category={category}
                                      style={catalog.style(category)}
                                      links={links}
                                      completed={state.completed.clone()}
                                      copied_ack_ms={props.config.copied_ack_ms}
                                      on_toggle={on_toggle_link.clone()}
                                      on_visit={on_visit_link.clone()}
                                  />
                              </div>
                          }
                      })
                  }
              </div>
          </div>
      </div>
  }
}
