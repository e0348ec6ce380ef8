use grind_core::LinkItem;
use grind_core::view::badge_tags;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::TagBadge;

#[derive(Properties, PartialEq)]
pub struct LinkRowProps {
  pub link:      LinkItem,
  pub done:      bool,
  pub on_toggle: Callback<String>,
  /// Fired after the anchor opens the
  /// link; the root decides whether to
  /// mark it done.
  pub on_visit:  Callback<String>
}

/// Which part of the row was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowTarget {
  Checkbox,
  Anchor
}

/// The checkbox flips the link; the
/// anchor only ever reports a visit, so a
/// done link stays done when reopened.
fn route_click(
  target: RowTarget,
  id: &str,
  on_toggle: &Callback<String>,
  on_visit: &Callback<String>
) {
  let callback = match target {
    | RowTarget::Checkbox => on_toggle,
    | RowTarget::Anchor => on_visit
  };
  callback.emit(id.to_string());
}

fn shows_recommended_marker(
  link: &LinkItem,
  done: bool
) -> bool {
  link.recommended && !done
}

#[function_component(LinkRow)]
pub fn link_row(
  props: &LinkRowProps
) -> Html {
  let link = &props.link;
  let done = props.done;

  let on_click = |target: RowTarget| {
    let on_toggle =
      props.on_toggle.clone();
    let on_visit =
      props.on_visit.clone();
    let id = link.id.clone();
    Callback::from(move |_: MouseEvent| {
      route_click(
        target,
        &id,
        &on_toggle,
        &on_visit
      )
    })
  };
  let on_toggle =
    on_click(RowTarget::Checkbox);
  let on_open = on_click(RowTarget::Anchor);

  html! {
      <div class={classes!("link-row", done.then_some("done"))}>
          <button
              class="check"
              aria-label={if done { "Mark as not done" } else { "Mark as done" }}
              onclick={on_toggle}
          >
              { if done { "☑" } else { "☐" } }
          </button>
          <a
              class="link"
              href={link.url.clone()}
              target="_blank"
              rel="noopener noreferrer"
              onclick={on_open}
          >
              <span class="link-title">
                  <span class="title">{ link.title.clone() }</span>
                  {
                      if shows_recommended_marker(link, done) {
                          html! { <span class="star" title="Recommended">{ "★" }</span> }
                      } else {
                          html! {}
                      }
                  }
              </span>
              <span class="link-tags">
                  {
                      for badge_tags(link).iter().map(|tag| html! {
                          <TagBadge tag={tag.clone()} />
                      })
                  }
              </span>
          </a>
      </div>
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;
  use std::rc::Rc;

  use grind_core::Category;

  use super::*;

  fn recorder(
    log: &Rc<RefCell<Vec<String>>>,
    name: &'static str
  ) -> Callback<String> {
    let log = log.clone();
    Callback::from(move |id: String| {
      log
        .borrow_mut()
        .push(format!("{name}:{id}"))
    })
  }

  #[test]
  fn anchor_reports_visit_not_toggle() {
    let log =
      Rc::new(RefCell::new(Vec::new()));
    let on_toggle =
      recorder(&log, "toggle");
    let on_visit =
      recorder(&log, "visit");

    route_click(
      RowTarget::Anchor,
      "grass",
      &on_toggle,
      &on_visit
    );
    assert_eq!(
      *log.borrow(),
      vec!["visit:grass"]
    );
  }

  #[test]
  fn checkbox_reports_toggle() {
    let log =
      Rc::new(RefCell::new(Vec::new()));
    let on_toggle =
      recorder(&log, "toggle");
    let on_visit =
      recorder(&log, "visit");

    route_click(
      RowTarget::Checkbox,
      "grass",
      &on_toggle,
      &on_visit
    );
    route_click(
      RowTarget::Checkbox,
      "grass",
      &on_toggle,
      &on_visit
    );
    assert_eq!(
      *log.borrow(),
      vec!["toggle:grass", "toggle:grass"]
    );
  }

  #[test]
  fn star_only_for_recommended_links_not_done(
  ) {
    let mut link = LinkItem {
      id:          "grass".to_string(),
      title:       "Grass".to_string(),
      url:         "https://example.com"
        .to_string(),
      category:    Category::PassiveNodes,
      tags:        vec![],
      recommended: true
    };

    assert!(shows_recommended_marker(
      &link, false
    ));
    assert!(!shows_recommended_marker(
      &link, true
    ));

    link.recommended = false;
    assert!(!shows_recommended_marker(
      &link, false
    ));
  }
}
