use std::collections::BTreeSet;

use gloo::timers::callback::Timeout;
use grind_core::view::{
  card_summary,
  clipboard_payload
};
use grind_core::{
  Category,
  CategoryStyle,
  LinkItem
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use super::LinkRow;
use crate::browser;

#[derive(Properties, PartialEq)]
pub struct LinkCardProps {
  pub category:      Category,
  pub style:         CategoryStyle,
  pub links:         Vec<LinkItem>,
  pub completed:     BTreeSet<String>,
  pub copied_ack_ms: u32,
  pub on_toggle:     Callback<String>,
  pub on_visit:      Callback<String>
}

/// Pending revert of the copied
/// acknowledgment. Arming drops the
/// previous handle, which cancels its
/// timer.
#[derive(Debug)]
struct AckSlot<H> {
  pending:    Option<H>,
  generation: u64,
  shown:      bool
}

impl<H> Default for AckSlot<H> {
  fn default() -> Self {
    Self {
      pending:    None,
      generation: 0,
      shown:      false
    }
  }
}

impl<H> AckSlot<H> {
  /// Generation the next `arm` will hand
  /// out; the timer closure captures it.
  fn next_generation(&self) -> u64 {
    self.generation + 1
  }

  /// Shows the ack and replaces the
  /// pending handle. Returns the
  /// superseded one.
  fn arm(
    &mut self,
    handle: H
  ) -> Option<H> {
    self.generation =
      self.next_generation();
    self.shown = true;
    self.pending.replace(handle)
  }

  /// Timer fired. Only the latest
  /// generation hides the ack. The fired
  /// handle stays put: dropping it here
  /// would free the closure that is
  /// running.
  fn settle(
    &mut self,
    generation: u64
  ) -> bool {
    if !self.shown
      || generation != self.generation
    {
      return false;
    }
    self.shown = false;
    true
  }

  /// Unmount: cancel whatever is pending.
  fn clear(&mut self) -> Option<H> {
    self.shown = false;
    self.pending.take()
  }
}

#[function_component(LinkCard)]
pub fn link_card(
  props: &LinkCardProps
) -> Html {
  let copied = use_state(|| false);
  let copied_timer =
    use_mut_ref(AckSlot::<Timeout>::default);

  {
    let copied_timer =
      copied_timer.clone();
    use_effect_with((), move |_| {
      move || {
        copied_timer.borrow_mut().clear();
      }
    });
  }

  let summary = card_summary(
    &props.links,
    &props.completed
  );

  let on_copy = {
    let copied = copied.clone();
    let copied_timer =
      copied_timer.clone();
    let payload =
      clipboard_payload(&props.links);
    let delay = props.copied_ack_ms;
    let category = props.category;
    Callback::from(move |_: MouseEvent| {
      tracing::info!(
        category = category.key(),
        "copying category urls"
      );
      browser::copy_to_clipboard(
        payload.clone()
      );
      copied.set(true);

      let generation = copied_timer
        .borrow()
        .next_generation();
      let timeout = {
        let copied = copied.clone();
        let copied_timer =
          copied_timer.clone();
        Timeout::new(delay, move || {
          if copied_timer
            .borrow_mut()
            .settle(generation)
          {
            copied.set(false);
          }
        })
      };
      // superseded timer is cancelled here
      drop(
        copied_timer
          .borrow_mut()
          .arm(timeout)
      );
    })
  };

  let header_style = format!(
    "background-color:{};",
    props.style.color
  );

  html! {
      <div class="card">
          <div class="card-header" style={header_style}>
              <div class="card-title">
                  <h2 title={props.category.label()}>{ props.category.short_label() }</h2>
                  <span class="card-count">{ format!("{}/{}", summary.done, summary.total) }</span>
              </div>
              <div class="card-actions">
                  <span class="info" title={props.style.description.clone()}>{ "ⓘ" }</span>
                  <button
                      class="btn icon"
                      title="Copy All URLs"
                      aria-label="Copy All URLs"
                      onclick={on_copy}
                  >
                      { if *copied { "✓" } else { "⧉" } }
                  </button>
              </div>
          </div>

          <div class="card-links">
              {
                  for props.links.iter().map(|link| html! {
                      <LinkRow
                          key={link.id.clone()}
                          link={link.clone()}
                          done={props.completed.contains(&link.id)}
                          on_toggle={props.on_toggle.clone()}
                          on_visit={props.on_visit.clone()}
                      />
                  })
              }
          </div>

          {
              if summary.all_done {
                  html! { <div class="card-complete">{ "COMPLETE" }</div> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::rc::Rc;

  use super::*;

  /// Stand-in for a timer handle that
  /// records when it is dropped.
  struct Handle(Rc<Cell<bool>>);

  impl Drop for Handle {
    fn drop(&mut self) {
      self.0.set(true);
    }
  }

  fn handle() -> (Handle, Rc<Cell<bool>>) {
    let cancelled = Rc::new(Cell::new(false));
    (Handle(cancelled.clone()), cancelled)
  }

  #[test]
  fn ack_reverts_when_its_timer_fires() {
    let mut slot = AckSlot::default();
    let (first, cancelled) = handle();

    let generation = slot.next_generation();
    assert!(slot.arm(first).is_none());
    assert!(slot.shown);

    assert!(slot.settle(generation));
    assert!(!slot.shown);
    assert!(!cancelled.get());

    // a late duplicate fire is ignored
    assert!(!slot.settle(generation));
  }

  #[test]
  fn retrigger_supersedes_pending_timer() {
    let mut slot = AckSlot::default();
    let (first, first_cancelled) = handle();
    let (second, second_cancelled) =
      handle();

    let stale = slot.next_generation();
    slot.arm(first);
    let current = slot.next_generation();
    drop(slot.arm(second));

    assert!(first_cancelled.get());
    assert!(!second_cancelled.get());

    assert!(!slot.settle(stale));
    assert!(slot.shown);
    assert!(slot.settle(current));
    assert!(!slot.shown);
  }

  #[test]
  fn clear_cancels_pending_timer() {
    let mut slot = AckSlot::default();
    let (pending, cancelled) = handle();
    let generation = slot.next_generation();
    slot.arm(pending);

    drop(slot.clear());
    assert!(cancelled.get());
    assert!(!slot.shown);
    assert!(!slot.settle(generation));
  }
}
