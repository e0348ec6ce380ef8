use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TickerProps {
  pub items: Vec<String>
}

#[function_component(Ticker)]
pub fn ticker(
  props: &TickerProps
) -> Html {
  if props.items.is_empty() {
    return html! {};
  }

  html! {
      <div class="ticker">
          <div class="ticker-track">
              {
                  for props.items.iter().map(|item| html! {
                      <span class="ticker-item">{ item.clone() }</span>
                  })
              }
          </div>
      </div>
  }
}
