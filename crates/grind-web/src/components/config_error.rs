use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ConfigErrorProps {
  pub message: String
}

#[function_component(ConfigError)]
pub fn config_error(
  props: &ConfigErrorProps
) -> Html {
  html! {
      <div class="config-error">
          <h1>{ "Dashboard configuration error" }</h1>
          <pre>{ props.message.clone() }</pre>
      </div>
  }
}
