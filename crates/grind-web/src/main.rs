mod app;
mod browser;
mod components;

use std::rc::Rc;

use grind_core::{
  Catalog,
  DashboardConfig
};

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting grind dashboard"
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  let loaded = Catalog::builtin()
    .and_then(|catalog| {
      DashboardConfig::builtin()
        .map(|config| (catalog, config))
    });

  match loaded {
    | Ok((catalog, config)) => {
      yew::Renderer::<app::App>::with_root_and_props(
        mount,
        app::AppProps {
          catalog: Rc::new(catalog),
          config:  Rc::new(config)
        }
      )
      .render();
    }
    | Err(error) => {
      tracing::error!(
        error = ?error,
        "dashboard configuration is \
         invalid"
      );
      yew::Renderer::<
        components::ConfigError,
      >::with_root_and_props(
        mount,
        components::ConfigErrorProps {
          message: format!("{error:#}")
        }
      )
      .render();
    }
  }
}
