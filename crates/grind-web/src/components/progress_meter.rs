use grind_core::Progress;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ProgressMeterProps {
  pub progress: Progress
}

#[function_component(ProgressMeter)]
pub fn progress_meter(
  props: &ProgressMeterProps
) -> Html {
  let progress = props.progress;
  let fill =
    format!("width:{}%;", progress.percent);

  html! {
      <div
          class="progress-meter"
          title={format!("{}/{} done", progress.completed, progress.total)}
      >
          <div class="level">
              <span class="level-label">{ "LVL" }</span>
              <span class="level-value">{ progress.level.to_string() }</span>
          </div>
          <div class="xp">
              <div class="xp-labels">
                  <span>{ "XP" }</span>
                  <span>{ format!("{}%", progress.percent) }</span>
              </div>
              <div class="xp-track">
                  <div class="xp-fill" style={fill}></div>
              </div>
          </div>
      </div>
  }
}
