mod config_error;
mod filter_bar;
mod link_card;
mod link_row;
mod progress_meter;
mod tag_badge;
mod ticker;
mod top_bar;

pub use config_error::{
  ConfigError,
  ConfigErrorProps
};
pub use filter_bar::FilterBar;
pub use link_card::LinkCard;
pub use link_row::LinkRow;
pub use progress_meter::ProgressMeter;
pub use tag_badge::TagBadge;
pub use ticker::Ticker;
pub use top_bar::TopBar;
