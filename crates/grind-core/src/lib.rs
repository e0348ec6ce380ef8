//! Core of the grind dashboard: the static
//! link catalog, the persisted progress, and
//! the values the view derives from them.
//! Browser glue lives in `grind_web`.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod store;
pub mod theme;
pub mod view;

pub use catalog::{
  Catalog,
  Category,
  CategoryStyle,
  LinkItem
};
pub use config::DashboardConfig;
pub use dashboard::DashboardState;
pub use store::{
  KeyValueStore,
  MemoryStore,
  Persistence
};
pub use theme::ThemeMode;
pub use view::{
  CardSummary,
  Progress
};
