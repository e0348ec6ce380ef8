#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub enum ThemeMode {
  #[default]
  Light,
  Dark
}

impl ThemeMode {
  /// Anything but `"dark"` reads as
  /// light.
  pub fn from_storage(
    value: Option<&str>
  ) -> Self {
    match value {
      | Some("dark") => Self::Dark,
      | _ => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn is_dark(self) -> bool {
    self == Self::Dark
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "Dark mode",
      | Self::Dark => "Light mode"
    }
  }
}
