use std::fmt::Display;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceMapMode {
  Disabled,
  /// Separate `.map` files next to the emitted assets.
  File,
  Inline,
}

impl Display for SourceMapMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Disabled => write!(f, "false"),
      Self::File => write!(f, "source-map"),
      Self::Inline => write!(f, "inline-source-map"),
    }
  }
}

#[test]
fn test_display_matches_the_external_tool_strings() {
  assert_eq!(SourceMapMode::File.to_string(), "source-map");
  assert_eq!(SourceMapMode::Disabled.to_string(), "false");
}
