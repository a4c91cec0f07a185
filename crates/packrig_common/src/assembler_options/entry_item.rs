use arcstr::ArcStr;
use serde::Serialize;

/// One named entry: the bundler traces each import in order to produce the
/// chunk named `name`. Held in a `Vec` so input order is preserved across
/// assembly, which keeps derived output reproducible.
#[derive(Debug, Clone, Serialize)]
pub struct EntryItem {
  pub name: ArcStr,
  pub imports: Vec<String>,
}

impl EntryItem {
  pub fn new(name: impl Into<ArcStr>, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self { name: name.into(), imports: imports.into_iter().map(Into::into).collect() }
  }
}

impl From<(&str, &str)> for EntryItem {
  fn from((name, import): (&str, &str)) -> Self {
    Self { name: ArcStr::from(name), imports: vec![import.to_string()] }
  }
}
