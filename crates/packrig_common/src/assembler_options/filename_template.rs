use serde::Serialize;

/// A filename pattern with substitution tokens, e.g. `[name].[hash].bundle.js`.
///
/// Supported tokens:
/// - `[name]` — the entry or extraction-unit name.
/// - `[hash]` / `[chunkhash]` — a content/version hash supplied by the
///   external engine at emit time.
#[derive(Debug, Clone, Serialize)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into() }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn has_hash_token(&self) -> bool {
    self.template.contains("[hash]") || self.template.contains("[chunkhash]")
  }

  /// Substitutes tokens. `hash` may be `None` when the caller has no content
  /// hash yet; hash tokens are then left in place for the external engine.
  pub fn render(&self, name: &str, hash: Option<&str>) -> String {
    let mut rendered = self.template.replace("[name]", name);
    if let Some(hash) = hash {
      rendered = rendered.replace("[hash]", hash).replace("[chunkhash]", hash);
    }
    rendered
  }
}

impl From<&str> for FilenameTemplate {
  fn from(template: &str) -> Self {
    Self::new(template)
  }
}

impl From<String> for FilenameTemplate {
  fn from(template: String) -> Self {
    Self::new(template)
  }
}

#[test]
fn test_render() {
  let template = FilenameTemplate::new("[name].[hash].bundle.js");
  assert_eq!(template.render("index", Some("f4c1")), "index.f4c1.bundle.js");
  assert_eq!(template.render("index", None), "index.[hash].bundle.js");

  let css = FilenameTemplate::new("css/[name].[chunkhash].css");
  assert_eq!(css.render("simple", Some("9aa0")), "css/simple.9aa0.css");
  assert!(css.has_hash_token());
}
