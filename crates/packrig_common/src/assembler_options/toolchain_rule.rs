use arcstr::ArcStr;
use serde::Serialize;

/// Routes files matching a glob pattern through an ordered chain of external
/// transform tools. Patterns are globs (`**/*.js`), not regexes.
#[derive(Debug, Clone, Serialize)]
pub struct ToolchainRule {
  pub test: String,
  pub exclude: Option<String>,
  pub use_chain: Vec<ToolInvocation>,
  /// Present on style rules whose output is collected by an extraction unit.
  pub extraction: Option<ExtractionBinding>,
}

impl ToolchainRule {
  pub fn new(test: impl Into<String>, use_chain: impl IntoIterator<Item = ToolInvocation>) -> Self {
    Self {
      test: test.into(),
      exclude: None,
      use_chain: use_chain.into_iter().collect(),
      extraction: None,
    }
  }

  pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
    self.exclude = Some(exclude.into());
    self
  }

  pub fn with_extraction(mut self, extraction: ExtractionBinding) -> Self {
    self.extraction = Some(extraction);
    self
  }

  pub fn matches(&self, path: &str) -> bool {
    if !fast_glob::glob_match(&self.test, path) {
      return false;
    }
    self.exclude.as_ref().is_none_or(|exclude| !fast_glob::glob_match(exclude, path))
  }
}

/// One external transform tool plus its option string, parsed from the
/// `tool?options` notation, e.g. `postcss?pack=cleaner`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInvocation {
  pub tool: ArcStr,
  pub options: Option<String>,
}

impl From<&str> for ToolInvocation {
  fn from(value: &str) -> Self {
    match value.split_once('?') {
      Some((tool, options)) => {
        Self { tool: ArcStr::from(tool), options: Some(options.to_string()) }
      }
      None => Self { tool: ArcStr::from(value), options: None },
    }
  }
}

/// Ties a style rule to the extraction unit that collects its output.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionBinding {
  pub unit: ArcStr,
  /// Tool used when the unit is disabled and styles stay inline.
  pub fallback: ToolInvocation,
  /// Overrides the output policy's public path for extracted files.
  pub public_path: Option<String>,
}

#[test]
fn test_rule_matches() {
  let rule = ToolchainRule::new("**/*.js", [ToolInvocation::from("babel")])
    .with_exclude("**/node_modules/**");
  assert!(rule.matches("examples/index.js"));
  assert!(!rule.matches("examples/index.scss"));
  assert!(!rule.matches("node_modules/lodash/index.js"));
}

#[test]
fn test_tool_invocation_from_str() {
  let plain = ToolInvocation::from("babel");
  assert_eq!(plain.tool, "babel");
  assert!(plain.options.is_none());

  let with_options = ToolInvocation::from("sass?outputStyle=expanded");
  assert_eq!(with_options.tool, "sass");
  assert_eq!(with_options.options.as_deref(), Some("outputStyle=expanded"));
}
