//! Unique slug generation for heading anchors.
use std::collections::HashMap;

/// Generates URL-safe, per-pass-unique slugs from heading text.
///
/// Occurrence counts are scoped to one instance, so each document pass gets
/// a fresh `Slugifier` and concurrent passes cannot collide.
#[derive(Debug, Default)]
pub struct Slugifier {
  /// Occurrence count per base slug, keyed on the escaped base.
  counts: HashMap<String, usize>,
}

impl Slugifier {
  /// Create a slugifier with no recorded slugs.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Derive the slug for one heading.
  ///
  /// The base is the lower-cased text with everything but word characters,
  /// hyphens and spaces removed, space runs converted to single hyphens,
  /// and the remainder percent-escaped for use as a URI fragment. Repeats
  /// of the same base within one pass get a `-N` suffix in first-seen
  /// order: `base`, `base-1`, `base-2`, ...
  ///
  /// Empty text yields an empty base slug, still subject to suffixing.
  pub fn slugify(&mut self, text: &str) -> String {
    let base = urlencoding::encode(&clean(text)).into_owned();

    let count = self.counts.entry(base.clone()).or_insert(0);
    let slug = if *count > 0 {
      format!("{base}-{count}")
    } else {
      base.clone()
    };
    *count += 1;

    slug
  }
}

/// Reduce heading text to its dash-joined word form.
fn clean(text: &str) -> String {
  let kept: String = text
    .to_lowercase()
    .chars()
    .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ' '))
    .collect();

  // Runs of spaces collapse to one hyphen; literal hyphens pass through.
  kept
    .split(' ')
    .filter(|word| !word.is_empty())
    .collect::<Vec<_>>()
    .join("-")
}
