//! Types for the html-toc public API.
use serde::{Deserialize, Serialize};

/// One heading of the document, in document order.
///
/// The flat companion to the [`TocNode`] tree, for consumers that want
/// navigation or search data without walking the outline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
  /// Heading text content (markup stripped).
  pub text:  String,
  /// Heading level (1-6).
  pub level: u8,
  /// Generated anchor id for the heading.
  pub id:    String,
}

/// A node of the table-of-contents tree.
///
/// Level 0 is the synthetic root; levels 1-6 correspond to heading tags.
/// Children are in document order, and each node's children are exactly the
/// headings between it and the next heading of equal-or-shallower level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocNode {
  /// Nesting level: 0 for the root, 1-6 for headings.
  pub level: u8,
  /// Inner markup of the heading (anchor excluded); the configured title
  /// for the root.
  pub title: String,
  /// The heading's slug; the configured root id for the root.
  pub reference: String,
  /// Child nodes, insertion order = document order.
  pub children: Vec<TocNode>,
}

impl TocNode {
  /// Create the synthetic root node.
  #[must_use]
  pub fn root(title: &str, reference: &str) -> Self {
    Self {
      level:     0,
      title:     title.to_string(),
      reference: reference.to_string(),
      children:  Vec::new(),
    }
  }

  /// Create a node bound to a real heading.
  #[must_use]
  pub const fn heading(level: u8, title: String, reference: String) -> Self {
    Self {
      level,
      title,
      reference,
      children: Vec::new(),
    }
  }

  /// Whether this is the synthetic root node.
  #[must_use]
  pub const fn is_root(&self) -> bool {
    self.level == 0
  }

  /// Id of the document element that receives this node's children list.
  ///
  /// The root uses its own reference (`table-of-contents` by default);
  /// a heading node at level `L` with reference `R` uses `toc-h{L+1}-{R}`.
  #[must_use]
  pub fn container_id(&self) -> String {
    if self.is_root() {
      self.reference.clone()
    } else {
      format!("toc-h{}-{}", self.level + 1, self.reference)
    }
  }

  /// Visit this node and its descendants in pre-order (node before
  /// children, children in document order). The root is visited too, so an
  /// empty document still yields exactly one call.
  pub fn walk<F: FnMut(&Self)>(&self, f: &mut F) {
    f(self);
    for child in &self.children {
      child.walk(f);
    }
  }
}

/// Result of one filter pass over a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocResult {
  /// Serialized document, with anchors inserted and any TOC lists injected.
  pub html: String,

  /// Root of the outline tree.
  pub outline: TocNode,

  /// Flat heading list in document order.
  pub headings: Vec<Heading>,
}
