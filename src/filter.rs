//! The filter entry point and its configuration.
use kuchikikiki::NodeRef;
use log::debug;
use tendril::TendrilSink;

use crate::{
  error::TocError,
  outline::build_outline,
  render::inject_toc,
  types::{Heading, TocNode, TocResult},
};

/// Options for the TOC filter.
#[derive(Debug, Clone)]
pub struct TocOptions {
  /// Class on the anchor link inserted before each heading's content.
  pub anchor_class: String,

  /// Class on the icon span inside the anchor link.
  pub anchor_icon_class: String,

  /// Title carried by the synthetic root node.
  pub root_title: String,

  /// Reference of the synthetic root, doubling as the id of the document
  /// element that receives the top-level list.
  pub root_id: String,
}

impl Default for TocOptions {
  fn default() -> Self {
    Self {
      anchor_class:      "anchor".to_string(),
      anchor_icon_class: "mini-icon mini-icon-link".to_string(),
      root_title:        "Table of Contents".to_string(),
      root_id:           "table-of-contents".to_string(),
    }
  }
}

/// Builder for [`TocOptions`] with method chaining.
#[derive(Debug, Clone, Default)]
pub struct TocOptionsBuilder {
  options: TocOptions,
}

impl TocOptionsBuilder {
  /// Create a builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the class of the inserted anchor link.
  #[must_use]
  pub fn anchor_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.anchor_class = class.into();
    self
  }

  /// Set the class of the icon span inside the anchor link.
  #[must_use]
  pub fn anchor_icon_class<S: Into<String>>(mut self, class: S) -> Self {
    self.options.anchor_icon_class = class.into();
    self
  }

  /// Set the title of the synthetic root node.
  #[must_use]
  pub fn root_title<S: Into<String>>(mut self, title: S) -> Self {
    self.options.root_title = title.into();
    self
  }

  /// Set the root reference / top-level container id.
  #[must_use]
  pub fn root_id<S: Into<String>>(mut self, id: S) -> Self {
    self.options.root_id = id.into();
    self
  }

  /// Build the final [`TocOptions`].
  #[must_use]
  pub fn build(self) -> TocOptions {
    self.options
  }
}

/// Table-of-contents filter.
///
/// One instance can process any number of documents; slug state lives
/// inside each pass, never in the filter.
#[derive(Debug, Clone, Default)]
pub struct TocFilter {
  options: TocOptions,
}

impl TocFilter {
  /// Create a filter with the given options.
  #[must_use]
  pub fn new(options: TocOptions) -> Self {
    Self { options }
  }

  /// Access filter options.
  #[must_use]
  pub const fn options(&self) -> &TocOptions {
    &self.options
  }

  /// Run a full pass over an HTML string.
  ///
  /// Parses the document, anchors every heading with content, builds the
  /// outline tree, injects the static TOC lists into any matching container
  /// elements, and serializes the document back out.
  ///
  /// # Errors
  ///
  /// Returns [`TocError::Serialize`] if writing the processed document back
  /// to a string fails.
  pub fn process(&self, html: &str) -> Result<TocResult, TocError> {
    let document = kuchikikiki::parse_html().one(html);

    let (outline, headings) = build_outline(&document, &self.options);
    inject_toc(&document, &outline);

    let mut buf = Vec::new();
    document.serialize(&mut buf)?;

    debug!("processed document: {} headings anchored", headings.len());
    Ok(TocResult {
      html: String::from_utf8(buf).unwrap_or_default(),
      outline,
      headings,
    })
  }

  /// Anchor headings and build the outline on an already-parsed document.
  ///
  /// For callers embedding the filter in their own DOM pipeline: rendering
  /// stays in their hands, via [`crate::inject_toc`]/[`crate::render_list`]
  /// or a [`TocNode::walk`] visitor.
  pub fn apply(&self, document: &NodeRef) -> (TocNode, Vec<Heading>) {
    build_outline(document, &self.options)
  }
}
