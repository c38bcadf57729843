//! # html-toc - a table-of-contents filter for HTML documents
//!
//! Scans a parsed HTML document for headings (`h1`-`h6`), gives each one a
//! unique URL-safe slug, inserts an anchor link in front of the heading
//! content, and builds a nested table-of-contents tree from the flat heading
//! sequence. The tree renders into the document as nested lists, or is
//! handed to a caller-supplied visitor for custom rendering.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_toc::{TocFilter, TocOptions};
//!
//! let filter = TocFilter::new(TocOptions::default());
//! let result = filter
//!   .process(r#"<div id="table-of-contents"></div><h1>Intro</h1>"#)
//!   .unwrap();
//!
//! // The heading is anchored in place...
//! assert!(result.html.contains(r##"<a class="anchor" href="#intro" name="intro">"##));
//! // ...and mirrored in the outline tree.
//! assert_eq!(result.outline.children[0].reference, "intro");
//! ```
//!
//! ## Render modes
//!
//! - **Static lists**: [`TocFilter::process`] injects a nested `<ul>` into
//!   the element with id `table-of-contents` (and into any other element
//!   whose id matches a node's [`TocNode::container_id`]). Documents without
//!   a container are left without a list; headings are still anchored.
//! - **Callback**: build the tree with [`TocFilter::apply`] (or
//!   [`build_outline`]) and drive your own renderer with [`TocNode::walk`],
//!   a pre-order traversal that visits the synthetic root first.
//!
//! Slug and counter state live inside one filter pass, so concurrent passes
//! over different documents never share ids.

mod error;
mod filter;
mod outline;
mod render;
mod slug;
mod types;

pub use crate::{
  error::TocError,
  filter::{TocFilter, TocOptions, TocOptionsBuilder},
  outline::build_outline,
  render::{inject_toc, render_list},
  slug::Slugifier,
  types::{Heading, TocNode, TocResult},
};
