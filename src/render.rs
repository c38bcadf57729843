//! Static rendering of the outline into the document.
use html_escape::encode_double_quoted_attribute;
use kuchikikiki::NodeRef;
use log::trace;
use markup5ever::local_name;
use tendril::TendrilSink;

use crate::types::TocNode;

/// Render the nested list markup for a node's children.
///
/// Returns `None` for a childless node. Otherwise the markup is a
/// `<ul id="{container-id}">` with one `<li>` per child, each carrying the
/// child's link and, nested inside the `<li>`, the child's own subtree list.
/// Child lists are materialized bottom-up, so the returned string is the
/// complete list for this node's subtree.
///
/// Pure function of the tree: rendering the same tree twice produces
/// identical markup.
#[must_use]
pub fn render_list(node: &TocNode) -> Option<String> {
  if node.children.is_empty() {
    return None;
  }

  let mut out = String::new();
  out.push_str(&format!(
    r#"<ul id="{}">"#,
    encode_double_quoted_attribute(&node.container_id())
  ));
  for child in &node.children {
    out.push_str(&format!(
      r##"<li><a href="#{}">{}</a>"##,
      encode_double_quoted_attribute(&child.reference),
      child.title
    ));
    if let Some(nested) = render_list(child) {
      out.push_str(&nested);
    }
    out.push_str("</li>");
  }
  out.push_str("</ul>");

  Some(out)
}

/// Inject the rendered lists into the document, best-effort.
///
/// Walks the tree children-first; for every node with children whose
/// [`TocNode::container_id`] names an element in the document, the node's
/// rendered list is appended as that element's last child. Nodes without a
/// matching container are skipped silently.
pub fn inject_toc(document: &NodeRef, node: &TocNode) {
  for child in &node.children {
    inject_toc(document, child);
  }

  let Some(markup) = render_list(node) else {
    return;
  };

  let container = node.container_id();
  match element_by_id(document, &container) {
    Some(target) => append_markup(&target, &markup),
    None => trace!("no container #{container}; list not injected"),
  }
}

/// First element in document order whose id attribute equals `id`.
///
/// Generated ids may contain percent escapes, which are not valid in CSS
/// identifiers, so the lookup compares attributes directly instead of going
/// through a selector.
fn element_by_id(document: &NodeRef, id: &str) -> Option<NodeRef> {
  document.inclusive_descendants().find(|node| {
    node.as_element().is_some_and(|element| {
      element.attributes.borrow().get(local_name!("id")) == Some(id)
    })
  })
}

/// Append an HTML fragment as the last children of `target`.
fn append_markup(target: &NodeRef, markup: &str) {
  let fragment = kuchikikiki::parse_html().one(markup);
  let Ok(body) = fragment.select_first("body") else {
    return;
  };

  let nodes: Vec<NodeRef> = body.as_node().children().collect();
  for node in nodes {
    target.append(node);
  }
}
