//! Outline construction: heading scan, anchor insertion, level stack.
use kuchikikiki::NodeRef;
use log::{debug, trace};
use markup5ever::local_name;

use crate::{
  filter::TocOptions,
  slug::Slugifier,
  types::{Heading, TocNode},
};

/// Build the TOC tree for a parsed document.
///
/// Side effect: every heading with content gets an anchor element inserted
/// immediately before its first child. Returns the tree root and the flat
/// heading list, both in document order.
///
/// A heading with no child content is skipped entirely: no anchor, no tree
/// node, no flat entry. Its slug occurrence is still counted, so later
/// duplicates of the same text keep their suffixes stable.
pub fn build_outline(
  document: &NodeRef,
  options: &TocOptions,
) -> (TocNode, Vec<Heading>) {
  // Collect matches first; anchor insertion mutates the tree.
  let mut heading_nodes = Vec::new();
  if let Ok(matches) = document.select("h1, h2, h3, h4, h5, h6") {
    for matched in matches {
      heading_nodes.push(matched.as_node().clone());
    }
  }

  let mut slugs = Slugifier::new();
  let mut root = TocNode::root(&options.root_title, &options.root_id);
  let mut stack: Vec<TocNode> = Vec::new();
  let mut headings = Vec::new();

  for node in &heading_nodes {
    let Some(level) = node
      .as_element()
      .and_then(|element| heading_level(element.name.local.as_ref()))
    else {
      continue;
    };

    let text = node.text_contents();
    let slug = slugs.slugify(&text);

    let Some(first_child) = node.first_child() else {
      trace!("skipping <h{level}> with no content");
      continue;
    };

    let title = inner_markup(node);
    first_child.insert_before(anchor_element(&slug, options));

    headings.push(Heading {
      text,
      level,
      id: slug.clone(),
    });

    // Close every open node at this level or deeper; the new node then
    // hangs off the nearest strictly-shallower ancestor. The root sits
    // below the stack at level 0, so heading levels 1-6 never run dry.
    let entry = TocNode::heading(level, title, slug);
    while stack.last().is_some_and(|top| top.level >= entry.level) {
      if let Some(done) = stack.pop() {
        attach(&mut root, &mut stack, done);
      }
    }
    stack.push(entry);
  }

  while let Some(done) = stack.pop() {
    attach(&mut root, &mut stack, done);
  }

  debug!("outline built: {} headings", headings.len());
  (root, headings)
}

/// Attach a finished node to the deepest still-open ancestor.
fn attach(root: &mut TocNode, stack: &mut [TocNode], done: TocNode) {
  match stack.last_mut() {
    Some(parent) => parent.children.push(done),
    None => root.children.push(done),
  }
}

/// Map a heading tag name to its level.
fn heading_level(tag: &str) -> Option<u8> {
  match tag {
    "h1" => Some(1),
    "h2" => Some(2),
    "h3" => Some(3),
    "h4" => Some(4),
    "h5" => Some(5),
    "h6" => Some(6),
    _ => None,
  }
}

/// Serialized markup of a node's children.
fn inner_markup(node: &NodeRef) -> String {
  let mut buf = Vec::new();
  for child in node.children() {
    child.serialize(&mut buf).ok();
  }
  String::from_utf8(buf).unwrap_or_default()
}

/// The in-place anchor marker:
/// `<a name="{slug}" class="anchor" href="#{slug}"><span class="..."></span></a>`.
fn anchor_element(slug: &str, options: &TocOptions) -> NodeRef {
  let anchor = NodeRef::new_element(
    markup5ever::QualName::new(
      None,
      markup5ever::ns!(html),
      local_name!("a"),
    ),
    vec![
      (
        kuchikikiki::ExpandedName::new("", "name"),
        kuchikikiki::Attribute {
          prefix: None,
          value:  slug.to_string(),
        },
      ),
      (
        kuchikikiki::ExpandedName::new("", "class"),
        kuchikikiki::Attribute {
          prefix: None,
          value:  options.anchor_class.clone(),
        },
      ),
      (
        kuchikikiki::ExpandedName::new("", "href"),
        kuchikikiki::Attribute {
          prefix: None,
          value:  format!("#{slug}"),
        },
      ),
    ],
  );

  let icon = NodeRef::new_element(
    markup5ever::QualName::new(
      None,
      markup5ever::ns!(html),
      local_name!("span"),
    ),
    vec![(
      kuchikikiki::ExpandedName::new("", "class"),
      kuchikikiki::Attribute {
        prefix: None,
        value:  options.anchor_icon_class.clone(),
      },
    )],
  );
  anchor.append(icon);

  anchor
}
