#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
//! Tree-shape tests for the outline builder.

use html_toc::{TocFilter, TocNode, TocOptions};

fn outline_of(html: &str) -> TocNode {
  let filter = TocFilter::new(TocOptions::default());
  filter
    .process(html)
    .expect("filter pass should succeed")
    .outline
}

#[test]
fn root_is_the_level_zero_sentinel() {
  let root = outline_of("<p>no headings here</p>");
  assert_eq!(root.level, 0);
  assert!(root.is_root());
  assert_eq!(root.title, "Table of Contents");
  assert_eq!(root.reference, "table-of-contents");
  assert!(root.children.is_empty());
}

#[test]
fn skipped_level_attaches_to_nearest_shallower_ancestor() {
  // H1 Intro, H2 Background, H1 Methods, H3 Data:
  // Data has no enclosing H2, so it hangs directly off Methods.
  let root = outline_of(
    "<h1>Intro</h1><h2>Background</h2><h1>Methods</h1><h3>Data</h3>",
  );

  assert_eq!(root.children.len(), 2);

  let intro = &root.children[0];
  assert_eq!(intro.reference, "intro");
  assert_eq!(intro.children.len(), 1);
  assert_eq!(intro.children[0].reference, "background");

  let methods = &root.children[1];
  assert_eq!(methods.reference, "methods");
  assert_eq!(methods.children.len(), 1);
  assert_eq!(methods.children[0].reference, "data");
  assert_eq!(methods.children[0].level, 3);

  // Data's list would mount at Methods' container.
  assert_eq!(methods.container_id(), "toc-h2-methods");
}

#[test]
fn parent_is_nearest_preceding_shallower_heading() {
  let root = outline_of(
    "<h2>A</h2><h3>B</h3><h2>C</h2><h1>D</h1><h6>E</h6>",
  );

  let refs: Vec<&str> = root
    .children
    .iter()
    .map(|child| child.reference.as_str())
    .collect();
  assert_eq!(refs, ["a", "c", "d"]);

  assert_eq!(root.children[0].children[0].reference, "b");
  assert!(root.children[1].children.is_empty());
  assert_eq!(root.children[2].children[0].reference, "e");
}

#[test]
fn child_order_matches_document_order() {
  let root = outline_of("<h1>One</h1><h1>Two</h1><h1>Three</h1>");
  let refs: Vec<&str> = root
    .children
    .iter()
    .map(|child| child.reference.as_str())
    .collect();
  assert_eq!(refs, ["one", "two", "three"]);
}

#[test]
fn duplicate_titles_get_distinct_references() {
  let root = outline_of("<h1>Overview</h1><h2>Overview</h2>");
  assert_eq!(root.children[0].reference, "overview");
  assert_eq!(root.children[0].children[0].reference, "overview-1");
}

#[test]
fn heading_without_content_is_left_out_of_the_tree() {
  let result = TocFilter::new(TocOptions::default())
    .process("<h1></h1><h2>Real</h2>")
    .expect("filter pass should succeed");

  assert_eq!(result.outline.children.len(), 1);
  assert_eq!(result.outline.children[0].reference, "real");
  assert_eq!(result.outline.children[0].level, 2);

  // The empty heading is untouched: no anchor was inserted.
  assert!(result.html.contains("<h1></h1>"));
}

#[test]
fn skipped_heading_still_consumes_a_slug_occurrence() {
  // Both headings have empty text; the first is skipped for having no
  // content but its occurrence count sticks, so the second gets a suffix.
  let root = outline_of("<h1></h1><h1><span></span></h1>");
  assert_eq!(root.children.len(), 1);
  assert_eq!(root.children[0].reference, "-1");
}

#[test]
fn flat_heading_list_tracks_document_order() {
  let result = TocFilter::new(TocOptions::default())
    .process("<h1>Intro</h1><h3>Data</h3><h2>Notes</h2>")
    .expect("filter pass should succeed");

  let seen: Vec<(u8, &str)> = result
    .headings
    .iter()
    .map(|heading| (heading.level, heading.id.as_str()))
    .collect();
  assert_eq!(seen, [(1, "intro"), (3, "data"), (2, "notes")]);
  assert_eq!(result.headings[0].text, "Intro");
}

#[test]
fn outline_serializes_to_json() {
  let root = outline_of("<h1>Intro</h1><h2>Background</h2>");
  let value = serde_json::to_value(&root).expect("outline should serialize");

  assert_eq!(value["level"], 0);
  assert_eq!(value["children"][0]["reference"], "intro");
  assert_eq!(value["children"][0]["children"][0]["reference"], "background");

  let back: TocNode =
    serde_json::from_value(value).expect("outline should deserialize");
  assert_eq!(back, root);
}
