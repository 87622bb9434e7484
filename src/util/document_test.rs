use super::*;

#[test]
fn root_class_is_added_and_removed() {
    let doc = MemoryDocument::default();
    assert!(!doc.has_root_class("dark"));

    assert_eq!(doc.set_root_class("dark", true), Ok(()));
    assert!(doc.has_root_class("dark"));

    assert_eq!(doc.set_root_class("dark", false), Ok(()));
    assert!(!doc.has_root_class("dark"));
}

#[test]
fn removing_absent_root_class_is_harmless() {
    let doc = MemoryDocument::default();
    assert_eq!(doc.set_root_class("dark", false), Ok(()));
    assert!(!doc.has_root_class("dark"));
}

#[test]
fn upsert_style_reuses_existing_node() {
    let doc = MemoryDocument::default();
    assert_eq!(doc.upsert_style("s", "a {}"), Ok(()));
    assert_eq!(doc.upsert_style("s", "b {}"), Ok(()));

    assert_eq!(doc.styles_created(), 1);
    assert_eq!(doc.style("s").as_deref(), Some("b {}"));
}

#[test]
fn remove_style_deletes_node_and_tolerates_absence() {
    let doc = MemoryDocument::default();
    assert_eq!(doc.upsert_style("s", "a {}"), Ok(()));
    assert_eq!(doc.remove_style("s"), Ok(()));
    assert_eq!(doc.style("s"), None);
    assert_eq!(doc.remove_style("s"), Ok(()));
}

#[test]
fn recreating_after_removal_counts_a_new_node() {
    let doc = MemoryDocument::default();
    assert_eq!(doc.upsert_style("s", "a {}"), Ok(()));
    assert_eq!(doc.remove_style("s"), Ok(()));
    assert_eq!(doc.upsert_style("s", "a {}"), Ok(()));
    assert_eq!(doc.styles_created(), 2);
}
