use super::*;

#[test]
fn watch_path_nests_id_under_watch() {
    assert_eq!(watch_path("v123"), "/watch/v123");
}

#[test]
fn watch_path_keeps_id_verbatim() {
    assert_eq!(watch_path("a-b_c"), "/watch/a-b_c");
}
