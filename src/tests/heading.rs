use super::{HeadingId, HeadingLevels, MAX_LEVELS};
use crate::error::Error;

#[test]
fn test_identifier_rendering() {
    let top = HeadingId::root(2);
    let nested = top.child(1).child(3);

    assert_eq!(top.to_string(), "2");
    assert_eq!(nested.to_string(), "2.1.3");
    assert_eq!(nested.ranks(), &[2, 1, 3]);
    assert_eq!(nested.depth(), 3);
    assert_eq!(nested.anchor_key(), "toc_2.1.3");
}

#[test]
fn test_identifier_under_prefix() {
    assert_eq!(HeadingId::under(None, 4), HeadingId::root(4));

    let parent = HeadingId::root(1).child(2);
    assert_eq!(HeadingId::under(Some(&parent), 5).to_string(), "1.2.5");
    // The parent is untouched by deriving a child.
    assert_eq!(parent.to_string(), "1.2");
}

#[test]
fn test_identifier_serialises_as_dotted_string() {
    let id = HeadingId::root(3).child(7);
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"3.7\"");
}

#[test]
fn test_levels_are_normalised() {
    let levels = HeadingLevels::new(&[" H1", "h2 "]).unwrap();

    assert_eq!(levels.len(), 2);
    assert_eq!(levels.marker(levels.root()), "h1");
    assert_eq!(levels.level_of("H2").map(|l| l.index()), Some(1));
    assert_eq!(levels.level_of("h3"), None);
}

#[test]
fn test_level_navigation_is_bounded() {
    let levels = HeadingLevels::new(&["h1", "h2", "h3"]).unwrap();
    let root = levels.root();

    assert_eq!(levels.stop_marker(root), None);

    let second = levels.next(root).unwrap();
    assert_eq!(levels.marker(second), "h2");
    assert_eq!(levels.stop_marker(second), Some("h1"));

    let third = levels.next(second).unwrap();
    assert_eq!(levels.next(third), None);
}

#[test]
fn test_invalid_levels_are_rejected() {
    let none: [&str; 0] = [];
    assert!(matches!(
        HeadingLevels::new(&none),
        Err(Error::InvalidHeadingLevels(_))
    ));

    let too_many: Vec<String> = (1..=MAX_LEVELS + 1).map(|n| format!("h{n}")).collect();
    assert!(matches!(
        HeadingLevels::new(too_many.as_slice()),
        Err(Error::InvalidHeadingLevels(_))
    ));

    assert!(matches!(
        HeadingLevels::new(&["h1", "H1"]),
        Err(Error::InvalidHeadingLevels(_))
    ));
    assert!(matches!(
        HeadingLevels::new(&["h1", "  "]),
        Err(Error::InvalidHeadingLevels(_))
    ));
}
