//! Tests for the Tag enum

use na_marshal::Tag;

const ALL: [Tag; 7] = [
    Tag::Nil,
    Tag::True,
    Tag::False,
    Tag::String,
    Tag::Unicode,
    Tag::Int,
    Tag::Dict,
];

#[test]
fn test_tag_values() {
    assert_eq!(Tag::Nil as u8, 0x30);
    assert_eq!(Tag::True as u8, 0x54);
    assert_eq!(Tag::False as u8, 0x46);
    assert_eq!(Tag::String as u8, 0x73);
    assert_eq!(Tag::Unicode as u8, 0x75);
    assert_eq!(Tag::Int as u8, 0x69);
    assert_eq!(Tag::Dict as u8, 0x7B);
}

#[test]
fn test_tag_from_u8_round_trips() {
    for tag in ALL {
        assert_eq!(Tag::from_u8(tag as u8), Some(tag));
        assert_eq!(u8::from(tag), tag as u8);
    }
}

#[test]
fn test_tag_from_u8_rejects_everything_else() {
    let supported = (0..=u8::MAX)
        .filter(|b| Tag::from_u8(*b).is_some())
        .count();
    assert_eq!(supported, ALL.len());
}

#[test]
fn test_tag_is_text() {
    assert!(Tag::String.is_text());
    assert!(Tag::Unicode.is_text());

    assert!(!Tag::Nil.is_text());
    assert!(!Tag::True.is_text());
    assert!(!Tag::False.is_text());
    assert!(!Tag::Int.is_text());
    assert!(!Tag::Dict.is_text());
}

#[test]
fn test_tag_is_composite() {
    for tag in ALL {
        assert_eq!(tag.is_composite(), tag == Tag::Dict);
    }
}

#[test]
fn test_tag_payload_size() {
    assert_eq!(Tag::Nil.payload_size(), Some(0));
    assert_eq!(Tag::True.payload_size(), Some(0));
    assert_eq!(Tag::False.payload_size(), Some(0));
    assert_eq!(Tag::Int.payload_size(), Some(4));
    assert_eq!(Tag::String.payload_size(), None);
    assert_eq!(Tag::Unicode.payload_size(), None);
    assert_eq!(Tag::Dict.payload_size(), None);
}
