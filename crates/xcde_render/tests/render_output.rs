use xcde_core::core_api::SaveImage;
use xcde_core::layout::{ARTS_OFFSET, MIN_FULL_IMAGE_LEN, party_len_for_positions};
use xcde_core::tier::ArtTier;
use xcde_render::{render_arts_listing, render_character_ids, render_json, render_party_listing};

fn full_image() -> SaveImage {
    SaveImage::from_bytes(vec![0u8; MIN_FULL_IMAGE_LEN], "slot01.sav")
}

#[test]
fn party_listing_shows_first_fifteen_ids() {
    let mut image = full_image();
    image.set_level(1, 42).unwrap();
    image.set_experience(1, 1_000).unwrap();
    image.set_ap(1, 250).unwrap();

    let text = render_party_listing(&image);
    assert!(text.starts_with("Character Stats:\n"));
    assert!(text.contains("1: SHULK\n  Level: 42\n  XP: 1000\n  AP: 250\n"));
    assert!(text.contains("15: NENE\n"));
    assert!(!text.contains("16: WUNWUN"));
    assert_eq!(text.matches(&"-".repeat(50)).count(), 16);
}

#[test]
fn party_listing_skips_unreadable_members() {
    let image = SaveImage::from_bytes(vec![0u8; party_len_for_positions(3)], "short.sav");
    let text = render_party_listing(&image);
    assert!(text.contains("3: FIORA\n"));
    assert!(!text.contains("4: DUNBAN"));
}

#[test]
fn arts_listing_marks_unknown_tiers() {
    let mut bytes = vec![0u8; MIN_FULL_IMAGE_LEN];
    bytes[ARTS_OFFSET + 1] = 6;
    let mut image = SaveImage::from_bytes(bytes, "slot01.sav");
    image.set_art_level(1, 7).unwrap();
    image.set_art_tier(1, ArtTier::Intermediate).unwrap();

    let text = render_arts_listing(&image).unwrap();
    assert!(text.contains("Art   0: level  0 / ?(6)"));
    assert!(text.contains("Art   1: level  7 / VII_INTERMEDIATE"));
    assert_eq!(text.lines().count(), 1 + 188);
}

#[test]
fn arts_listing_fails_on_truncated_image() {
    let image = SaveImage::from_bytes(vec![0u8; ARTS_OFFSET + 10], "short.sav");
    assert!(render_arts_listing(&image).is_err());
}

#[test]
fn json_uses_canonical_key_order() {
    let image = full_image();
    let value = render_json(&image, true).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["path", "party", "arts"]);

    let member_keys: Vec<&str> = value["party"][0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(member_keys, vec!["id", "name", "position", "level", "xp", "ap"]);
    assert_eq!(value["party"].as_array().unwrap().len(), 15);
    assert_eq!(value["arts"].as_array().unwrap().len(), 188);
    assert_eq!(value["arts"][0]["tier"], "IV_BEGINNER");
}

#[test]
fn json_without_arts_omits_key() {
    let mut image = full_image();
    image.set_level(2, 9).unwrap();
    let value = render_json(&image, false).unwrap();
    assert!(value.get("arts").is_none());
    assert_eq!(value["party"][1]["name"], "REYN");
    assert_eq!(value["party"][1]["level"], 9);
}

#[test]
fn character_ids_list_excludes_none() {
    let text = render_character_ids();
    assert!(text.contains("  1: SHULK\n"));
    assert!(text.contains("  27: TENTOO\n"));
    assert!(!text.contains("NONE"));
}
