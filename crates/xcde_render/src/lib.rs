use std::fmt::Write as _;

use serde_json::{Map as JsonMap, Value as JsonValue};
use xcde_core::character::Character;
use xcde_core::core_api::{ArtEntry, CoreError, MemberEntry, SaveImage};
use xcde_core::layout::MAIN_CHARACTER_IDS;

const SEPARATOR_WIDTH: usize = 50;

pub fn render_party_listing(image: &SaveImage) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "Character Stats:");
    let _ = writeln!(out, "{separator}");

    for member in image.members(MAIN_CHARACTER_IDS) {
        let _ = writeln!(out, "{}: {}", member.id, member.name);
        let _ = writeln!(out, "  Level: {}", member.level);
        let _ = writeln!(out, "  XP: {}", member.experience);
        let _ = writeln!(out, "  AP: {}", member.ap);
        let _ = writeln!(out, "{separator}");
    }
    out
}

pub fn render_arts_listing(image: &SaveImage) -> Result<String, CoreError> {
    let mut out = String::new();
    let _ = writeln!(out, "Arts:");
    for art in image.arts()? {
        let _ = writeln!(
            out,
            "  Art {:>3}: level {:>2} / {}",
            art.index,
            art.level,
            tier_label(&art)
        );
    }
    Ok(out)
}

pub fn render_character_ids() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Character IDs:");
    for character in Character::ALL
        .iter()
        .filter(|&&c| c != Character::None)
    {
        let _ = writeln!(out, "  {}: {}", character.id(), character.name());
    }
    out
}

/// Canonical JSON document for an image: `path`, `party`, then `arts`
/// when requested.
pub fn render_json(image: &SaveImage, include_arts: bool) -> Result<JsonValue, CoreError> {
    let mut out = JsonMap::new();
    out.insert(
        "path".to_string(),
        JsonValue::String(image.path().display().to_string()),
    );
    out.insert(
        "party".to_string(),
        JsonValue::Array(
            image
                .members(MAIN_CHARACTER_IDS)
                .iter()
                .map(member_to_json)
                .collect(),
        ),
    );
    if include_arts {
        out.insert(
            "arts".to_string(),
            JsonValue::Array(image.arts()?.iter().map(art_to_json).collect()),
        );
    }
    Ok(JsonValue::Object(out))
}

fn member_to_json(m: &MemberEntry) -> JsonValue {
    let mut obj = JsonMap::new();
    obj.insert("id".to_string(), JsonValue::from(m.id));
    obj.insert("name".to_string(), JsonValue::String(m.name.clone()));
    obj.insert("position".to_string(), JsonValue::from(m.position));
    obj.insert("level".to_string(), JsonValue::from(m.level));
    obj.insert("xp".to_string(), JsonValue::from(m.experience));
    obj.insert("ap".to_string(), JsonValue::from(m.ap));
    JsonValue::Object(obj)
}

fn art_to_json(a: &ArtEntry) -> JsonValue {
    let mut obj = JsonMap::new();
    obj.insert("index".to_string(), JsonValue::from(a.index));
    obj.insert("level".to_string(), JsonValue::from(a.level));
    obj.insert(
        "tier".to_string(),
        match a.tier {
            Some(tier) => JsonValue::String(tier.as_str().to_string()),
            None => JsonValue::Null,
        },
    );
    obj.insert("tier_raw".to_string(), JsonValue::from(a.tier_raw));
    JsonValue::Object(obj)
}

fn tier_label(art: &ArtEntry) -> String {
    match art.tier {
        Some(tier) => tier.to_string(),
        None => format!("?({})", art.tier_raw),
    }
}
