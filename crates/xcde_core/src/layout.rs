use std::ops::Range;

// Party member records
pub const PARTY_MEMBERS_OFFSET: usize = 0x152368;
pub const PARTY_MEMBER_SIZE: usize = 0x138;
pub const LEVEL_OFFSET_IN_MEMBER: usize = 0x00;
pub const EXPERIENCE_OFFSET_IN_MEMBER: usize = 0x04;
pub const AP_OFFSET_IN_MEMBER: usize = 0x08;

// Art records: [level, tier] pairs
pub const ARTS_OFFSET: usize = 0x1536E8;
pub const ART_RECORD_SIZE: usize = 2;
pub const ART_LEVEL_OFFSET_IN_RECORD: usize = 0;
pub const ART_TIER_OFFSET_IN_RECORD: usize = 1;
pub const ART_COUNT: usize = 188;
pub const MAX_ART_LEVEL: i64 = 12;

/// Identifiers touched by `set_all_levels` and shown by the party listing.
pub const MAIN_CHARACTER_IDS: Range<i64> = 1..16;

pub const BACKUP_SUFFIX: &str = ".backup";
pub const MODIFIED_SUFFIX: &str = ".modified";

/// Smallest image that holds every party member slot of the main roster
/// and the full arts table.
pub const MIN_FULL_IMAGE_LEN: usize = ARTS_OFFSET + ART_COUNT * ART_RECORD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Level,
    Experience,
    Ap,
}

impl MemberField {
    pub fn offset_in_member(&self) -> usize {
        match *self {
            Self::Level => LEVEL_OFFSET_IN_MEMBER,
            Self::Experience => EXPERIENCE_OFFSET_IN_MEMBER,
            Self::Ap => AP_OFFSET_IN_MEMBER,
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::Level => "level",
            Self::Experience => "experience",
            Self::Ap => "ap",
        }
    }
}

/// Absolute offset of `field` for the record at `position`.
///
/// Returns `None` when the arithmetic leaves the addressable range, which
/// happens for negative positions or positions large enough to overflow.
pub fn member_field_offset(position: i64, field: MemberField) -> Option<usize> {
    let record = position.checked_mul(PARTY_MEMBER_SIZE as i64)?;
    let offset = record
        .checked_add(PARTY_MEMBERS_OFFSET as i64)?
        .checked_add(field.offset_in_member() as i64)?;
    usize::try_from(offset).ok()
}

/// Absolute offset of a byte within an art record. The index is not checked.
pub fn art_field_offset(index: usize, offset_in_record: usize) -> usize {
    ARTS_OFFSET + index * ART_RECORD_SIZE + offset_in_record
}

/// Image length needed to hold the first `count` party member records.
pub fn party_len_for_positions(count: usize) -> usize {
    PARTY_MEMBERS_OFFSET + count * PARTY_MEMBER_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_offsets_follow_record_stride() {
        assert_eq!(member_field_offset(0, MemberField::Level), Some(0x152368));
        assert_eq!(
            member_field_offset(1, MemberField::Experience),
            Some(0x152368 + 0x138 + 4)
        );
        assert_eq!(
            member_field_offset(7, MemberField::Ap),
            Some(0x152368 + 7 * 0x138 + 8)
        );
    }

    #[test]
    fn member_offsets_reject_unaddressable_positions() {
        assert_eq!(member_field_offset(-1, MemberField::Level), Some(0x152368 - 0x138));
        assert_eq!(member_field_offset(-100_000, MemberField::Level), None);
        assert_eq!(member_field_offset(i64::MAX, MemberField::Level), None);
    }

    #[test]
    fn main_roster_records_end_where_arts_begin() {
        assert_eq!(party_len_for_positions(16), ARTS_OFFSET);
    }

    #[test]
    fn art_offsets_interleave_level_and_tier() {
        assert_eq!(art_field_offset(0, ART_LEVEL_OFFSET_IN_RECORD), ARTS_OFFSET);
        assert_eq!(art_field_offset(0, ART_TIER_OFFSET_IN_RECORD), ARTS_OFFSET + 1);
        assert_eq!(
            art_field_offset(187, ART_TIER_OFFSET_IN_RECORD),
            MIN_FULL_IMAGE_LEN - 1
        );
    }
}
