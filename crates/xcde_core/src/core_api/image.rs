use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::bytes::{read_u8_at, read_u32_le_at, write_u8_at, write_u32_le_at};
use crate::character::{self, character_name};
use crate::layout::{
    ART_COUNT, ART_LEVEL_OFFSET_IN_RECORD, ART_TIER_OFFSET_IN_RECORD, BACKUP_SUFFIX,
    MAIN_CHARACTER_IDS, MAX_ART_LEVEL, MemberField, art_field_offset, member_field_offset,
};
use crate::tier::{ArtTier, TierInput};

use super::error::CoreError;
use super::types::{ArtEntry, LevelBatchReport, MemberEntry, MemberFailure};

/// A save file held in memory. Setters only touch the buffer; nothing
/// reaches disk until [`SaveImage::write`].
#[derive(Debug, Clone)]
pub struct SaveImage {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl SaveImage {
    /// Reads `path` and, unless `<path>.backup` already exists, writes an
    /// untouched copy of the bytes there.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)
            .map_err(|e| CoreError::io(format!("failed to read {}: {e}", path.display())))?;

        let image = Self { path, bytes };
        image.create_backup()?;
        Ok(image)
    }

    pub fn from_bytes(bytes: Vec<u8>, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        path_with_suffix(&self.path, BACKUP_SUFFIX)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn create_backup(&self) -> Result<bool, CoreError> {
        let backup = self.backup_path();
        if backup.exists() {
            debug!("backup already present at {}", backup.display());
            return Ok(false);
        }

        fs::write(&backup, &self.bytes).map_err(|e| {
            CoreError::io(format!("failed to write backup {}: {e}", backup.display()))
        })?;
        info!("backup created at {}", backup.display());
        Ok(true)
    }

    /// Writes the whole buffer to `output`, or back to the source path when
    /// `output` is `None`. Returns the path written.
    pub fn write(&self, output: Option<&Path>) -> Result<PathBuf, CoreError> {
        let out_path = output.unwrap_or(&self.path).to_path_buf();
        fs::write(&out_path, &self.bytes)
            .map_err(|e| CoreError::io(format!("failed to write {}: {e}", out_path.display())))?;
        info!("save file written to {}", out_path.display());
        Ok(out_path)
    }

    pub fn save(&self) -> Result<PathBuf, CoreError> {
        self.write(None)
    }

    // -----------------------------------------------------------------------
    // Party members
    // -----------------------------------------------------------------------

    pub fn position_of(character_id: i64) -> i64 {
        character::position_of(character_id)
    }

    pub fn level(&self, character_id: i64) -> Result<u32, CoreError> {
        self.read_member_field(character_id, MemberField::Level)
    }

    pub fn experience(&self, character_id: i64) -> Result<u32, CoreError> {
        self.read_member_field(character_id, MemberField::Experience)
    }

    pub fn ap(&self, character_id: i64) -> Result<u32, CoreError> {
        self.read_member_field(character_id, MemberField::Ap)
    }

    pub fn set_level(&mut self, character_id: i64, level: u32) -> Result<(), CoreError> {
        self.write_member_field(character_id, MemberField::Level, level)
    }

    pub fn set_experience(&mut self, character_id: i64, experience: u32) -> Result<(), CoreError> {
        self.write_member_field(character_id, MemberField::Experience, experience)
    }

    pub fn set_ap(&mut self, character_id: i64, ap: u32) -> Result<(), CoreError> {
        self.write_member_field(character_id, MemberField::Ap, ap)
    }

    /// Sets `level` on every main character id. A failing id is logged and
    /// recorded in the report, and the remaining ids are still updated.
    pub fn set_all_levels(&mut self, level: u32) -> LevelBatchReport {
        let mut report = LevelBatchReport::default();
        for id in MAIN_CHARACTER_IDS {
            match self.set_level(id, level) {
                Ok(()) => report.updated.push(id),
                Err(error) => {
                    warn!("could not set level for character {id}: {error}");
                    report.failures.push(MemberFailure { id, error });
                }
            }
        }
        report
    }

    pub fn member(&self, character_id: i64) -> Result<MemberEntry, CoreError> {
        Ok(MemberEntry {
            id: character_id,
            name: character_name(character_id),
            position: Self::position_of(character_id),
            level: self.level(character_id)?,
            experience: self.experience(character_id)?,
            ap: self.ap(character_id)?,
        })
    }

    /// Entries for every readable id in `ids`; unreadable ids are skipped.
    pub fn members(&self, ids: impl IntoIterator<Item = i64>) -> Vec<MemberEntry> {
        ids.into_iter()
            .filter_map(|id| match self.member(id) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("skipping character {id}: {e}");
                    None
                }
            })
            .collect()
    }

    fn member_offset(&self, character_id: i64, field: MemberField) -> Result<usize, CoreError> {
        let position = Self::position_of(character_id);
        let offset = member_field_offset(position, field).ok_or_else(|| {
            CoreError::out_of_bounds(format!(
                "character {character_id} maps to position {position}, which has no addressable {}",
                field.label()
            ))
        })?;
        debug!(
            "character {character_id} {} -> position {position}, offset {offset:#x}",
            field.label()
        );
        Ok(offset)
    }

    fn read_member_field(&self, character_id: i64, field: MemberField) -> Result<u32, CoreError> {
        let offset = self.member_offset(character_id, field)?;
        read_u32_le_at(&self.bytes, offset, &member_label(character_id, field))
    }

    fn write_member_field(
        &mut self,
        character_id: i64,
        field: MemberField,
        value: u32,
    ) -> Result<(), CoreError> {
        let offset = self.member_offset(character_id, field)?;
        write_u32_le_at(
            &mut self.bytes,
            offset,
            value,
            &member_label(character_id, field),
        )
    }

    // -----------------------------------------------------------------------
    // Arts
    // -----------------------------------------------------------------------

    pub fn art_level(&self, index: usize) -> Result<u8, CoreError> {
        let offset = art_offset(index, ART_LEVEL_OFFSET_IN_RECORD)?;
        read_u8_at(&self.bytes, offset, &format!("art {index} level"))
    }

    pub fn art_tier_raw(&self, index: usize) -> Result<u8, CoreError> {
        let offset = art_offset(index, ART_TIER_OFFSET_IN_RECORD)?;
        read_u8_at(&self.bytes, offset, &format!("art {index} tier"))
    }

    pub fn art_tier(&self, index: usize) -> Result<ArtTier, CoreError> {
        let raw = self.art_tier_raw(index)?;
        ArtTier::try_from(raw).map_err(|e| {
            CoreError::decode(format!("art {index} has unreadable tier: {}", e.message))
        })
    }

    pub fn set_art_level(&mut self, index: usize, level: i64) -> Result<(), CoreError> {
        let offset = art_offset(index, ART_LEVEL_OFFSET_IN_RECORD)?;
        let level = check_art_level(level)?;
        write_u8_at(&mut self.bytes, offset, level, &format!("art {index} level"))
    }

    pub fn set_art_tier(
        &mut self,
        index: usize,
        tier: impl Into<TierInput>,
    ) -> Result<(), CoreError> {
        let offset = art_offset(index, ART_TIER_OFFSET_IN_RECORD)?;
        let tier = tier.into().resolve()?;
        write_u8_at(
            &mut self.bytes,
            offset,
            tier.raw(),
            &format!("art {index} tier"),
        )
    }

    /// Sets every art to `level`. The first failing index aborts the loop;
    /// indices before it keep the new value.
    pub fn set_all_art_levels(&mut self, level: i64) -> Result<(), CoreError> {
        check_art_level(level)?;
        for index in 0..ART_COUNT {
            self.set_art_level(index, level)?;
        }
        Ok(())
    }

    /// Sets every art's tier. Aborts on the first failing index like
    /// [`SaveImage::set_all_art_levels`].
    pub fn set_all_art_tiers(&mut self, tier: impl Into<TierInput>) -> Result<(), CoreError> {
        let tier = tier.into().resolve()?;
        for index in 0..ART_COUNT {
            self.set_art_tier(index, tier)?;
        }
        Ok(())
    }

    pub fn art(&self, index: usize) -> Result<ArtEntry, CoreError> {
        let tier_raw = self.art_tier_raw(index)?;
        Ok(ArtEntry {
            index,
            level: self.art_level(index)?,
            tier_raw,
            tier: ArtTier::try_from(tier_raw).ok(),
        })
    }

    pub fn arts(&self) -> Result<Vec<ArtEntry>, CoreError> {
        (0..ART_COUNT).map(|index| self.art(index)).collect()
    }
}

/// Appends `suffix` to the full file name, e.g. `SAVE.sav` -> `SAVE.sav.backup`.
pub fn path_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}

fn art_offset(index: usize, offset_in_record: usize) -> Result<usize, CoreError> {
    if index >= ART_COUNT {
        return Err(CoreError::out_of_range(format!(
            "art index must be between 0 and {}, got {index}",
            ART_COUNT - 1
        )));
    }
    Ok(art_field_offset(index, offset_in_record))
}

fn check_art_level(level: i64) -> Result<u8, CoreError> {
    if !(0..=MAX_ART_LEVEL).contains(&level) {
        return Err(CoreError::out_of_range(format!(
            "art level must be between 0 and {MAX_ART_LEVEL}, got {level}"
        )));
    }
    Ok(level as u8)
}

fn member_label(character_id: i64, field: MemberField) -> String {
    format!("character {character_id} {}", field.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_api::CoreErrorCode;
    use crate::layout::{ARTS_OFFSET, MIN_FULL_IMAGE_LEN, PARTY_MEMBERS_OFFSET};

    fn full_image() -> SaveImage {
        SaveImage::from_bytes(vec![0u8; MIN_FULL_IMAGE_LEN], "memory.sav")
    }

    #[test]
    fn level_reads_little_endian_from_first_record() {
        let mut image = full_image();
        image.bytes[PARTY_MEMBERS_OFFSET..PARTY_MEMBERS_OFFSET + 4]
            .copy_from_slice(&[0x2C, 0x01, 0x00, 0x00]);
        assert_eq!(image.level(1).unwrap(), 300);
    }

    #[test]
    fn set_art_level_rejects_bad_level_and_index() {
        let mut image = full_image();
        assert_eq!(
            image.set_art_level(0, 13).unwrap_err().code,
            CoreErrorCode::OutOfRange
        );
        assert_eq!(
            image.set_art_level(188, 1).unwrap_err().code,
            CoreErrorCode::OutOfRange
        );
        assert_eq!(image.bytes[ARTS_OFFSET], 0);
    }

    #[test]
    fn getters_return_raw_out_of_range_levels() {
        let mut image = full_image();
        image.bytes[ARTS_OFFSET + 10] = 200;
        assert_eq!(image.art_level(5).unwrap(), 200);
    }

    #[test]
    fn suffix_is_appended_to_full_file_name() {
        assert_eq!(
            path_with_suffix(Path::new("dir/game.sav"), ".backup"),
            PathBuf::from("dir/game.sav.backup")
        );
    }
}
