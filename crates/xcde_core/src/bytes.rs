use crate::core_api::CoreError;

pub const U8_WIDTH: usize = 1;
pub const U32_WIDTH: usize = 4;

pub fn read_u8_at(bytes: &[u8], offset: usize, field: &str) -> Result<u8, CoreError> {
    check_span(bytes.len(), offset, U8_WIDTH, field)?;
    Ok(bytes[offset])
}

pub fn write_u8_at(bytes: &mut [u8], offset: usize, value: u8, field: &str) -> Result<(), CoreError> {
    check_span(bytes.len(), offset, U8_WIDTH, field)?;
    bytes[offset] = value;
    Ok(())
}

pub fn read_u32_le_at(bytes: &[u8], offset: usize, field: &str) -> Result<u32, CoreError> {
    let end = check_span(bytes.len(), offset, U32_WIDTH, field)?;
    let mut buf = [0u8; U32_WIDTH];
    buf.copy_from_slice(&bytes[offset..end]);
    Ok(u32::from_le_bytes(buf))
}

pub fn write_u32_le_at(
    bytes: &mut [u8],
    offset: usize,
    value: u32,
    field: &str,
) -> Result<(), CoreError> {
    let end = check_span(bytes.len(), offset, U32_WIDTH, field)?;
    bytes[offset..end].copy_from_slice(&value.to_le_bytes());
    Ok(())
}

fn check_span(len: usize, offset: usize, width: usize, field: &str) -> Result<usize, CoreError> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(end),
        _ => Err(CoreError::out_of_bounds(format!(
            "{field} at offset {offset:#x} needs {width} byte(s), image length is {len:#x}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_api::CoreErrorCode;

    #[test]
    fn reads_little_endian_u32() {
        let bytes = [0x00, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(read_u32_le_at(&bytes, 1, "test").unwrap(), 0x1234_5678);
    }

    #[test]
    fn writes_little_endian_u32_in_place() {
        let mut bytes = [0xAAu8; 6];
        write_u32_le_at(&mut bytes, 1, 0x0102_0304, "test").unwrap();
        assert_eq!(bytes, [0xAA, 0x04, 0x03, 0x02, 0x01, 0xAA]);
    }

    #[test]
    fn partial_u32_at_end_is_out_of_bounds() {
        let mut bytes = [0u8; 6];
        let err = read_u32_le_at(&bytes, 3, "xp").unwrap_err();
        assert_eq!(err.code, CoreErrorCode::OutOfBounds);
        assert!(err.message.contains("xp"));

        let err = write_u32_le_at(&mut bytes, 3, 1, "xp").unwrap_err();
        assert_eq!(err.code, CoreErrorCode::OutOfBounds);
        assert_eq!(bytes, [0u8; 6]);
    }

    #[test]
    fn u8_access_checks_last_byte() {
        let mut bytes = [0u8; 2];
        write_u8_at(&mut bytes, 1, 9, "tier").unwrap();
        assert_eq!(read_u8_at(&bytes, 1, "tier").unwrap(), 9);
        assert_eq!(
            read_u8_at(&bytes, 2, "tier").unwrap_err().code,
            CoreErrorCode::OutOfBounds
        );
    }

    #[test]
    fn huge_offset_does_not_overflow() {
        let bytes = [0u8; 4];
        assert_eq!(
            read_u32_le_at(&bytes, usize::MAX - 1, "level").unwrap_err().code,
            CoreErrorCode::OutOfBounds
        );
    }
}
