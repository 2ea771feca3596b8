//! Decoding of raw field bytes into comparable values.

use crate::{
    column::{Column, ColumnType},
    error::{Result, SargError},
    eval::TEXT_COMPARE_LIMIT,
};

/// Decodes the little-endian integer stored for `column`.
///
/// Bytes are unsigned; 16 and 32 bit integers are signed. Trailing bytes past
/// the width are ignored. Columns of other types decode to `None`.
pub fn decode_le_int(column: &Column, bytes: &[u8]) -> Result<Option<i32>> {
    let value = match column.column_type() {
        ColumnType::Byte => i32::from(u8::from_le_bytes(fixed(column, bytes)?)),
        ColumnType::Int => i32::from(i16::from_le_bytes(fixed(column, bytes)?)),
        ColumnType::LongInt => i32::from_le_bytes(fixed(column, bytes)?),
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn fixed<const N: usize>(column: &Column, bytes: &[u8]) -> Result<[u8; N]> {
    bytes
        .get(..N)
        .and_then(|raw| raw.try_into().ok())
        .ok_or(SargError::FieldTooShort {
            column: column.number(),
            expected: N,
            actual: bytes.len(),
        })
}

/// Converts stored text into narrow bytes suitable for ordinal comparison.
pub trait TextDecoder: Send + Sync {
    /// Returns the narrow form of `bytes`.
    fn decode(&self, bytes: &[u8]) -> Vec<u8>;
}

/// Decoder for Jet4 text: UCS-2 little endian, optionally "compressed".
///
/// Compressed values start with `FF FE` and hold runs of single-byte
/// characters; a NUL byte toggles between single-byte and two-byte runs.
/// Code units above `0xFF` become `?`. Output is capped at
/// [`TEXT_COMPARE_LIMIT`] bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct JetTextDecoder;

impl JetTextDecoder {
    fn expand_compressed(bytes: &[u8]) -> Vec<u8> {
        let mut wide = Vec::with_capacity(bytes.len() * 2);
        let mut compressed = true;
        let mut rest = bytes;
        while let Some((&first, tail)) = rest.split_first() {
            if first == 0 {
                compressed = !compressed;
                rest = tail;
            } else if compressed {
                wide.extend_from_slice(&[first, 0]);
                rest = tail;
            } else if let [lo, hi, tail @ ..] = rest {
                wide.extend_from_slice(&[*lo, *hi]);
                rest = tail;
            } else {
                break;
            }
        }
        wide
    }
}

impl TextDecoder for JetTextDecoder {
    fn decode(&self, bytes: &[u8]) -> Vec<u8> {
        let expanded;
        let wide = match bytes {
            [0xff, 0xfe, body @ ..] => {
                expanded = Self::expand_compressed(body);
                expanded.as_slice()
            }
            _ => bytes,
        };
        wide.chunks_exact(2)
            .take(TEXT_COMPARE_LIMIT)
            .map(|unit| if unit[1] == 0 { unit[0] } else { b'?' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fixed_width_little_endian() {
        let byte = Column::new(0, "b", ColumnType::Byte);
        let int = Column::new(1, "i", ColumnType::Int);
        let long = Column::new(2, "l", ColumnType::LongInt);

        assert_eq!(decode_le_int(&byte, &[0xff]), Ok(Some(255)));
        assert_eq!(decode_le_int(&int, &[0xfe, 0xff]), Ok(Some(-2)));
        assert_eq!(decode_le_int(&int, &[0x34, 0x12, 0xaa]), Ok(Some(0x1234)));
        assert_eq!(
            decode_le_int(&long, &(-70_000i32).to_le_bytes()),
            Ok(Some(-70_000))
        );
    }

    #[test]
    fn short_fields_are_errors() {
        let long = Column::new(5, "l", ColumnType::LongInt);
        assert_eq!(
            decode_le_int(&long, &[1, 2]),
            Err(SargError::FieldTooShort {
                column: 5,
                expected: 4,
                actual: 2,
            })
        );
    }

    #[test]
    fn non_integer_columns_decode_to_none() {
        let text = Column::new(0, "t", ColumnType::Text);
        assert_eq!(decode_le_int(&text, b"abc"), Ok(None));
    }

    #[test]
    fn jet_decoder_narrows_ucs2() {
        let bytes = [b'A', 0, b'b', 0, 0x3a, 0x04, b'!', 0];
        assert_eq!(JetTextDecoder.decode(&bytes), b"Ab?!");
    }

    #[test]
    fn jet_decoder_expands_compressed_runs() {
        // "ab", switch to wide, U+0043, switch back, "d"
        let bytes = [0xff, 0xfe, b'a', b'b', 0, b'C', 0, 0, b'd'];
        assert_eq!(JetTextDecoder.decode(&bytes), b"abCd");
    }

    #[test]
    fn jet_decoder_caps_output() {
        let bytes: Vec<u8> = std::iter::repeat([b'x', 0]).take(400).flatten().collect();
        assert_eq!(JetTextDecoder.decode(&bytes).len(), TEXT_COMPARE_LIMIT);
    }
}
