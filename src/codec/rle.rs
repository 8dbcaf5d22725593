//! Byte oriented run-length coding.
//!
//! The stream is a flat list of `(count, value)` pairs, `count` in `1..=255`.
//! Runs longer than 255 bytes are split over several pairs.

use crate::{
    binary::byte_reader::ByteReader,
    error::{CodecError, Result},
};

pub const MAX_RUN_LENGTH: usize = u8::MAX as usize;

pub fn rle_encode(bytes: &[u8]) -> Vec<u8> {
    let mut encoded = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        let value = bytes[index];
        let run_length = bytes[index..]
            .iter()
            .take(MAX_RUN_LENGTH)
            .take_while(|&&byte| byte == value)
            .count();

        encoded.push(run_length as u8);
        encoded.push(value);
        index += run_length;
    }

    encoded
}

pub fn rle_decode(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.len() % 2 != 0 {
        return Err(CodecError::MalformedRunLength(format!(
            "stream length {} is not a whole number of pairs",
            bytes.len()
        )));
    }

    let mut reader = ByteReader::new(bytes);
    let mut decoded = Vec::new();

    while let Some(pair) = reader.read_bytes(2) {
        let (count, value) = (pair[0], pair[1]);

        if count == 0 {
            return Err(CodecError::MalformedRunLength(format!(
                "zero run length at offset {}",
                reader.offset - 2
            )));
        }

        decoded.resize(decoded.len() + count as usize, value);
    }

    Ok(decoded)
}
