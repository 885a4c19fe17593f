use std::{io, string::FromUtf8Error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid hex in file name ({0})")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("decoded bytes are not valid utf-8 ({0})")]
    InvalidUtf8(#[from] FromUtf8Error),
    #[error("decoded name '{0}' is not a plain file name")]
    UnsafeName(String),
    #[error("target '{0}' already exists")]
    TargetExists(String),
    #[error("rename failed ({0})")]
    Rename(#[from] io::Error),
}

pub fn decode_name(encoded: &str) -> Result<String, ConvertError> {
    let decoded_bytes = hex::decode(encoded)?;
    let original_name = String::from_utf8(decoded_bytes)?;

    // Decoded names must stay inside the target directory
    if !is_plain_file_name(&original_name) {
        return Err(ConvertError::UnsafeName(original_name));
    }

    Ok(original_name)
}

pub fn encode_name(name: &str) -> String {
    hex::encode(name.as_bytes())
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
