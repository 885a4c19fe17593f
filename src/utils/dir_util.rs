use crate::utils::{ConvertError, decode_name, encode_name};
use ignore::WalkBuilder;
use std::{env, fs, path::Path};

pub const DEFAULT_TARGET_DIR: &str = "./temp";

pub fn default_target_dir() -> String {
    env::var("RESTORE_IT_DIR").unwrap_or_else(|_| DEFAULT_TARGET_DIR.to_string())
}

pub fn list_immediate_files(root: &Path) -> Vec<String> {
    let mut files = Vec::new();

    for result in WalkBuilder::new(root)
        .max_depth(Some(1))
        .standard_filters(false)
        .build()
    {
        let dir_entry = match result {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        if dir_entry
            .file_type()
            .map(|ft| ft.is_file())
            .unwrap_or(false)
        {
            files.push(dir_entry.file_name().to_string_lossy().to_string());
        }
    }

    files
}

pub fn restore_entry(directory: &Path, encoded: &str) -> Result<String, ConvertError> {
    let original_name = decode_name(encoded)?;
    rename_entry(directory, encoded, &original_name)?;

    Ok(original_name)
}

pub fn encode_entry(directory: &Path, name: &str) -> Result<String, ConvertError> {
    let encoded = encode_name(name);
    rename_entry(directory, name, &encoded)?;

    Ok(encoded)
}

pub fn preview_entry(directory: &Path, encoded: &str) -> Result<String, ConvertError> {
    let original_name = decode_name(encoded)?;

    if directory.join(&original_name).exists() {
        return Err(ConvertError::TargetExists(original_name));
    }

    Ok(original_name)
}

fn rename_entry(directory: &Path, from: &str, to: &str) -> Result<(), ConvertError> {
    let old_path = directory.join(from);
    let new_path = directory.join(to);

    // Renaming over an existing entry would silently drop its content
    if new_path.exists() {
        return Err(ConvertError::TargetExists(to.to_string()));
    }

    fs::rename(&old_path, &new_path)?;

    Ok(())
}
