use crate::utils;
use clap::{Arg, Command};
use std::path::Path;

pub fn get_restore_command() -> Command {
    Command::new("restore")
        .about("Decode hex file names back to their original names")
        .arg(
            Arg::new("directory")
                .required(false)
                .help("Directory whose entries should be decoded"),
        )
}

pub fn restore(directory: &str) {
    let directory = Path::new(directory);

    if !directory.exists() {
        return println!("error : cannot find {}", directory.display());
    }

    for encoded in utils::list_immediate_files(directory) {
        match utils::restore_entry(directory, &encoded) {
            Ok(original_name) => println!("{} -> {}", encoded, original_name),
            Err(err) => println!("error : {} while converting {}", err, encoded),
        }
    }
}
