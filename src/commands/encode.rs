use crate::utils;
use clap::{Arg, Command};
use std::path::Path;

pub fn get_encode_command() -> Command {
    Command::new("encode")
        .about("Encode file names to hex the way uploads are stored")
        .arg(
            Arg::new("directory")
                .required(false)
                .help("Directory whose entries should be encoded"),
        )
}

pub fn encode(directory: &str) {
    let directory = Path::new(directory);

    if !directory.exists() {
        return println!("error : cannot find {}", directory.display());
    }

    for name in utils::list_immediate_files(directory) {
        match utils::encode_entry(directory, &name) {
            Ok(encoded) => println!("{} -> {}", name, encoded),
            Err(err) => println!("error : {} while converting {}", err, name),
        }
    }
}
