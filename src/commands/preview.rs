use crate::utils;
use clap::{Arg, Command};
use colored::{Colorize, control::set_override};
use pager::Pager;
use std::path::Path;

pub fn get_preview_command() -> Command {
    Command::new("preview")
        .about("Show what restore would do without renaming anything")
        .arg(
            Arg::new("directory")
                .required(false)
                .help("Directory to inspect"),
        )
}

pub fn preview(directory: &str) {
    let directory = Path::new(directory);

    if !directory.exists() {
        return println!("error : cannot find {}", directory.display());
    }

    // Setup pager
    set_override(true);
    Pager::with_pager("less -R -F -X").setup();

    for encoded in utils::list_immediate_files(directory) {
        match utils::preview_entry(directory, &encoded) {
            Ok(original_name) => {
                println!("{} -> {}", encoded.green(), original_name.green())
            }
            Err(err) => {
                println!(
                    "{}",
                    format!("error : {} while converting {}", err, encoded).red()
                )
            }
        }
    }
}
