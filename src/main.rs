use restore_it::cli::cli;
use restore_it::commands::{encode, preview, restore};
use restore_it::utils::default_target_dir;

fn main() {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("restore", sub_matches)) => {
            let directory: String = sub_matches
                .get_one::<String>("directory")
                .cloned()
                .unwrap_or_else(default_target_dir);

            restore(&directory);
        }
        Some(("encode", sub_matches)) => {
            let directory: String = sub_matches
                .get_one::<String>("directory")
                .cloned()
                .unwrap_or_else(default_target_dir);

            encode(&directory);
        }
        Some(("preview", sub_matches)) => {
            let directory: String = sub_matches
                .get_one::<String>("directory")
                .cloned()
                .unwrap_or_else(default_target_dir);

            preview(&directory);
        }
        _ => unreachable!("Unknown subcommand!"),
    }
}
