use crate::commands::{get_encode_command, get_preview_command, get_restore_command};
use clap::Command;

pub fn cli() -> Command {
    Command::new("rit")
        .about("A file name restoring tool using rust")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .allow_external_subcommands(false)
        .subcommand(get_restore_command())
        .subcommand(get_encode_command())
        .subcommand(get_preview_command())
}
