use clap::Command;

pub fn new_scan_cmd() -> Command {
    clap::Command::new("scan").about("scan all keys of the configured redis db and print them")
}
