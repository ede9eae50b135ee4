use logger::init_log;

mod cmd;
mod configure;
mod keyscan;
mod logger;
mod product;
mod util;

fn main() {
    init_log();
    cmd::run_app();
}
