mod cmdconfig;
mod cmdproduct;
mod cmdscan;
mod rootcmd;

pub use cmdconfig::new_config_cmd;
pub use cmdproduct::new_product_cmd;
pub use cmdscan::new_scan_cmd;
pub use rootcmd::run_app;
