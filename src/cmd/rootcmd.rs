use crate::cmd::{new_config_cmd, new_product_cmd, new_scan_cmd};
use crate::configure::{self, generate_default_config, get_config, Config};
use crate::configure::{get_config_file_path, set_config_file_path, set_config_from_file};
use crate::keyscan::KeyScan;
use crate::product::{DeleteOutcome, ProductDelete, ProductSeeder};
use clap::{Arg, ArgMatches, Command};
use lazy_static::lazy_static;
use serde_json::Value;
use std::process::exit;

lazy_static! {
    static ref CLIAPP: Command = Command::new("rediskit-rs")
        .version("0.1.0")
        .author("Shiwen Jia. <jiashiwen@gmail.com>")
        .about("Key scan and product list maintenance for redis instances")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file")
        )
        .subcommand(new_scan_cmd())
        .subcommand(new_product_cmd())
        .subcommand(new_config_cmd());
}

pub fn run_app() {
    let matches = CLIAPP.clone().get_matches();
    cmd_match(&matches);
}

fn cmd_match(matches: &ArgMatches) {
    if let Some(c) = matches.get_one::<String>("config") {
        set_config_file_path(c.to_string());
        set_config_from_file(&get_config_file_path());
    } else {
        set_config_from_file("");
    }

    if matches.subcommand_matches("scan").is_some() {
        let config = get_config().expect("get current configure error!");
        let scan = KeyScan {
            instance: config.instance,
            db: config.db,
        };
        match scan.exec() {
            Ok(keys) => {
                println!("{:?}", keys);
            }
            Err(e) => {
                log::error!("{}", e);
                exit(1);
            }
        }
    }

    if let Some(ref product) = matches.subcommand_matches("product") {
        let config = get_config().expect("get current configure error!");

        if let Some(delete) = product.subcommand_matches("delete") {
            let key = delete.get_one::<String>("key").expect("key is required");
            let id = delete.get_one::<String>("id").expect("id is required");
            let task = ProductDelete {
                instance: config.instance.clone(),
                db: config.db,
                key: key.to_string(),
                target_id: parse_target_id(id),
            };
            match task.exec() {
                Ok(DeleteOutcome::NotFound) => {
                    println!("Product with id {} not found.", id);
                }
                Ok(DeleteOutcome::Deleted { .. }) => {
                    println!("Product with id {} has been deleted.", id);
                }
                Err(e) => {
                    log::error!("{}", e);
                    exit(1);
                }
            }
        }

        if let Some(seed) = product.subcommand_matches("seed") {
            let key = seed.get_one::<String>("key").expect("key is required");
            let count = seed
                .get_one::<String>("count")
                .expect("count is required")
                .parse::<usize>()
                .expect("count must be a non-negative integer");
            let task = ProductSeeder {
                instance: config.instance.clone(),
                db: config.db,
                key: key.to_string(),
                count,
            };
            match task.exec() {
                Ok(len) => {
                    println!("{} products pushed, list length is {}", count, len);
                }
                Err(e) => {
                    log::error!("{}", e);
                    exit(1);
                }
            }
        }
    }

    if let Some(config) = matches.subcommand_matches("config") {
        if let Some(show) = config.subcommand_matches("show") {
            match show.subcommand_name() {
                Some("current") => {
                    let current = configure::get_config().expect("get current configure error!");
                    let yml =
                        serde_yaml::to_string(&current).expect("pars configure to yaml error!");
                    println!("{}", yml);
                }
                Some("default") => {
                    let config = Config::default();
                    let yml = serde_yaml::to_string(&config);
                    match yml {
                        Ok(y) => {
                            println!("{}", y);
                        }
                        Err(e) => {
                            log::error!("{}", e);
                        }
                    }
                }
                _ => {}
            }
        }
        if let Some(gen_config) = config.subcommand_matches("gendefault") {
            let mut file = String::from("");
            if let Some(path) = gen_config.get_one::<String>("filepath") {
                file.push_str(path);
            } else {
                file.push_str("config_default.yml")
            }
            if let Err(e) = generate_default_config(file.as_str()) {
                log::error!("{}", e);
                return;
            };
            println!("{} created!", file);
        }
    }
}

// id 参数按 json 解析，解析失败时按普通字符串处理
fn parse_target_id(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(v) => v,
        Err(_) => Value::String(raw.to_string()),
    }
}
