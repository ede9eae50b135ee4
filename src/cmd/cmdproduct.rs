use clap::{Arg, Command};

pub fn new_product_cmd() -> Command {
    clap::Command::new("product")
        .about("maintain a json encoded product list")
        .subcommand(product_delete_cmd())
        .subcommand(product_seed_cmd())
}

fn product_delete_cmd() -> Command {
    clap::Command::new("delete")
        .about("delete products from the list by id")
        .args([
            Arg::new("key")
                .value_name("key")
                .index(1)
                .required(true)
                .help("redis key holding the product list"),
            Arg::new("id")
                .value_name("id")
                .index(2)
                .required(true)
                .help("product id to delete"),
        ])
}

fn product_seed_cmd() -> Command {
    clap::Command::new("seed")
        .about("push generated sample products into a list")
        .args([
            Arg::new("key")
                .value_name("key")
                .index(1)
                .required(true)
                .help("redis key to hold the product list"),
            Arg::new("count")
                .value_name("count")
                .index(2)
                .required(true)
                .help("number of products to generate"),
        ])
}
