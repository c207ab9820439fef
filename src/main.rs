use std::{env, path::PathBuf, process};

use anyhow::{Context, Result};
use essentials::{debug, error, info};
use http::Method;
use structopt::StructOpt;
use trie_router::{config, Request};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "trie-router",
    about = "Resolves a request against a table of route declarations"
)]
struct Opt {
    /// JSON file holding the route declarations
    #[structopt(short, long, parse(from_os_str))]
    routes: PathBuf,

    /// Request method
    #[structopt(short = "X", long, default_value = "GET")]
    method: String,

    /// Request path
    path: String,
}

fn run(opt: Opt) -> Result<bool> {
    let router = config::from_path(&opt.routes)?;
    info!(
        "Loaded {} routes from {}",
        router.len(),
        opt.routes.display()
    );
    let method = Method::from_bytes(opt.method.as_bytes())
        .map_err(|_| trie_router::Error::invalid_method(&opt.method))?;
    let request = Request::new(opt.path, method);
    match router.resolve(&request) {
        Ok(matched) => {
            let output = serde_json::to_string_pretty(&matched.to_json())
                .context("Failed to render match")?;
            println!("{output}");
            Ok(true)
        }
        Err(err) if err.is_not_found() => {
            debug!("{:?}", err);
            eprintln!("{err}");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    essentials::install();
    match run(Opt::from_args()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            error!("{:?}", err);
            process::exit(2);
        }
    }
}
