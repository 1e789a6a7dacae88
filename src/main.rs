//! # openiti2act
//!
//! Get texts from the OpenITI repository and dump their segments into JSON Lines files
//! following ACT specifications.
//!
//! ```sh
//! openiti2act dst/ https://raw.githubusercontent.com/OpenITI/.../0597IbnJawzi.Muntazam.Shamela0023833-ara1
//! openiti2act -f -c OpenITI -c history dst/ urls.json
//! ```
use std::fs::File;
use std::time::Duration;

use openiti2act::error::Error;
use openiti2act::pipelines::{Openiti2Act, Options, Pipeline};
use openiti2act::sources::HttpSource;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Openiti2Act::from_args();
    debug!("cli args\n{:#?}", opt);

    let options = Options {
        categories: opt.categories,
        from_file: opt.from_file,
    };
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(opt.timeout))
        .build()?;
    let p = Openiti2Act::with_source(opt.dst, opt.urls, options, HttpSource::new(client));
    let report = p.run()?;

    // write eventual processing errors
    if !report.failures().is_empty() {
        error!(
            "{} documents failed, see {:?}",
            report.failures().len(),
            opt.errors
        );
        let error_file = File::create(&opt.errors)?;
        report.write_failures(error_file)?;
    }

    if !opt.quiet {
        println!("{}", serde_json::to_string_pretty(report.segments())?);
    }

    Ok(())
}
