//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "openiti2act",
    about = "Segment OpenITI texts into ACT JSON Lines files."
)]
/// Pipeline command and parameters.
///
/// ```sh
/// openiti2act 0.1.0
/// Segment OpenITI texts into ACT JSON Lines files.
///
/// USAGE:
///     openiti2act [FLAGS] [OPTIONS] <dst> <urls>...
///
/// FLAGS:
///     -f, --from-file    urls are files to scan for quoted https urls
///     -h, --help         Prints help information
///     -q, --quiet        do not print the segments of the last document
///     -V, --version      Prints version information
///
/// OPTIONS:
///     -c, --categories <categories>...    category tag of every segment [default: OpenITI]
///     -e, --errors <errors>               failure report destination [default: errors.txt]
///     -t, --timeout <timeout>             fetch timeout, in seconds [default: 60]
///
/// ARGS:
///     <dst>        destination folder
///     <urls>...    OpenITI text urls
/// ```
pub struct Openiti2Act {
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(help = "OpenITI text urls", required = true)]
    pub urls: Vec<String>,
    #[structopt(
        short = "f",
        long = "from-file",
        help = "urls are files to scan for quoted https urls"
    )]
    pub from_file: bool,
    #[structopt(
        short = "c",
        long = "categories",
        help = "category tag of every segment",
        default_value = "OpenITI",
        number_of_values = 1
    )]
    pub categories: Vec<String>,
    #[structopt(
        parse(from_os_str),
        short = "e",
        long = "errors",
        help = "failure report destination",
        default_value = "errors.txt"
    )]
    pub errors: PathBuf,
    #[structopt(
        short = "t",
        long = "timeout",
        help = "fetch timeout, in seconds",
        default_value = "60"
    )]
    pub timeout: u64,
    #[structopt(
        short = "q",
        long = "quiet",
        help = "do not print the segments of the last document"
    )]
    pub quiet: bool,
}
