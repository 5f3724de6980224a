use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("pagewatch")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("pagewatch")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-d --"database" <PATH>)
                .required(false)
                .help("Path to the pagewatch database file (default: ~/.config/pagewatch/pagewatch.db)")
                .global(true),
        )
        .subcommand_required(false)
        .subcommand(
            command!("init")
                .about("Initializes the pagewatch database on your filesystem")
                .arg(
                    arg!(-f - -"force")
                        .help("Forces the overwriting of any existing database at the specified location.")
                        .required(false),
                ),
        )
        .subcommand(
            command!("add")
                .about("Registers a page URL. Path-variant URLs of one site collapse to one entry.")
                .arg(
                    arg!([URL])
                        .required(false)
                        .help("The page URL to register (absolute, http or https)"),
                ),
        )
        .subcommand(
            command!("list")
                .about("Lists every registered page with its most recent check")
                .arg(
                    arg!(-F --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("show")
                .about("Shows one registered page and its full check history")
                .arg(
                    arg!(-i --"id" <ID>)
                        .required(true)
                        .help("The id of the registered page")
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    arg!(-F --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("check")
                .about("Fetches a registered page once and records its SEO fields")
                .arg(
                    arg!(-i --"id" <ID>)
                        .required(true)
                        .help("The id of the registered page")
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                ),
        )
}
