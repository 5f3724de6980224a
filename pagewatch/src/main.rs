use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use pagewatch::config::Settings;
use pagewatch::handlers;
use pagewatch_core::print_banner;
use pagewatch_core::report::ReportFormat;

mod commands;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    let settings = Settings::resolve(
        chosen_command
            .get_one::<String>("database")
            .map(String::as_str),
    );

    let outcome = match chosen_command.subcommand() {
        Some(("init", sub)) => handlers::handle_init(&settings, sub.get_flag("force")),
        Some(("add", sub)) => handlers::handle_add(
            &settings,
            sub.get_one::<String>("URL").map(String::as_str),
        ),
        Some(("list", sub)) => handlers::handle_list(
            &settings,
            &report_format(sub),
            sub.get_one::<std::path::PathBuf>("output"),
        ),
        Some(("show", sub)) => handlers::handle_show(
            &settings,
            *sub.get_one::<i64>("id").unwrap(),
            &report_format(sub),
            sub.get_one::<std::path::PathBuf>("output"),
        ),
        Some(("check", sub)) => {
            handlers::handle_check(
                &settings,
                *sub.get_one::<i64>("id").unwrap(),
                *sub.get_one::<u64>("timeout").unwrap(),
            )
            .await
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(message) = outcome {
        eprintln!("{} {}", "✗".red().bold(), message);
        std::process::exit(1);
    }
}

fn report_format(sub: &ArgMatches) -> ReportFormat {
    sub.get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text)
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
