pub mod data;
pub mod registry;
pub mod report;

use colored::Colorize;

pub fn print_banner() {
    println!();
    println!("{}", "  ┌─┐┌─┐┌─┐┌─┐┬ ┬┌─┐┌┬┐┌─┐┬ ┬".bright_cyan());
    println!("{}", "  ├─┘├─┤│ ┬├┤ │││├─┤ │ │  ├─┤".bright_cyan());
    println!("{}", "  ┴  ┴ ┴└─┘└─┘└┴┘┴ ┴ ┴ └─┘┴ ┴".bright_cyan());
    println!(
        "  {} {}",
        "pagewatch".bright_white().bold(),
        concat!("v", env!("CARGO_PKG_VERSION")).bright_black()
    );
    println!();
}
