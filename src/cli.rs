// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.
use std::path::PathBuf;

pub fn print_help(binary_name: &str) {
    println!(
        "Freebites v{} - Browse, filter and calendar free-food events on campus (TUI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]              Start interactive TUI", binary_name);
    println!("    {} export                       Print local submissions as JSON", binary_name);
    println!("    {} --help                       Show this help message", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the app for full interactive help");
    println!();
    println!("VIEWS:");
    println!("    1:List  2:Week  3:Month    t:Today  [:Previous  ]:Next");
    println!();
    println!("FILTERS:");
    println!("    /:Search  c:Campus  g:Category  s:Sort  f:Date range  x:Clear filters");
    println!();
    println!("EVENTS:");
    println!("    a:Submit a local event  i:Import scraped events  D:Clear local submissions");
}

/// Extracts `--root <path>` / `-r <path>` from the argument list.
pub fn parse_root(args: &[String]) -> Option<PathBuf> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--root" || arg == "-r" {
            return iter.next().map(PathBuf::from);
        }
    }
    None
}
