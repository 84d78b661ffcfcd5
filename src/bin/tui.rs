use anyhow::Result;
use freebites::cli;
use freebites::context::StandardContext;
use freebites::storage::LocalStore;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        cli::print_help(&args[0]);
        return Ok(());
    }

    // CLI Command: freebites export
    // Prints the local submissions as a JSON array, consumable as a feed.
    if args.len() > 1 && args[1] == "export" {
        let ctx = StandardContext::new(cli::parse_root(&args));
        let events = LocalStore::load(&ctx);
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    // Normal TUI startup
    freebites::tui::run(cli::parse_root(&args)).await
}
