//! # Vitrine Kiosk Shell
//!
//! A development shell that hosts one cart session end to end.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Vitrine Kiosk                                   │
//! │                                                                         │
//! │  stdin ──► command loop ──► CartStore operations                        │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    vitrine-store                                 │  │
//! │  │  session slot ──► CartStore ──► snapshot / visibility channels   │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  panel task (pure subscriber, logs every republish)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load kiosk configuration from the environment
//! 3. Start a cart session
//! 4. Spawn the cart panel collaborator
//! 5. Run the command loop until `quit` or EOF

mod config;

use tokio::io::AsyncBufReadExt;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use vitrine_core::ProductId;
use vitrine_store::{session, CartSession, CartSnapshot, CartStore};

use config::KioskConfig;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = KioskConfig::from_env();
    info!(?config, "starting vitrine kiosk shell");

    let session = CartSession::start().expect("no other cart session can be active at startup");
    let store = session.store();

    // The panel owns only receivers; it can read and react, never mutate.
    let panel = tokio::spawn(run_panel(
        store.subscribe(),
        store.subscribe_visibility(),
        config,
    ));

    run_command_loop().await;

    // Dropping the guard (and our handle) closes both channels, which in
    // turn stops the panel task.
    drop(store);
    drop(session);
    let _ = panel.await;

    info!("kiosk shell stopped");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vitrine_store=trace` - Per-crate override
/// - Default: INFO, with debug for the vitrine crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vitrine_core=debug,vitrine_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Cart Panel Collaborator
// =============================================================================

/// The cart panel, reduced to its state contract: a consumer that observes
/// visibility and cart snapshots. Presentation stays outside the shell, so
/// every re-render is just a log line.
async fn run_panel(
    mut cart_rx: watch::Receiver<CartSnapshot>,
    mut visibility_rx: watch::Receiver<bool>,
    config: KioskConfig,
) {
    loop {
        tokio::select! {
            changed = cart_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = cart_rx.borrow_and_update().clone();
                if config.echo_json {
                    let payload = serde_json::to_string(&snapshot).unwrap_or_default();
                    info!(target: "kiosk::panel", %payload, "cart re-render");
                } else {
                    info!(
                        target: "kiosk::panel",
                        lines = snapshot.items.len(),
                        cart_quantity = snapshot.cart_quantity,
                        "cart re-render"
                    );
                }
            }
            changed = visibility_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let open = *visibility_rx.borrow_and_update();
                info!(target: "kiosk::panel", open, "panel visibility changed");
            }
        }
    }
    debug!(target: "kiosk::panel", "panel observer stopped");
}

// =============================================================================
// Command Loop
// =============================================================================

/// One store operation per input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Add(ProductId),
    Sub(ProductId),
    Remove(ProductId),
    Clear,
    Open,
    Close,
    Show,
    Help,
    Quit,
}

/// Reads commands from stdin until `quit` or EOF and applies them to the
/// session's store. The store is fetched through the session slot, the same
/// way any deeply nested UI component would get it.
async fn run_command_loop() {
    let store = session::current().expect("command loop runs inside the session");

    println!("vitrine kiosk - type 'help' for commands");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(command) => apply_command(&store, command),
            Err(message) => {
                warn!(input = line, "unrecognized command");
                println!("{message}");
            }
        }
    }
}

fn apply_command(store: &CartStore, command: Command) {
    match command {
        Command::Add(id) => store.increase_cart_quantity(id),
        Command::Sub(id) => store.decrease_cart_quantity(id),
        Command::Remove(id) => store.remove_from_cart(id),
        Command::Clear => store.clear_cart(),
        Command::Open => store.open_cart(),
        Command::Close => store.close_cart(),
        Command::Show => {
            let snapshot = store.snapshot();
            println!(
                "{}",
                serde_json::to_string_pretty(&snapshot).unwrap_or_default()
            );
            println!("panel open: {}", store.is_open());
        }
        Command::Help => print_help(),
        Command::Quit => unreachable!("quit is handled by the loop"),
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let argument = words.next();

    if words.next().is_some() {
        return Err("too many arguments; try 'help'".to_string());
    }

    let parse_id = |argument: Option<&str>| -> Result<ProductId, String> {
        let raw = argument.ok_or_else(|| format!("'{verb}' needs a product id"))?;
        raw.parse::<u64>()
            .map(ProductId::new)
            .map_err(|_| format!("'{raw}' is not a product id"))
    };

    match verb.as_str() {
        "add" => Ok(Command::Add(parse_id(argument)?)),
        "sub" => Ok(Command::Sub(parse_id(argument)?)),
        "remove" | "rm" => Ok(Command::Remove(parse_id(argument)?)),
        "clear" => Ok(Command::Clear),
        "open" => Ok(Command::Open),
        "close" => Ok(Command::Close),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'; try 'help'")),
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <id>      add one unit of a product");
    println!("  sub <id>      take one unit back (removes the line at 1)");
    println!("  remove <id>   drop the whole line");
    println!("  clear         empty the cart");
    println!("  open | close  toggle the cart panel");
    println!("  show          print the current snapshot");
    println!("  quit          leave the shell");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mutations() {
        assert_eq!(
            parse_command("add 5"),
            Ok(Command::Add(ProductId::new(5)))
        );
        assert_eq!(
            parse_command("sub 5"),
            Ok(Command::Sub(ProductId::new(5)))
        );
        assert_eq!(
            parse_command("rm 12"),
            Ok(Command::Remove(ProductId::new(12)))
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_on_the_verb() {
        assert_eq!(parse_command("OPEN"), Ok(Command::Open));
        assert_eq!(parse_command("Quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_command("add").is_err());
        assert!(parse_command("add coffee").is_err());
        assert!(parse_command("add 1 2").is_err());
        assert!(parse_command("teleport 5").is_err());
    }
}
