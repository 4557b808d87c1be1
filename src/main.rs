//! tld-referral - maintain the extension to WHOIS referral database
//!
//! `update` rebuilds the database from the IANA root zone, `lookup` and
//! `list` read it.

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tld_referral::{ReferralStore, ReferralUpdater, UpdateConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Initialize the library
    if let Err(e) = tld_referral::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("--help");

    let result = match command {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(true)
        }
        "--version" | "-V" => {
            println!("tld-referral {}", tld_referral::VERSION);
            Ok(true)
        }
        "update" => run_update().await.map(|_| true),
        "lookup" => match args.get(1) {
            Some(target) => run_lookup(target),
            None => Err(tld_referral::ReferralError::cli("lookup needs an extension or domain").into()),
        },
        "list" => run_list().map(|_| true),
        other => Err(tld_referral::ReferralError::cli(format!("unknown command: {}", other)).into()),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            match e.downcast_ref::<tld_referral::ReferralError>() {
                Some(err) => eprintln!("{}", err.user_message()),
                None => eprintln!("❌ Error: {:#}", e),
            }
            process::exit(1);
        }
    }
}

/// Run one update pass with a progress spinner
async fn run_update() -> anyhow::Result<()> {
    let config = UpdateConfig::from_env()?;
    let store = Arc::new(
        ReferralStore::load(&config.destination)
            .with_context(|| format!("loading {}", config.destination.display()))?,
    );
    let updater = ReferralUpdater::new(&config, store.clone());

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        println!("Update of iana-domains-db");
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{elapsed_precise}] {pos} extensions  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    };

    let report = updater
        .run(|update| {
            progress.set_position(update.processed);
            progress.set_message(format!("{} → {}", update.extension, update.resolution));
        })
        .await;
    progress.finish_and_clear();
    let report = report?;

    if !config.quiet {
        println!("✅ Done");
        println!("   📊 Extensions: {}", report.extensions_seen);
        println!("   🔗 Referred by IANA: {}", report.dynamic);
        println!("   📝 From manual table: {}", report.manual);
        println!("   ❔ Unresolved: {}", report.unresolved);
        println!("   💾 Written: {} new, {} changed", report.inserted, report.updated);
        println!("   ⏱️  Total time: {:.2}s", report.duration().num_milliseconds() as f64 / 1000.0);
        if report.extensions_seen == 0 {
            println!("⚠️  No extensions were found on {}", config.iana_url);
        }
    }

    Ok(())
}

/// Print the referral server of an extension or domain; false when unknown
fn run_lookup(target: &str) -> anyhow::Result<bool> {
    let config = UpdateConfig::from_env()?;
    let store = ReferralStore::load(&config.destination)
        .with_context(|| format!("loading {}", config.destination.display()))?;

    match store.referral_for_domain(target) {
        Some(server) => {
            println!("{}", server);
            Ok(true)
        }
        None => {
            eprintln!("no referral known for {}", target);
            Ok(false)
        }
    }
}

/// Print every stored referral
fn run_list() -> anyhow::Result<()> {
    let config = UpdateConfig::from_env()?;
    let store = ReferralStore::load(&config.destination)
        .with_context(|| format!("loading {}", config.destination.display()))?;

    for (extension, server) in store.snapshot() {
        println!("{}\t{}", extension, server);
    }
    Ok(())
}

/// Print help information
fn print_help() {
    println!("tld-referral - WHOIS referral servers for every domain extension");
    println!();
    println!("USAGE:");
    println!("    tld-referral <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    update              Rebuild the database from the IANA root zone");
    println!("    lookup <EXT|DOMAIN> Print the WHOIS server for an extension or domain");
    println!("    list                Print every stored extension and server");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    IANA_DB_PATH        Database file (default: iana-domains-db.json)");
    println!("    IANA_URL            Root zone page (default: https://www.iana.org/domains/root/db)");
    println!("    IANA_WHOIS_SERVER   Referral WHOIS server (default: whois.iana.org)");
    println!("    IANA_WHOIS_PORT     Referral WHOIS port (default: 43)");
    println!("    IANA_TIMEOUT_SECS   Network timeout in seconds (default: 10)");
    println!("    IANA_CONCURRENCY    Parallel WHOIS lookups (default: 1)");
    println!("    IANA_QUIET          Suppress progress output (default: false)");
    println!("    RUST_LOG            Log filter (default: warn)");
}
