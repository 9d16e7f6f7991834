//! Terminal front-end for the Community Drop core.
//!
//! # Responsibility
//! - Drive the assistant, scanner, tracking and hub flows from a shell.
//! - Print plain rows by default and a `{ok, data}` JSON envelope with `--json`.

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use community_drop_core::{
    faq_entries, init_logging, Conversation, CoreConfig, HubFilter, HubKindFilter, HubService,
    InMemoryHubRepository, InMemoryPartnerRepository, InMemoryTrackingRepository, Message,
    PartnerService, TrackingLookup, TrackingService,
};
use serde::Serialize;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "community-drop", version, about = "Community Drop pickup assistant")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, global = true, help = "JSON config file; missing keys use defaults")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Absolute directory for rolling log files")]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Chat with the assistant; reads stdin lines when no messages are given.
    Chat {
        #[arg(long, default_value_t = false, help = "Reply without the typing delay")]
        no_delay: bool,
        messages: Vec<String>,
    },
    /// Classify scanned or typed QR text.
    Scan { text: String },
    /// Look up a tracking number.
    Track { number: String },
    /// List pickup hubs.
    Hubs {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value = "all", help = "all, warehouse, shop or home")]
        kind: String,
    },
    /// Show the partner dashboard, optionally confirming one pickup first.
    Partner {
        #[arg(long)]
        confirm: Option<String>,
        #[arg(long, help = "Set whether the hub accepts new packages (true or false)")]
        active: Option<bool>,
    },
    /// Print frequently asked questions.
    Faq,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct ScanOut {
    display: String,
    should_navigate: bool,
    navigate_to: Option<String>,
    redirect_delay_ms: u64,
}

#[derive(Serialize)]
struct DashboardOut {
    hub_active: bool,
    stats: community_drop_core::HubStats,
    packages: Vec<community_drop_core::PartnerPackage>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CoreConfig::default(),
    };
    if let Some(dir) = &cli.log_dir {
        let dir = dir
            .to_str()
            .ok_or_else(|| anyhow!("log dir is not valid UTF-8: {}", dir.display()))?;
        init_logging(config.log_level.as_str(), dir).map_err(|err| anyhow!(err))?;
    }

    match cli.command {
        Commands::Chat { no_delay, messages } => {
            let delay = if no_delay {
                Duration::ZERO
            } else {
                Duration::from_millis(config.reply_delay_ms)
            };
            let inputs = if messages.is_empty() {
                read_stdin_lines()?
            } else {
                messages
            };
            run_chat(cli.json, delay, &inputs)?;
        }
        Commands::Scan { text } => {
            if text.trim().is_empty() {
                bail!("scan text is empty");
            }
            let interpreter = config.scan_interpreter();
            let outcome = interpreter.interpret(&text);
            let out = ScanOut {
                navigate_to: outcome.navigation_target.as_ref().map(|t| t.to_uri()),
                display: outcome.display,
                should_navigate: outcome.should_navigate,
                redirect_delay_ms: config.scan_redirect_delay_ms,
            };
            print_one(cli.json, out, |o| match &o.navigate_to {
                Some(uri) => format!("scanned: {}\nnavigate: {uri}", o.display),
                None => format!("scanned: {}", o.display),
            })?;
        }
        Commands::Track { number } => {
            let service = TrackingService::new(InMemoryTrackingRepository::seeded());
            let lookup = service.lookup(&number)?;
            print_one(cli.json, lookup, |l| match l {
                TrackingLookup::Found { record } => {
                    let mut lines = vec![
                        format!("tracking: {}", record.tracking_number),
                        format!("recipient: {}", record.recipient),
                        format!("hub: {} ({})", record.hub_name, record.hub_address),
                        format!("estimated pickup: {}", record.estimated_pickup),
                    ];
                    for event in &record.status_history {
                        lines.push(format!(
                            "{}\t{}\t{}",
                            event.status.badge(),
                            event.timestamp,
                            event.location
                        ));
                    }
                    lines.join("\n")
                }
                TrackingLookup::NotFound { echoed } => {
                    format!("No package found with tracking number: {echoed}")
                }
            })?;
        }
        Commands::Hubs { search, kind } => {
            let kind_filter = HubKindFilter::parse(kind.trim())
                .ok_or_else(|| anyhow!("unknown hub kind `{kind}`"))?;
            let service = HubService::new(InMemoryHubRepository::seeded());
            let hubs = service.list_hubs(&HubFilter::new(search, kind_filter));
            print_out(cli.json, &hubs, |h| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    h.id,
                    h.name,
                    h.kind.label(),
                    h.address,
                    h.operating_hours
                )
            })?;
        }
        Commands::Partner { confirm, active } => {
            let mut service = PartnerService::new(InMemoryPartnerRepository::seeded());
            if let Some(active) = active {
                service.set_hub_active(active);
            }
            if let Some(id) = confirm {
                let package = service.confirm_pickup(id.trim())?;
                if !cli.json {
                    println!("confirmed pickup of {}", package.tracking_number);
                }
            }
            let out = DashboardOut {
                hub_active: service.is_hub_active(),
                stats: service.stats(),
                packages: service.list_packages(),
            };
            print_one(cli.json, out, |d| {
                let mut lines = vec![
                    format!("hub active: {}", d.hub_active),
                    format!("total packages: {}", d.stats.total_packages),
                    format!("pending pickups: {}", d.stats.pending_pickups),
                    format!("monthly earnings: {}", d.stats.monthly_earnings_display()),
                    format!("average rating: {}", d.stats.average_rating),
                ];
                for p in &d.packages {
                    lines.push(format!(
                        "{}\t{}\t{}\t{}",
                        p.id,
                        p.tracking_number,
                        p.recipient,
                        p.status.as_str()
                    ));
                }
                lines.join("\n")
            })?;
        }
        Commands::Faq => {
            print_out(cli.json, faq_entries(), |e| {
                format!("Q: {}\nA: {}\n", e.question, e.answer)
            })?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<CoreConfig> {
    let raw = fs::read_to_string(path)
        .map_err(|err| anyhow!("failed to read config `{}`: {err}", path.display()))?;
    Ok(CoreConfig::from_json_str(&raw)?)
}

fn run_chat(json: bool, delay: Duration, inputs: &[String]) -> anyhow::Result<()> {
    let mut conversation = Conversation::default();
    if !json {
        for message in conversation.history() {
            print_message(message);
        }
    }

    for text in inputs {
        if text.trim().is_empty() {
            continue;
        }
        let user = conversation.submit(text)?;
        if !json {
            print_message(&user);
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        if let Some(reply) = conversation.resolve_pending() {
            if !json {
                print_message(&reply);
            }
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: conversation.history()
            })?
        );
    }
    Ok(())
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line?);
    }
    Ok(lines)
}

fn print_message(message: &Message) {
    let who = if message.is_from_user() { "you" } else { "assistant" };
    println!("{who}> {}", message.content);
    if let Some(suggestions) = &message.suggestions {
        println!("  [{}]", suggestions.join("] ["));
    }
}

fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}
