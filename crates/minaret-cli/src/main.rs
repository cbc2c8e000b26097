use std::path::PathBuf;

use clap::Parser;
use minaret_core::clock::SystemClock;
use minaret_core::config::{Location, RetryPolicy, ScheduleConfig};
use minaret_core::fetch::TimingsClient;
use minaret_core::notify::{self, DesktopNotifier, Notify};
use minaret_core::scheduler::Scheduler;

#[derive(Parser)]
#[command(
    name = "minaret",
    version,
    about = "Desktop notifications at the adhān and iqāma times of each Islamic prayer"
)]
struct Cli {
    /// Your city.
    #[arg(long)]
    city: String,
    /// Your country.
    #[arg(long)]
    country: String,
    /// Suppress the startup notification.
    #[arg(short = 'n', long)]
    no_init_notif: bool,
    /// Disable iqāma notifications.
    #[arg(long)]
    no_iqama: bool,
    /// Gap in minutes between the adhān and iqāma notifications.
    #[arg(short, long, default_value_t = 15)]
    gap: u32,
    /// Notification icon path. Defaults to icon.png in the working directory.
    #[arg(long)]
    icon: Option<PathBuf>,
}

/// Effective scheduler offset. The scheduler measures the iqāma wait from
/// the prayer minute, and the post-adhān cooldown already consumes the first
/// minute, so the gap arrives reduced by one.
fn iqama_offset(gap: u32) -> i64 {
    i64::from(gap.saturating_sub(1))
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let location = Location::new(&cli.city, &cli.country)?;
    let config = ScheduleConfig {
        iqama_enabled: !cli.no_iqama,
        iqama_offset_min: iqama_offset(cli.gap),
    };
    let icon = cli
        .icon
        .or_else(|| std::env::current_dir().ok().map(|d| d.join("icon.png")));
    let notifier = DesktopNotifier::new(icon);
    let clock = SystemClock;

    println!(
        "\x1b[1mSuccess! If all goes well, you'll be notified at the adhān and iqāma of each salah, insha'allah.\x1b[0m\n"
    );
    if !cli.no_init_notif {
        notifier.send(notify::APP_NAME, notify::STARTUP_BODY);
    }

    let table = TimingsClient::new().fetch_with_retry(
        &location,
        &RetryPolicy::default(),
        &clock,
        &notifier,
    )?;

    Scheduler::new(table, config, clock, notifier).run()
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
