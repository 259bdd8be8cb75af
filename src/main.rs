use clap::Parser;
use log::{error, info};
use tailspotter::cli::Cli;
use tailspotter::config::ApplicationConfig;
use tailspotter::cooldown::CooldownTracker;
use tailspotter::dispatcher::Dispatcher;
use tailspotter::feed::{FeedSource, FileFeed, HttpFeed};
use tailspotter::logging::setup_logging;
use tailspotter::notifier::build_sinks;
use tailspotter::spotter::Spotter;
use tailspotter::thread_manager::ManagedTask;
use tailspotter::watchlist::WatchList;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.logging_level);

    let application_config = match ApplicationConfig::construct_from_path(&cli.config_file) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            error!("Config error. Exiting.");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!("Main: Application started.");

    let client = match reqwest::blocking::Client::builder()
        .timeout(application_config.feed.request_timeout())
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            error!("Error constructing HTTP client: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let watchlist = WatchList::new(&application_config.watchlist.tail_numbers);
    info!(
        "Main: Watching for {} tail number(s) with a {} minute cooldown.",
        watchlist.len(),
        application_config.watchlist.cooldown_minutes
    );

    let dispatcher = Dispatcher::new(
        CooldownTracker::new(application_config.watchlist.cooldown()),
        build_sinks(&application_config.notifications, &client),
    );
    let poll_interval = application_config.feed.poll_interval();

    match cli.feed.read_feed_file.clone() {
        Some(path) => {
            info!("Main: Reading aircraft data from {}.", path.display());
            run(
                Spotter::new(FileFeed::new(path), watchlist, dispatcher, poll_interval),
                &cli,
                poll_interval,
            )
        }
        None => {
            let url = match application_config.feed.require_url() {
                Ok(url) => url.to_string(),
                Err(e) => {
                    error!("{e}");
                    error!("Config error. Exiting.");
                    return std::process::ExitCode::FAILURE;
                }
            };
            info!("Main: Polling {url}.");
            run(
                Spotter::new(
                    HttpFeed::new(client, url),
                    watchlist,
                    dispatcher,
                    poll_interval,
                ),
                &cli,
                poll_interval,
            )
        }
    }
}

fn run<F: FeedSource + 'static>(
    mut spotter: Spotter<F>,
    cli: &Cli,
    poll_interval: std::time::Duration,
) -> std::process::ExitCode {
    if cli.once {
        return match spotter.run_cycle(chrono::Utc::now()) {
            Ok(report) => {
                info!(
                    "Main: Checked {} aircraft, {} matched, {} notified.",
                    report.aircraft_seen, report.matched, report.dispatch.notified
                );
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!("{e}");
                std::process::ExitCode::FAILURE
            }
        };
    }

    let spotter_task = match ManagedTask::spawn(spotter, poll_interval) {
        Ok(task) => task,
        Err(e) => {
            error!("Error spawning spotter thread: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Some(duration) = cli.duration {
        std::thread::sleep(std::time::Duration::from_secs(duration));
        spotter_task.stop();
    }

    spotter_task.wait_on_finish();

    info!("Main: Program finished.");
    std::process::ExitCode::SUCCESS
}
