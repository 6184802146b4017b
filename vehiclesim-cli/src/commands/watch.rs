//! Watch command - terminal dashboard for a running position service.

use std::io::Write;
use std::time::Duration;

use vehiclesim::dashboard::{render_report, DashboardPoller, HttpVehicleClient, PollEvent};
use vehiclesim::simulation::PositionReport;

use crate::error::CliError;
use crate::runner::CliRunner;

/// ANSI sequence clearing the screen and homing the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Arguments for the watch command.
#[derive(Default)]
pub struct WatchArgs {
    pub url: Option<String>,
    pub interval_secs: Option<u64>,
    pub once: bool,
    pub no_color: bool,
}

/// Run the watch command.
pub fn run(args: WatchArgs) -> Result<(), CliError> {
    let runner = CliRunner::for_client()?;
    runner.log_startup("watch");
    let config = runner.config();

    let url = args.url.unwrap_or_else(|| config.dashboard.url.clone());
    let interval = match args.interval_secs {
        Some(0) => {
            return Err(CliError::Config(
                "--interval-secs must be greater than zero".to_string(),
            ))
        }
        Some(secs) => Duration::from_secs(secs),
        None => config.dashboard.poll_interval(),
    };

    let is_tty = atty::is(atty::Stream::Stdout);
    let color = is_tty && !args.no_color;

    let client = HttpVehicleClient::new(&url).map_err(|error| CliError::Fetch {
        url: url.clone(),
        error,
    })?;
    let poller = DashboardPoller::new(client).with_interval(interval);
    let runtime = runner.runtime()?;

    if args.once {
        return match runtime.block_on(poller.poll_once()) {
            PollEvent::Report(report) => {
                print!("{}", render_report(&report, color));
                Ok(())
            }
            PollEvent::FetchFailed(error) => Err(CliError::Fetch { url, error }),
        };
    }

    let shutdown = runner.shutdown_on_ctrlc()?;
    let mut screen = DashboardScreen::new(url, color, is_tty);
    let polls = runtime.block_on(poller.run(shutdown, |event| screen.update(event)));

    println!();
    println!("Dashboard stopped after {} polls.", polls);
    Ok(())
}

/// Terminal frame state: the last good report plus any error banner.
struct DashboardScreen {
    url: String,
    color: bool,
    redraw_in_place: bool,
    last_report: Option<PositionReport>,
}

impl DashboardScreen {
    fn new(url: String, color: bool, redraw_in_place: bool) -> Self {
        Self {
            url,
            color,
            redraw_in_place,
            last_report: None,
        }
    }

    fn update(&mut self, event: PollEvent) {
        let banner = match event {
            PollEvent::Report(report) => {
                self.last_report = Some(*report);
                None
            }
            PollEvent::FetchFailed(error) => Some(format!("Error: {}", error)),
        };
        self.draw(banner.as_deref());
    }

    fn draw(&self, banner: Option<&str>) {
        let mut out = String::new();
        if self.redraw_in_place {
            out.push_str(CLEAR_SCREEN);
        }

        match &self.last_report {
            Some(report) => out.push_str(&render_report(report, self.color)),
            None => out.push_str(&format!("Loading vehicle data from {}...\n", self.url)),
        }

        if let Some(banner) = banner {
            out.push('\n');
            if self.color {
                out.push_str(&format!("\x1b[31m{}\x1b[0m\n", banner));
            } else {
                out.push_str(banner);
                out.push('\n');
            }
        }

        if self.redraw_in_place {
            out.push_str("\nPress Ctrl+C to exit.\n");
        } else {
            out.push('\n');
        }

        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(out.as_bytes());
        let _ = stdout.flush();
    }
}
