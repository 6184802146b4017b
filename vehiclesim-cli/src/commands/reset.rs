//! Reset command - restart a running simulation from the first waypoint.

use vehiclesim::dashboard::{HttpVehicleClient, VehicleClient};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the reset command against the service at `url` (or the configured one).
pub fn run(url: Option<String>) -> Result<(), CliError> {
    let runner = CliRunner::for_client()?;
    runner.log_startup("reset");

    let url = url.unwrap_or_else(|| runner.config().dashboard.url.clone());
    let client = HttpVehicleClient::new(&url).map_err(|error| CliError::Fetch {
        url: url.clone(),
        error,
    })?;

    let runtime = runner.runtime()?;
    let ack = runtime
        .block_on(client.reset())
        .map_err(|error| CliError::Fetch { url, error })?;

    println!("{}", ack.message);
    Ok(())
}
