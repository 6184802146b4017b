//! Serve command - run the vehicle position service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use vehiclesim::route::RouteDataset;
use vehiclesim::server::{self, VEHICLE_PATH};
use vehiclesim::simulation::{
    spawn_position_logger, SharedPositionProvider, SimulationService, DEFAULT_LOG_INTERVAL,
};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the serve command.
#[derive(Default)]
pub struct ServeArgs {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub route: Option<PathBuf>,
    pub step_ms: Option<u64>,
    pub debug: bool,
}

/// Run the serve command.
pub fn run(args: ServeArgs) -> Result<(), CliError> {
    let runner = CliRunner::for_server(args.debug)?;
    runner.log_startup("serve");
    let config = runner.config();

    // CLI flags override config file values
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let route_file = args.route.or_else(|| config.simulation.route_file.clone());

    let mut simulation_config = config.simulation.to_simulation_config();
    if let Some(step_ms) = args.step_ms {
        if step_ms == 0 {
            return Err(CliError::Config(
                "--step-ms must be greater than zero".to_string(),
            ));
        }
        simulation_config = simulation_config.with_step_interval(Duration::from_millis(step_ms));
    }

    match &route_file {
        Some(path) => info!(path = %path.display(), "Using route file"),
        None => info!("Using bundled route"),
    }

    // A route that fails to load still starts the server; position queries
    // answer 500 until it is restarted with a valid route.
    let load = RouteDataset::load_or_bundled(route_file.as_deref());
    if let Err(e) = &load {
        eprintln!("Warning: {}", e);
        eprintln!("Position queries will fail until the service is restarted with a valid route.");
    }
    let step_interval = simulation_config.step_interval;
    let provider: SharedPositionProvider =
        Arc::new(SimulationService::from_load_result(load, simulation_config));

    let runtime = runner.runtime()?;
    let shutdown = runner.shutdown_on_ctrlc()?;

    runtime.block_on(async move {
        let listener = server::bind(&host, port).await?;
        let local = listener
            .local_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| format!("{}:{}", host, port));

        println!("VehicleSim v{}", vehiclesim::VERSION);
        println!("  Endpoint: http://{}{}", local, VEHICLE_PATH);
        println!("  Step:     {} ms per waypoint", step_interval.as_millis());
        println!();
        println!("Press Ctrl+C to stop.");

        let logger = tracing::enabled!(tracing::Level::DEBUG).then(|| {
            spawn_position_logger(provider.clone(), shutdown.clone(), DEFAULT_LOG_INTERVAL)
        });

        let result = server::serve(listener, provider, shutdown.clone()).await;

        // Stop the logger too if the server exited on its own
        shutdown.cancel();
        if let Some(handle) = logger {
            let _ = handle.await;
        }

        result?;
        println!("Stopped.");
        Ok::<(), CliError>(())
    })
}
