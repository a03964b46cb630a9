// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn, LevelFilter};
use nzroutes_core::table::{route_table, weather_table, TermTable};
use nzroutes_core::traffic::{domestic_pilots, TrafficFeed};
use nzroutes_core::weather::MetarClient;
use nzroutes_core::{DataSource, MonitorConfig, ReferenceData};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::thread;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file (defaults to the platform config directory)
    #[arg(short, long, env = "NZROUTES_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Standard route catalog: URL or file path
    #[arg(long, env = "NZROUTES_ROUTES", global = true)]
    routes: Option<String>,

    /// Airfield list file, replacing the bundled one
    #[arg(long, env = "NZROUTES_AIRFIELDS", global = true)]
    airfields: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll live traffic and show standard route adherence (default)
    Watch(WatchArgs),
    /// Check a filed route against the catalog routes for a pairing
    Check {
        departure: String,
        destination: String,
        /// Filed route, e.g. NOBAR/N0450F370 Y346 SELWI
        #[arg(required = true, num_args = 1..)]
        route: Vec<String>,
    },
    /// List catalog routes, optionally for one departure aerodrome
    Routes { departure: Option<String> },
}

#[derive(Args)]
struct WatchArgs {
    /// Render a single cycle and exit
    #[arg(long)]
    once: bool,
    /// Seconds between refreshes
    #[arg(long)]
    interval: Option<u64>,
    /// Route relevance radius around the departure aerodrome (NM)
    #[arg(long)]
    departure_radius: Option<f64>,
    /// Weather relevance radius around the destination aerodrome (NM)
    #[arg(long)]
    arrival_radius: Option<f64>,
    /// ICAO prefix both ends of a flight must share
    #[arg(long)]
    prefix: Option<String>,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("nzroutes")
        .build();
    // Only fails if a logger is already installed.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let mut config = MonitorConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(routes) = &cli.routes {
        config.routes_source = DataSource::parse(routes);
    }
    if let Some(airfields) = &cli.airfields {
        config.airfields_source = DataSource::Path(airfields.clone());
    }

    match cli.command {
        Some(Commands::Watch(args)) => {
            apply_watch_args(&mut config, &args);
            watch(&config, args.once)
        }
        None => watch(&config, false),
        Some(Commands::Check {
            departure,
            destination,
            route,
        }) => check(&config, &departure, &destination, &route.join(" ")),
        Some(Commands::Routes { departure }) => list_routes(&config, departure.as_deref()),
    }
}

fn apply_watch_args(config: &mut MonitorConfig, args: &WatchArgs) {
    if let Some(interval) = args.interval {
        config.refresh_interval_secs = interval;
    }
    if let Some(radius) = args.departure_radius {
        config.departure_radius_nm = radius;
    }
    if let Some(radius) = args.arrival_radius {
        config.arrival_radius_nm = radius;
    }
    if let Some(prefix) = &args.prefix {
        config.icao_prefix = prefix.to_uppercase();
    }
}

fn load_reference(config: &MonitorConfig) -> Result<ReferenceData> {
    ReferenceData::load(config).with_context(|| {
        format!(
            "Failed to load reference data (routes={} airfields={})",
            config.routes_source, config.airfields_source
        )
    })
}

fn watch(config: &MonitorConfig, once: bool) -> Result<()> {
    let data = load_reference(config)?;
    let builder = data.report_builder(config);
    let feed = TrafficFeed::new(&config.traffic_url, config.request_timeout())?;
    let metars = MetarClient::new(&config.metar_url, config.request_timeout())?;

    loop {
        match feed.fetch() {
            Ok(snapshot) => {
                let pilots = domestic_pilots(&config.icao_prefix, &snapshot.pilots);
                let reports = builder.route_reports(&pilots);
                let stations = builder.weather_stations(&pilots);
                let weather = metars.fetch_many(stations.iter().map(String::as_str));

                clear_terminal();
                println!(
                    "NZRoutes, relevant routes ({} UTC)",
                    chrono::Utc::now().format("%H:%M:%S")
                );
                route_table(&reports).print();
                println!();
                println!("Arrival weather");
                weather_table(&weather).print();
                info!(
                    "Cycle complete — pilots={} rows={} stations={}",
                    pilots.len(),
                    reports.len(),
                    weather.len()
                );
            }
            Err(e) => warn!("Could not get pilots data — error={:#}", e),
        }

        if once {
            return Ok(());
        }
        thread::sleep(config.refresh_interval());
    }
}

fn check(config: &MonitorConfig, departure: &str, destination: &str, route: &str) -> Result<()> {
    let data = load_reference(config)?;
    let departure = departure.to_uppercase();
    let destination = destination.to_uppercase();

    let reports = data
        .report_builder(config)
        .check_filed_route(&departure, &destination, route);
    if reports.is_empty() {
        println!("No standard routes from {} to {}", departure, destination);
        return Ok(());
    }
    route_table(&reports).print();
    Ok(())
}

fn list_routes(config: &MonitorConfig, departure: Option<&str>) -> Result<()> {
    let data = load_reference(config)?;
    let departures: Vec<String> = match departure {
        Some(dep) => vec![dep.to_uppercase()],
        None => data
            .catalog
            .departures()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    let mut table = TermTable::new(["Departure", "Arrival", "Route ID", "Route Points", "Remarks"]);
    for dep in &departures {
        let Some(routes) = data.catalog.routes_from(dep) else {
            println!("No routes for departure field {}", dep);
            continue;
        };
        for route in routes {
            table.add_row([
                route.departure.clone(),
                route.destination.clone(),
                route.id.clone(),
                route.formatted_waypoints(),
                route.remarks.to_string(),
            ]);
        }
    }
    if !table.is_empty() {
        table.print();
    }
    Ok(())
}

fn clear_terminal() {
    print!("\x1B[2J\x1B[1;1H");
}
