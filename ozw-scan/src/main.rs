//! Z-Wave controller scanner
//!
//! Enumerates serial ports, reports attached controllers recognized by the
//! fingerprint registry, and optionally runs the connection lifecycle
//! against the simulated engine:
//!
//! ```text
//! ozw-scan             # list matched controllers
//! ozw-scan --json      # same, as JSON
//! ozw-scan --simulate  # connect a simulated engine and print events
//! ```

use anyhow::Context;
use ozw_detect::ControllerScanner;
use ozw_link::{Controller, DriverConfig, DriverEvent};
use ozw_protocol::CommandClass;
use ozw_sim::{SimulatedEngine, SimulatedNetwork};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    // Include all our crates in the default filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ozw_scan=info,ozw_detect=info,ozw_link=info,ozw_sim=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_event(event: &DriverEvent) {
    match event {
        DriverEvent::Connected { port } => println!("connected to {port}"),
        DriverEvent::DriverReady { home_id } => println!("driver ready, home id 0x{home_id:08x}"),
        DriverEvent::DriverFailed => println!("driver failed"),
        DriverEvent::NodeAdded { node_id } => println!("new node discovered: {node_id}"),
        DriverEvent::NodeReady { node_id, info } => println!(
            "node {} ready: ({} {}, {}, {})",
            node_id, info.manufacturer, info.product, info.node_type, info.location
        ),
        DriverEvent::ValueAdded { value } => println!(
            "node {} value added: {} [{}] = {}",
            value.node_id,
            value.class.name(),
            value.index,
            value.value
        ),
        DriverEvent::ValueChanged { value } => println!(
            "node {} value changed: {} [{}] = {}",
            value.node_id,
            value.class.name(),
            value.index,
            value.value
        ),
        DriverEvent::ValueRemoved {
            node_id,
            class,
            index,
        } => println!("node {} value removed: {} [{}]", node_id, class.name(), index),
        DriverEvent::NodeEvent { node_id, data } => {
            println!("node {node_id} event: {data}")
        }
        DriverEvent::Notification { node_id, code } => {
            println!("node {} notification: {}", node_id, code.name())
        }
        DriverEvent::ScanComplete => println!("scan complete"),
        DriverEvent::Disconnected { port } => println!("disconnected from {port}"),
    }
}

async fn run_simulation() -> anyhow::Result<()> {
    let engine = SimulatedEngine::new(SimulatedNetwork::demo());
    let handle = engine.handle();
    let mut controller = Controller::new(engine, DriverConfig::default());

    let mut events = controller
        .connect("/dev/zwave-sim")
        .context("starting simulated engine")?;

    println!("running, press ctrl-c to disconnect");

    loop {
        tokio::select! {
            event = events.next() => {
                match event {
                    Some(DriverEvent::ScanComplete) => {
                        print_event(&DriverEvent::ScanComplete);
                        // Show some post-scan activity
                        handle.set_value(2, CommandClass::SwitchBinary, 0, "true")?;
                    }
                    Some(event) => print_event(&event),
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                if controller.is_connected() {
                    println!("disconnecting");
                    controller.disconnect()?;
                }
            }
        }
    }

    Ok(())
}

fn scan(json: bool) -> anyhow::Result<()> {
    let scanner = ControllerScanner::new();
    let matched = scanner.scan().context("scanning serial ports")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(());
    }

    if matched.is_empty() {
        println!("no known Z-Wave controllers found");
    } else {
        for device in &matched {
            println!(
                "{}: {} {} ({}:{})",
                device.device.port,
                device.vendor,
                device.description,
                device.device.vendor_id,
                device.device.product_id
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let simulate = args.iter().any(|a| a == "--simulate");

    if let Some(unknown) = args
        .iter()
        .find(|a| *a != "--json" && *a != "--simulate")
    {
        anyhow::bail!("unknown argument: {unknown} (expected --json and/or --simulate)");
    }

    info!("Starting Z-Wave controller scan");
    scan(json)?;

    if simulate {
        run_simulation().await?;
    }

    Ok(())
}
