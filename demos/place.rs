//! Place an overlay described by a scenario file and print the outcome.
//!
//! Run with: cargo run --example place --features tracing -- tests/scenarios/dropdown_below_button.scenario
//! Set RUST_LOG=popplace=trace to see every side that was tried.

use camino::Utf8PathBuf;
use popplace::{PlacementResult, Scenario};
use tracing_subscriber::EnvFilter;

const BUILTIN: &str = r#"
# A button with its dropdown, preferring below and then to the right.
anchor 100 100 50 50
overlay 0 0 max 200 80
viewport 0 0 400 300
prefer bottom, right
margin 8
expect placed bottom 25 158
"#;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let scenario = match std::env::args().nth(1).map(Utf8PathBuf::from) {
        Some(path) => Scenario::load(&path)?,
        None => Scenario::parse("<builtin>", BUILTIN)?,
    };

    let request = &scenario.request;
    println!("anchor   {}", request.anchor);
    println!("viewport {}", request.viewport);
    println!(
        "overlay  at ({}, {}), max {}x{}",
        request.overlay_origin.x,
        request.overlay_origin.y,
        request.overlay_max_size.x,
        request.overlay_max_size.y
    );

    match scenario.run() {
        Ok(PlacementResult::Placed(p)) => {
            println!("{}", PlacementResult::Placed(p));
            println!("bounds   {}", p.overlay_bounds(request));
        }
        Ok(PlacementResult::NoFit) => {
            println!("none: no preferred side fits, leave the overlay closed");
        }
        Err(err) => println!("invalid: {err}"),
    }

    if let Some(expected) = scenario.expectation {
        scenario.check()?;
        println!("matches `expect {expected}`");
    }
    Ok(())
}
