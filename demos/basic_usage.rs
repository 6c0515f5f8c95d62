// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `RUST_LOG=trace` to see the truncation events of the
// cross-dimension conversions.

use light_units::prelude::*;
use rust_decimal::Decimal;
use std::env;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    println!("=== Light Units Example ===\n");

    // Ohm's law across three different base prefixes
    let current = microamps(1);
    let resistance = kiloohms(10);
    let voltage = current * resistance;
    println!(
        "1 uA * 10 kOhm = {} mV",
        voltage.to_prefix(Prefix::Milli)
    );

    let voltage = volts(4);
    let resistance = ohms(200);
    let current = voltage / resistance;
    println!("4 V / 200 Ohm = {} mA", current.to_prefix(Prefix::Milli));
    println!(
        "4 V / {} mA = {} Ohm",
        current.to_prefix(Prefix::Milli),
        (voltage / current).to_prefix(Prefix::One)
    );

    // Parallel resistors
    let combined = ohms(30) | ohms(60);
    println!("30 Ohm || 60 Ohm = {} Ohm", combined.to_prefix(Prefix::One));

    // Readback at other prefixes
    println!("\n=== Readback ===");
    let current = milliamps(1_250) + microamps(7);
    for prefix in Prefix::ALL {
        println!("  {:?}: {}", prefix, current.to_prefix(prefix));
    }
    println!("  as f64: {} A", current.to_f64());

    // Sub-resolution results truncate
    println!("\n=== Truncation ===");
    println!(
        "1 uA * 1 Ohm = {} mV",
        (microamps(1) * ohms(1)).to_prefix(Prefix::Milli)
    );
    println!(
        "1 mV / 3 kOhm = {} uA",
        (millivolts(1) / kiloohms(3)).to_prefix(Prefix::Micro)
    );

    // Checked variants report instead of wrapping
    println!("\n=== Checked Operations ===");
    match voltage_drop(amps(2_000), kiloohms(2_000)) {
        Ok(u) => println!("voltage drop: {} mV", u.raw()),
        Err(e) => info!(error = %e, "voltage drop not representable"),
    }
    match current_through(volts(4), ohms(0)) {
        Ok(i) => println!("current: {} uA", i.raw()),
        Err(e) => info!(error = %e, "current not representable"),
    }
    match Volt::from_decimal(Decimal::new(33, 1)) {
        Ok(u) => println!("3.3 V from decimal: {} mV", u.raw()),
        Err(e) => info!(error = %e, "decimal not representable"),
    }
    match Volt::from_decimal(Decimal::new(12_345, 4)) {
        Ok(u) => println!("1.2345 V from decimal: {} mV", u.raw()),
        Err(e) => info!(error = %e, "decimal not representable"),
    }

    println!("\n=== Example Complete ===");
}
