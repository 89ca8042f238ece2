//! Basic Comfort Evaluation Example
//!
//! Evaluates a handful of rooms, prints the indices the way a dashboard
//! would show them and lists the recommendations for uncomfortable ones.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run -p comfortguard-core --example 01_basic_evaluation
//! ```

use comfortguard_core::{
    display, BoundsProfile, ComfortMonitor, EnvironmentalInput, GuardPolicy, MonitorConfig,
};

fn main() {
    println!("ComfortGuard Basic Evaluation Example");
    println!("=====================================\n");

    let rooms = [
        ("Meeting room", EnvironmentalInput::new(23.5, 25.5, 0.1, 60.0, 1.2, 0.5)),
        ("Open office", EnvironmentalInput::new(22.0, 22.0, 0.1, 60.0, 1.2, 0.5)),
        ("Server corridor", EnvironmentalInput::new(35.0, 35.0, 0.1, 80.0, 1.2, 0.5)),
        ("Broken sensor", EnvironmentalInput::new(24.0, 24.0, -0.3, 50.0, 1.2, 0.5)),
    ];

    let mut monitor = ComfortMonitor::new(MonitorConfig::default());

    for (ts, (name, input)) in rooms.iter().enumerate() {
        let evaluation = match monitor.evaluate(*input, ts as u64 * 1_000) {
            Ok(evaluation) => evaluation,
            Err(err) => {
                println!("{name}: rejected ({err})");
                continue;
            }
        };

        let (pmv, ppd) = display::format_result(&evaluation.result);
        println!("{name}: PMV {pmv}, PPD {ppd}");

        if let Some(state) = &evaluation.state {
            for line in display::recommendation_lines(state) {
                println!("    {line}");
            }
        }
    }

    println!("\nRecorded {} valid samples", monitor.history().len());

    // Same rooms under strict ISO bounds
    println!("\nStrict ISO guard:");
    monitor.set_guard(GuardPolicy::Reject, BoundsProfile::Iso);
    for (name, input) in &rooms {
        if let Err(err) = monitor.evaluate(*input, 10_000) {
            println!("  {name}: {err}");
        }
    }
}
