//! Simulated Sensor Stream Example
//!
//! Drives the monitor from the deterministic simulated source, as the
//! dashboard does in simulation mode, then summarises the history window.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run -p comfortguard-core --example 02_simulated_stream
//! ```

use comfortguard_core::{
    display, time::format_elapsed, ComfortMonitor, FeedbackTally, FeedbackVote, FixedTime, MonitorConfig,
    SimulatedInput, TimeSource,
};

fn main() {
    println!("ComfortGuard Simulated Stream Example");
    println!("=====================================\n");

    let mut monitor = ComfortMonitor::new(MonitorConfig::default());
    let mut sensor = SimulatedInput::new(1234).take_readings(45);
    let mut clock = FixedTime::new(0);
    let session_start = clock.now();
    let mut feedback = FeedbackTally::default();

    while let Some(outcome) = monitor.evaluate_next(&mut sensor, &clock) {
        match outcome {
            Ok(evaluation) => {
                let (pmv, ppd) = display::format_result(&evaluation.result);
                let verdict = match &evaluation.state {
                    Some(state) if state.is_comfortable() => "comfortable",
                    Some(_) => "discomfort",
                    None => "invalid",
                };
                println!(
                    "t={:>6}  {:.1}°C {:.0}%  PMV {:>5}  PPD {:>5}  {}",
                    clock.now(),
                    evaluation.input.air_temperature,
                    evaluation.input.relative_humidity,
                    pmv,
                    ppd,
                    verdict
                );

                // Occupants tend to vote hot when the model says warm
                if let Some(indices) = evaluation.result.indices() {
                    let vote = if indices.pmv > 0.5 {
                        FeedbackVote::TooHot
                    } else if indices.pmv < -0.5 {
                        FeedbackVote::TooCold
                    } else {
                        FeedbackVote::Comfortable
                    };
                    feedback.record(vote);
                }
            }
            Err(err) => println!("rejected: {err}"),
        }
        clock.advance(2_000);
    }

    let history = monitor.history();
    println!("\nWindow: {} of {} samples", history.len(), history.capacity());

    match history.statistics() {
        Ok(stats) => {
            println!(
                "PMV min/mean/max: {} / {} / {}",
                display::format_pmv(stats.pmv.min),
                display::format_pmv(stats.pmv.mean),
                display::format_pmv(stats.pmv.max)
            );
            println!(
                "PPD min/mean/max: {} / {} / {}",
                display::format_ppd(stats.ppd.min),
                display::format_ppd(stats.ppd.mean),
                display::format_ppd(stats.ppd.max)
            );
        }
        Err(err) => println!("No statistics: {err}"),
    }

    let ratio = history.comfort_ratio();
    println!("Comfortable: {} / Discomfort: {}", ratio.comfortable, ratio.discomfort);

    for segment in history.segments() {
        println!(
            "  {:<11} {:>6}..{:>6} ({} samples)",
            if segment.comfortable { "comfortable" } else { "discomfort" },
            segment.start,
            segment.end,
            segment.samples
        );
    }

    println!("\nFeedback:");
    for (vote, count) in feedback.counts() {
        println!("  {vote}: {count}");
    }

    println!("\nSession duration: {}", format_elapsed(session_start, clock.now()));
}
