//! Show the configured act table.

use cutlist_reporter::{format_seconds, ReportOptions};

/// Rate used to show act lengths in seconds; payloads carry their own.
const DISPLAY_FPS: f64 = 24.0;

pub fn run(options: &ReportOptions) -> anyhow::Result<()> {
    println!("Report: {}", options.title);
    println!("Acts:");
    for (i, act) in options.acts.acts().iter().enumerate() {
        println!(
            "  {}. {} [{}, {}) {} frames ({} @ {DISPLAY_FPS} fps)",
            i + 1,
            act.name,
            act.start,
            act.end,
            act.duration_frames(),
            format_seconds(act.duration_frames(), DISPLAY_FPS)
        );
    }
    println!();
    println!("Clips starting outside every act are placed in the last one.");

    Ok(())
}
