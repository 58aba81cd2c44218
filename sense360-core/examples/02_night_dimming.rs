//! Night-Mode Dimming Example
//!
//! Walks a simulated day past a 22:00-07:00 night window and shows when
//! the device would dim, including the forced-override behavior.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_night_dimming
//! ```

use sense360_core::{
    night_mode::{NightModeOverride, NightSchedule},
    time::minutes_until,
    TimeOfDay,
};

fn main() {
    println!("Sense360 Night Mode Example");
    println!("===========================\n");

    let schedule = NightSchedule::try_new(TimeOfDay::new(22, 0), TimeOfDay::new(7, 0))
        .expect("valid schedule");

    println!(
        "Window: {} - {} (crosses midnight)\n",
        schedule.start, schedule.end
    );

    // Sample the day every three hours
    println!("Automatic schedule:");
    for hour in (0..24u8).step_by(3) {
        let now = TimeOfDay::new(hour, 0);
        let mode = if schedule.is_active(now, true) { "NIGHT" } else { "day" };
        let next = schedule.next_change(schedule.is_active(now, true));
        println!(
            "  {}  {:5}  (next change {} in {} min)",
            now,
            mode,
            next,
            minutes_until(now, next)
        );
    }

    // A guest room device pinned to night mode
    let mut pinned = schedule;
    pinned.override_mode = NightModeOverride::ForceOn;
    println!(
        "\nForceOn at noon: {}",
        if pinned.is_active(TimeOfDay::new(12, 0), true) { "NIGHT" } else { "day" }
    );

    // RTC not yet synced: the device refuses to dim on a bad clock
    println!(
        "Unsynced clock at 23:00: {}",
        if schedule.is_active(TimeOfDay::new(23, 0), false) { "NIGHT" } else { "day" }
    );
}
