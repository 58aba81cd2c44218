//! Basic Reading Classification Example
//!
//! Classifies one polling cycle of sensor readings with the shipped
//! default thresholds, reduces them to a worst status, and shows the
//! resulting LED color and brightness.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_classify_readings
//! ```

use sense360_core::{
    led::{brightness_scale_for_level, color_for_severity, scale_color, SeverityLevel},
    thresholds::worst_status_of,
    Thresholds,
};

fn main() {
    println!("Sense360 Reading Classification Example");
    println!("=======================================\n");

    // One polling cycle as the firmware sees it
    let readings = [
        ("PM1.0", 4.2, Thresholds::pm1()),
        ("PM2.5", 14.0, Thresholds::pm2_5()),
        ("PM10", 21.0, Thresholds::pm10()),
        ("VOC", 95.0, Thresholds::voc()),
        ("NOx", 30.0, Thresholds::nox()),
        ("CO2", f32::NAN, Thresholds::co2()), // still warming up
    ];

    println!("Per-channel status:");
    for (name, value, thresholds) in &readings {
        let status = thresholds.classify(*value);
        println!("  {:6} {:8.1}  -> {}", name, value, status);
    }

    // Unknown channels are ignored unless every channel is unknown
    let worst = worst_status_of(readings.iter().map(|(_, value, t)| t.classify(*value)));
    println!("\nWorst status: {}", worst);

    // Drive the LED from the worst status
    let level = SeverityLevel::from(worst);
    let color = color_for_severity(level);
    let brightness = brightness_scale_for_level(level);
    let shown = scale_color(color, brightness);

    println!("LED color:    #{:02X}{:02X}{:02X}", color.red, color.green, color.blue);
    println!("Brightness:   {:.0}%", brightness * 100.0);
    println!("Shown color:  #{:02X}{:02X}{:02X}", shown.red, shown.green, shown.blue);
}
