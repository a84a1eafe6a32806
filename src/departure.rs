use serde::Deserialize;

// Represents a single departure as published by the host's stop sensor.
// `time` arrives pre-formatted (e.g. "14:05") -- computing and formatting
// it is the host's job, the card treats it as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Departure {
    pub line_name: String,
    pub color: String,
    pub direction: String,
    pub time: String,
    #[serde(default)]
    pub cancelled: bool,
}

impl Departure {
    pub fn new(
        line_name: impl Into<String>,
        color: impl Into<String>,
        direction: impl Into<String>,
        time: impl Into<String>,
        cancelled: bool,
    ) -> Self {
        Self {
            line_name: line_name.into(),
            color: color.into(),
            direction: direction.into(),
            time: time.into(),
            cancelled,
        }
    }

    // Format as "S7 Potsdam Hbf 14:05" for logs and plain-text output
    pub fn format(&self) -> String {
        if self.cancelled {
            format!("{} {} {} (cancelled)", self.line_name, self.direction, self.time)
        } else {
            format!("{} {} {}", self.line_name, self.direction, self.time)
        }
    }
}

/// Generate mock departure data for testing and the demo host.
/// Colors are the real BVG line colors.
pub fn get_mock_departures() -> Vec<Departure> {
    vec![
        Departure::new("U3", "#16683d", "Krumme Lanke", "14:02", false),
        Departure::new("S7", "#816da6", "Potsdam Hbf", "14:05", false),
        Departure::new("S5", "#eb7405", "Strausberg Nord", "14:09", true),
    ]
}
