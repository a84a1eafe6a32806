use chrono::{Duration, Local};
use timetable_card::{
    CardConfig, CardRegistry, Departure, EntityState, StateSnapshot, TAG_NAME, register,
};
use tracing_subscriber::EnvFilter;

const DEMO_CONFIG: &str = r#"{
    "title": "Berlin departures",
    "entities": ["sensor.warschauer_strasse", "sensor.moeckernbruecke"],
    "max_entries": 4
}"#;

// The host owns time handling; departure times reach the card pre-formatted.
fn display_time(minutes_from_now: i64) -> String {
    (Local::now() + Duration::minutes(minutes_from_now))
        .format("%H:%M")
        .to_string()
}

fn mock_snapshot() -> StateSnapshot {
    let mut snapshot = StateSnapshot::new();
    snapshot.insert(
        "sensor.warschauer_strasse",
        EntityState::new(
            "S+U Warschauer Str.",
            vec![
                Departure::new("U1", "#7dad4c", "Uhlandstr.", display_time(2), false),
                Departure::new("U3", "#16683d", "Krumme Lanke", display_time(4), false),
                Departure::new("S5", "#eb7405", "Strausberg Nord", display_time(7), true),
                Departure::new("S7", "#816da6", "Potsdam Hbf", display_time(9), false),
                Departure::new("M10", "#D82020", "Hauptbahnhof", display_time(11), false),
            ],
        ),
    );
    snapshot.insert(
        "sensor.moeckernbruecke",
        EntityState::new(
            "U Möckernbrücke",
            vec![
                Departure::new("U1", "#7dad4c", "Warschauer Str.", display_time(3), false),
                Departure::new("U7", "#009bd5", "Rudow", display_time(6), false),
            ],
        ),
    );
    snapshot
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Transport Timetable Card - Demo Host");
    println!("=====================================");

    let mut registry = CardRegistry::new();
    if register(&mut registry) {
        println!("✓ Card registered as <{}>", TAG_NAME);
    }

    let mut card = match registry.create(TAG_NAME) {
        Some(card) => card,
        None => {
            eprintln!("✗ Card is not registered");
            std::process::exit(1);
        }
    };

    let config: CardConfig = match serde_json::from_str(DEMO_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✗ Invalid card configuration: {}", e);
            std::process::exit(1);
        }
    };
    card.set_config(config);
    println!("✓ Card configured");

    // One state tick; how often this happens is the host's business.
    let snapshot = mock_snapshot();
    match card.render(&snapshot) {
        Ok(()) => {
            println!("✓ Rendered {} stops, card size {}", snapshot.len(), card.card_size());
            if let Some(root) = card.shadow_root() {
                println!("\n{}", root.to_html());
            }
        }
        Err(e) => {
            eprintln!("✗ Render error: {}", e);
            std::process::exit(1);
        }
    }
}
