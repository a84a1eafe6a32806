pub mod card;
pub mod config;
pub mod departure;
pub mod dom;
pub mod registry;
pub mod state;

pub use card::{CARD_SIZE, CardError, MissingStopPolicy, TimetableCard};
pub use config::CardConfig;
pub use departure::{Departure, get_mock_departures};
pub use dom::{CARD_STYLE, ShadowRoot};
pub use registry::{CardRegistry, TAG_NAME, register};
pub use state::{EntityState, StateSnapshot, StopAttributes};
