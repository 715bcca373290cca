//! The deterministic part of the dashboard: score classification,
//! component highlighting and the call/put volume split. Everything here
//! is a pure function over values the backend already computed.

mod classify;
mod components;
mod sentiment;

pub use classify::{classify, ColorToken, Severity};
pub use components::{flag_components, ComponentFlags};
pub use sentiment::{split_volumes, VolumeSplit};
