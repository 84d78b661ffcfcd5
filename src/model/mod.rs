// Canonical event model and the pure pipeline stages around it.
pub mod display;
pub mod event;
pub mod filter;
pub mod merge;
pub mod normalize;

pub use event::{CAMPUSES, Event};
pub use filter::{FilterState, SortKey};
pub use normalize::RawEvent;
