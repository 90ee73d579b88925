pub mod event;

pub use event::{ContactEvent, EventError};
