pub mod duration;
pub mod event;

pub use duration::format_ms;
pub use event::{PlayableEvent, ResolvedPlaylist};
