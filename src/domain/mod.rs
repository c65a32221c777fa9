//! Domain layer: the snippet entity, its identifier, and time sources.

pub mod clock;
pub mod snippet;
pub mod snippet_id;

pub use clock::{Clock, ManualClock, SystemClock};
pub use snippet::Snippet;
pub use snippet_id::SnippetId;
