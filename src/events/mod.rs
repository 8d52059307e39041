pub mod clock;
pub mod entry;
pub mod pointer;
pub mod resize;
pub mod scroll;

pub use clock::wire_session_clock;
pub use entry::wire_entry_animations;
pub use pointer::{wire_row_click, wire_row_hover};
pub use resize::wire_debounced_resize;
pub use scroll::{wire_scroll, wire_velocity_decay};
