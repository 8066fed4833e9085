//! TUI pane rendering
//!
//! - [`transcript`]: submitted lines with their unparsed form and result
//! - [`memory`]: every allocated name with its address and stored value
//! - [`input`]: the prompt line being edited
//! - [`status`]: last result and keybindings
//!
//! Scrollable panes take their offset by `&mut` and clamp it to the content,
//! so callers can park an offset at `usize::MAX` to follow the bottom.

mod scroll;

pub mod input;
pub mod memory;
pub mod status;
pub mod transcript;

pub use input::render_input_line;
pub use memory::render_memory_pane;
pub use status::render_status_bar;
pub use transcript::render_transcript_pane;
