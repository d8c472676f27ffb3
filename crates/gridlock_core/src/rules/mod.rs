//! Win and draw detection rules.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::completed_lines;
