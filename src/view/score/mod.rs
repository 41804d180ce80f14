pub mod scoreboard;
pub mod terminal;
pub mod text;
pub mod types;
pub mod utils;

pub use scoreboard::*;
pub use terminal::*;
pub use text::*;
pub use types::*;
pub use utils::*;
