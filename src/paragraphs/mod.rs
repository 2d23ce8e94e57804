pub mod core;
pub mod selection;

pub use self::core::ParagraphSet;
pub use selection::{about, choose, Topic};
