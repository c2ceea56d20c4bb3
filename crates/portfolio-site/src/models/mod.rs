pub mod contact;
pub mod filter;
pub mod language;
pub mod navigation;
pub mod scroll;
pub mod theme;
pub mod transition;
pub mod viewport;

pub use contact::*;
pub use filter::*;
pub use language::*;
pub use navigation::*;
pub use scroll::*;
pub use theme::*;
pub use transition::*;
pub use viewport::*;
