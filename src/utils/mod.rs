pub mod colors;
pub mod date;
pub mod formatting;
pub mod ids;
pub mod input;
pub mod path;
pub mod table;

pub use formatting::fmt_number;
