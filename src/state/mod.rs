//! Application state module

mod alert;
mod forms;

pub use alert::*;
pub use forms::*;
