pub mod cs;
pub mod element;
pub mod error;
pub mod report;

pub use cs::sort;
pub use element::{DataType, Element};
pub use error::{Error, Result};
