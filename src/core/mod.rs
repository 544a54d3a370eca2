pub mod gate;

pub use crate::domain::model::{AccessOutcome, AccessRequest, AccessSecret};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
