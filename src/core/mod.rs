pub mod defang;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{DefangReport, DefangedAddress, InputLine, LoadOutcome, Mode};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
