pub mod fanout;
pub mod form;

pub use crate::domain::model::{Backend, FanOutReport, NameRecord, NameRow};
pub use crate::domain::ports::{ConfigProvider, NameStore};
pub use crate::utils::error::Result;
