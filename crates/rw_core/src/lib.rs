pub mod error;
pub mod news;
pub mod storage;
pub mod types;

pub use error::Error;
pub use news::NewsSource;
pub use storage::RedZoneStorage;
pub use types::{Article, RedZone};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::news::NewsSource;
    pub use crate::storage::RedZoneStorage;
    pub use crate::types::{Article, RedZone};
    pub use crate::{Error, Result};
}
