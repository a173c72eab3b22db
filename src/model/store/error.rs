
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

pub type Result<T> = core::result::Result<T, Error>;

#[serde_as]
#[derive(Debug, Serialize)]
pub enum Error {
    RecordSerialize(#[serde_as(as = "DisplayFromStr")] serde_json::Error),

    FileWrite {
        path: String,
        #[serde_as(as = "DisplayFromStr")]
        cause: std::io::Error,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}
