
mod error;
pub mod mw_res_map;
pub mod rest;
pub mod routes_static;

pub use self::error::{ClientError, Error, Result};
