
use crate::{Error, Result};
use std::str::FromStr;
use std::{env, sync::OnceLock};

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

#[allow(non_snake_case)]
pub struct Config {
    pub WEB_FOLDER: String,
    pub WEB_PORT: u16,
    pub DATA_FILE: String,
    pub CORS_ORIGIN: Option<String>,
}

impl Config {
    fn load_from_env() -> Result<Config> {
        Ok(Config {
            WEB_FOLDER: get_env_or("SERVICE_WEB_FOLDER", "web-folder"),
            WEB_PORT: get_env_parse("SERVICE_WEB_PORT", 3000)?,
            DATA_FILE: get_env_or("SERVICE_DATA_FILE", "messages.json"),
            CORS_ORIGIN: get_env_opt("SERVICE_CORS_ORIGIN"),
        })
    }
}

fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name).ok()
}

fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse<T: FromStr>(name: &'static str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(val) => val.parse().map_err(|_| Error::ConfigWrongFormat(name)),
        Err(_) => Ok(default),
    }
}
