use thiserror::Error;

pub mod connection;
pub mod params;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Missing parameter `{0}`")]
    MissingKey(String),
}
