use thiserror::Error;

pub type BpResult<T> = Result<T, BpError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BpError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
