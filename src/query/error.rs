use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid value for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
}
