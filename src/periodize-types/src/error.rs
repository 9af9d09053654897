use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TypesError {
    #[error("`{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("exercise selection required for workout `{0}`")]
    NoExercises(String),
}
