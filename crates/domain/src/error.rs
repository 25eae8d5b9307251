use crate::TrainingType;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout code \"{0}\"")]
    UnknownCode(String),
    #[error(
        "{training_type} expects {} parameters ({}), got {actual}",
        .training_type.parameter_names().len(),
        .training_type.parameter_names().join(", ")
    )]
    ParameterCount {
        training_type: TrainingType,
        actual: usize,
    },
    #[error("{name} must be a non-negative whole number ({value})")]
    NotACount { name: &'static str, value: f64 },
}
