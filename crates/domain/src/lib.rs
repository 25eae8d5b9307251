#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod message;
pub mod package;
pub mod training;
pub mod training_type;

pub use error::WorkoutError;
pub use message::InfoMessage;
pub use package::{SAMPLE_PACKAGES, read_package};
pub use training::{
    M_IN_KM, MIN_IN_H, Running, SEC_IN_H, SportsWalking, Swimming, Training, TrainingBase,
    TrainingInfo, Workout,
};
pub use training_type::TrainingType;
