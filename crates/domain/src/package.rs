use log::{debug, warn};

use crate::{Running, SportsWalking, Swimming, TrainingType, Workout, WorkoutError};

/// Packages of the reference sensor recording.
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720., 1., 80., 25., 40.]),
    ("RUN", &[15000., 1., 75.]),
    ("WLK", &[9000., 1., 75., 180.]),
];

/// Create the training described by a sensor package.
///
/// The parameters are bound by position in the order given by
/// [`TrainingType::parameter_names`].
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let Ok(training_type) = workout_type.parse::<TrainingType>() else {
        warn!("rejected package with unknown workout code {workout_type:?}");
        return Err(WorkoutError::UnknownCode(workout_type.to_string()));
    };

    let workout = match (training_type, data) {
        (TrainingType::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Swimming::new(
                count("action", action)?,
                duration,
                weight,
                length_pool,
                count("count_pool", count_pool)?,
            )
            .into()
        }
        (TrainingType::Running, &[action, duration, weight]) => {
            Running::new(count("action", action)?, duration, weight).into()
        }
        (TrainingType::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(count("action", action)?, duration, weight, height).into()
        }
        _ => {
            warn!(
                "rejected {training_type} package with {} parameters",
                data.len()
            );
            return Err(WorkoutError::ParameterCount {
                training_type,
                actual: data.len(),
            });
        }
    };

    debug!("read {training_type} package {data:?}");

    Ok(workout)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(name: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        warn!("rejected package with {name} {value}");
        Err(WorkoutError::NotACount { name, value })
    }
}
