use log::debug;

use crate::{InfoMessage, TrainingType};

pub const M_IN_KM: f64 = 1000.;
pub const MIN_IN_H: f64 = 60.;
pub const SEC_IN_H: f64 = 3600.;

/// Distance, speed and calorie calculation of a training.
///
/// Every training has an action count, a duration in hours and the weight of
/// the athlete in kilograms (see [`TrainingBase`]). The calorie estimate has
/// no general formula and must be provided by each kind of training.
pub trait Training {
    fn base(&self) -> &TrainingBase;

    fn training_type(&self) -> TrainingType;

    /// Distance in kilometres.
    fn get_distance(&self) -> f64;

    /// Mean speed in kilometres per hour.
    ///
    /// A duration of zero results in an infinite or NaN speed.
    fn get_mean_speed(&self) -> f64 {
        self.get_distance() / self.base().duration
    }

    /// Spent energy in kilocalories.
    fn get_spent_calories(&self) -> f64;
}

/// Summary of a training.
///
/// Implemented for all trainings and cannot be specialized.
pub trait TrainingInfo {
    fn show_training_info(&self) -> InfoMessage;
}

impl<T: Training + ?Sized> TrainingInfo for T {
    fn show_training_info(&self) -> InfoMessage {
        let distance = self.get_distance();
        let speed = self.get_mean_speed();
        let calories = self.get_spent_calories();
        debug!(
            "{}: distance={distance} speed={speed} calories={calories}",
            self.training_type()
        );
        InfoMessage {
            training_type: self.training_type().name(),
            duration: self.base().duration,
            distance,
            speed,
            calories,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps or strokes.
    pub action: u32,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl TrainingBase {
    /// Metres per step.
    pub const LEN_STEP: f64 = 0.65;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Distance in kilometres derived from the step count.
    #[must_use]
    pub fn step_distance(&self) -> f64 {
        f64::from(self.action) * Self::LEN_STEP / M_IN_KM
    }

    fn duration_min(&self) -> f64 {
        self.duration * MIN_IN_H
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> TrainingType {
        TrainingType::Running
    }

    fn get_distance(&self) -> f64 {
        self.base.step_distance()
    }

    fn get_spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.get_mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight
            / M_IN_KM
            * self.base.duration_min()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    /// Centimetres.
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const CM_IN_M: f64 = 100.;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> TrainingType {
        TrainingType::SportsWalking
    }

    fn get_distance(&self) -> f64 {
        self.base.step_distance()
    }

    fn get_spent_calories(&self) -> f64 {
        let speed_m_s = self.get_mean_speed() * M_IN_KM / SEC_IN_H;
        let calories = speed_m_s.powi(2) / self.height / Self::CM_IN_M
            + Self::CALORIES_WEIGHT_MULTIPLIER * self.base.weight;
        calories
            * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
            * self.base.weight
            * self.base.duration_min()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Metres.
    pub length_pool: f64,
    /// Number of pool lengths.
    pub count_pool: u32,
}

impl Swimming {
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64, length_pool: f64, count_pool: u32) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn training_type(&self) -> TrainingType {
        TrainingType::Swimming
    }

    /// Pool length times lap count. The stroke count does not contribute.
    fn get_distance(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM
    }

    fn get_spent_calories(&self) -> f64 {
        (self.get_mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight
            * self.base.duration
    }
}

/// Any of the supported trainings.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn training(&self) -> &dyn Training {
        match self {
            Workout::Running(running) => running,
            Workout::SportsWalking(sports_walking) => sports_walking,
            Workout::Swimming(swimming) => swimming,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &TrainingBase {
        self.training().base()
    }

    fn training_type(&self) -> TrainingType {
        self.training().training_type()
    }

    fn get_distance(&self) -> f64 {
        self.training().get_distance()
    }

    fn get_spent_calories(&self) -> f64 {
        self.training().get_spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_running() {
        let running = Running::new(15000, 1., 75.);

        assert_approx_eq!(running.get_distance(), 9.75);
        assert_approx_eq!(running.get_mean_speed(), 9.75);
        assert_approx_eq!(
            running.get_spent_calories(),
            (18. * 9.75 + 1.79) * 75. / 1000. * 1. * 60.
        );
    }

    #[test]
    fn test_sports_walking() {
        let sports_walking = SportsWalking::new(9000, 1., 75., 180.);
        let speed_m_s: f64 = 5.85 * 1000. / 3600.;

        assert_approx_eq!(sports_walking.get_distance(), 5.85);
        assert_approx_eq!(sports_walking.get_mean_speed(), 5.85);
        assert_approx_eq!(
            sports_walking.get_spent_calories(),
            (speed_m_s.powi(2) / 180. / 100. + 0.035 * 75.) * 0.029 * 75. * 1. * 60.
        );
    }

    #[test]
    fn test_swimming() {
        let swimming = Swimming::new(720, 1., 80., 25., 40);

        assert_approx_eq!(swimming.get_distance(), 1.0);
        assert_approx_eq!(swimming.get_mean_speed(), 1.0);
        assert_approx_eq!(swimming.get_spent_calories(), 336.0);
    }

    #[test]
    fn test_swimming_distance_ignores_strokes() {
        assert_eq!(
            Swimming::new(720, 1., 80., 25., 40).get_distance(),
            Swimming::new(0, 1., 80., 25., 40).get_distance()
        );
        assert_approx_eq!(TrainingBase::new(720, 1., 80.).step_distance(), 0.468);
    }

    #[rstest]
    #[case::running(Running::new(15000, 1.5, 75.).into())]
    #[case::sports_walking(SportsWalking::new(9000, 0.75, 75., 180.).into())]
    #[case::swimming(Swimming::new(720, 2., 80., 25., 40).into())]
    fn test_mean_speed_is_distance_per_hour(#[case] workout: Workout) {
        assert_approx_eq!(
            workout.get_mean_speed(),
            workout.get_distance() / workout.base().duration
        );
    }

    #[rstest]
    #[case::running(Running::new(15000, 1., 75.).into())]
    #[case::sports_walking(SportsWalking::new(9000, 1., 75., 180.).into())]
    #[case::swimming(Swimming::new(720, 1., 80., 25., 40).into())]
    fn test_calculations_are_idempotent(#[case] workout: Workout) {
        let first = workout.show_training_info();

        for _ in 0..3 {
            assert_eq!(workout.get_distance(), first.distance);
            assert_eq!(workout.get_mean_speed(), first.speed);
            assert_eq!(workout.get_spent_calories(), first.calories);
            assert_eq!(workout.show_training_info(), first);
        }
    }

    #[rstest]
    #[case::running(Running::new(15000, 1., 75.).into(), TrainingType::Running, "Running")]
    #[case::sports_walking(
        SportsWalking::new(9000, 1., 75., 180.).into(),
        TrainingType::SportsWalking,
        "SportsWalking"
    )]
    #[case::swimming(Swimming::new(720, 1., 80., 25., 40).into(), TrainingType::Swimming, "Swimming")]
    fn test_workout_delegates_to_variant(
        #[case] workout: Workout,
        #[case] training_type: TrainingType,
        #[case] name: &str,
    ) {
        assert_eq!(workout.training_type(), training_type);
        assert_eq!(workout.show_training_info().training_type, name);
    }

    #[test]
    fn test_workout_uses_variant_distance() {
        let swimming = Swimming::new(720, 1., 80., 25., 40);
        let workout = Workout::from(swimming.clone());

        assert_eq!(workout.get_distance(), swimming.get_distance());
        assert_eq!(workout.get_spent_calories(), swimming.get_spent_calories());
    }

    #[test]
    fn test_show_training_info() {
        assert_eq!(
            Swimming::new(720, 1., 80., 25., 40)
                .show_training_info()
                .get_message(),
            "Training type: Swimming; Duration: 1 h.; Distance: 1.00 km; \
             Avg speed: 1.00 km/h; Calories burned: 336.00."
        );
        assert_eq!(
            SportsWalking::new(9000, 1., 75., 180.)
                .show_training_info()
                .get_message(),
            "Training type: SportsWalking; Duration: 1 h.; Distance: 5.85 km; \
             Avg speed: 5.85 km/h; Calories burned: 342.58."
        );
    }

    #[test]
    fn test_zero_duration() {
        let running = Running::new(15000, 0., 75.);

        assert_approx_eq!(running.get_distance(), 9.75);
        assert!(running.get_mean_speed().is_infinite());
        assert!(running.get_spent_calories().is_nan());

        let swimming = Swimming::new(0, 0., 80., 25., 0);

        assert!(swimming.get_mean_speed().is_nan());
    }

    #[test]
    fn test_zero_height() {
        let sports_walking = SportsWalking::new(9000, 1., 75., 0.);

        assert!(sports_walking.get_spent_calories().is_infinite());
    }
}
