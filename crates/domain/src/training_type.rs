use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Workout codes as sent by the sensor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum TrainingType {
    #[strum(serialize = "SWM")]
    Swimming,
    #[strum(serialize = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    SportsWalking,
}

impl TrainingType {
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Label used in the training summary.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TrainingType::Swimming => "Swimming",
            TrainingType::Running => "Running",
            TrainingType::SportsWalking => "SportsWalking",
        }
    }

    /// Names of the positional parameters of a package, in order.
    #[must_use]
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            TrainingType::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            TrainingType::Running => &["action", "duration", "weight"],
            TrainingType::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }
}
