use derive_more::Display;

/// Summary of a completed training.
#[derive(Debug, Display, Clone, PartialEq)]
#[display(
    "Training type: {training_type}; Duration: {duration} h.; Distance: {distance:.2} km; \
     Avg speed: {speed:.2} km/h; Calories burned: {calories:.2}."
)]
pub struct InfoMessage {
    pub training_type: &'static str,
    /// Hours, shown as given.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// Kilometres per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    #[must_use]
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}
