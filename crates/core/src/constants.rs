/// Oldest model year accepted for a car.
pub const MIN_MODEL_YEAR: i32 = 1900;
