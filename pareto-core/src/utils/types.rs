/// Alias to a scalar floating type used for objective and constraint values.
pub type Float = f64;
