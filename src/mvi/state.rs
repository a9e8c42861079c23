//! State side of the MVI triple.

/// Marker for values a reducer owns.
///
/// The default value is the state a fresh screen (or a cleared calculator)
/// starts from; reducers consume a state by value and hand back the next one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
