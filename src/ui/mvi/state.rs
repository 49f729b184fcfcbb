/// Marker trait for screen state.
///
/// `Default` lets callers `std::mem::take` the state into a reducer;
/// `PartialEq` lets them skip redraws when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
