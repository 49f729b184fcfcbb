/// Marker trait for intents handled by a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
