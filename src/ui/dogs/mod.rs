mod intent;
mod reducer;
mod state;

pub use intent::DogsIntent;
pub use reducer::DogsReducer;
pub use state::DogsScreenState;
