//! Model-View-Intent (MVI) primitives for the terminal screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ draw()
//!    ↑                               │
//!    └── key press / view model ─────┘
//! ```
//!
//! - **State**: everything `draw()` needs for one frame
//! - **Intent**: a key press or a change observed on the view model
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
