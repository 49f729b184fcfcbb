use crate::ui::dogs::intent::DogsIntent;
use crate::ui::dogs::state::DogsScreenState;
use crate::ui::mvi::Reducer;

pub struct DogsReducer;

impl Reducer for DogsReducer {
    type State = DogsScreenState;
    type Intent = DogsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DogsIntent::DogsUpdated { dogs } => {
                // A new batch is a new list; start at the top.
                DogsScreenState {
                    dogs,
                    selected: 0,
                    ..state
                }
            }
            DogsIntent::LoadingChanged { loading } => DogsScreenState { loading, ..state },
            DogsIntent::SelectNext => {
                let selected = if state.selected + 1 >= state.dogs.len() {
                    state.selected
                } else {
                    state.selected + 1
                };
                DogsScreenState { selected, ..state }
            }
            DogsIntent::SelectPrevious => DogsScreenState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            DogsIntent::SelectFirst => DogsScreenState {
                selected: 0,
                ..state
            },
            DogsIntent::SelectLast => {
                let selected = state.dogs.len().saturating_sub(1);
                DogsScreenState { selected, ..state }
            }
        }
    }
}
