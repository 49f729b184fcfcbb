use crate::api::Dog;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DogsScreenState {
    pub dogs: Vec<Dog>,
    /// `None` until the presenter first reports.
    pub loading: Option<bool>,
    /// Index of the highlighted row; always within `dogs` when non-empty.
    pub selected: usize,
}

impl UiState for DogsScreenState {}

impl DogsScreenState {
    pub fn is_loading(&self) -> bool {
        self.loading == Some(true)
    }

    pub fn selected_dog(&self) -> Option<&Dog> {
        self.dogs.get(self.selected)
    }
}
