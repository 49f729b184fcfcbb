use crate::api::Dog;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DogsIntent {
    /// The view model published a new list.
    DogsUpdated { dogs: Vec<Dog> },
    /// The view model published a new loading flag.
    LoadingChanged { loading: Option<bool> },
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
}

impl Intent for DogsIntent {}
