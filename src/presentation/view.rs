use tokio::sync::mpsc;

use crate::presentation::view_model::DogsListViewModel;

/// A user request to load a fresh batch of dogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadClick;

/// Sending half of a view's reload stream, held by the input layer.
#[derive(Clone)]
pub struct ReloadClicks {
    tx: mpsc::UnboundedSender<ReloadClick>,
}

impl ReloadClicks {
    /// Emit a reload click. Returns false once the presenter side is gone.
    pub fn click(&self) -> bool {
        self.tx.send(ReloadClick).is_ok()
    }
}

/// What a presenter needs from an attached view.
pub struct DogsListView {
    pub view_model: DogsListViewModel,
    pub reload_clicks: mpsc::UnboundedReceiver<ReloadClick>,
}

impl DogsListView {
    /// Create a view bound to `view_model`, plus the handle that feeds
    /// its reload stream.
    pub fn new(view_model: DogsListViewModel) -> (Self, ReloadClicks) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                view_model,
                reload_clicks: rx,
            },
            ReloadClicks { tx },
        )
    }
}
