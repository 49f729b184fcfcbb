use crate::api::Dog;
use crate::presentation::{DogsListPresenter, DogsListView, DogsListViewModel, ReloadClicks};
use crate::ui::dogs::{DogsIntent, DogsReducer, DogsScreenState};
use crate::ui::mvi::Reducer;
use tokio::sync::watch;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal view of the dogs list.
///
/// Owns the view model for the whole UI session; the presenter-facing
/// view binding is created on attach and dropped on detach.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    screen: DogsScreenState,
    view_model: DogsListViewModel,
    dogs_rx: watch::Receiver<Vec<Dog>>,
    loading_rx: watch::Receiver<Option<bool>>,
    reload_clicks: Option<ReloadClicks>,
}

impl App {
    pub fn new(view_model: DogsListViewModel) -> Self {
        let dogs_rx = view_model.dogs();
        let loading_rx = view_model.is_loading();
        let mut app = Self {
            should_quit: false,
            size: None,
            screen: DogsScreenState::default(),
            view_model,
            dogs_rx,
            loading_rx,
            reload_clicks: None,
        };
        let dogs = app.dogs_rx.borrow_and_update().clone();
        let loading = *app.loading_rx.borrow_and_update();
        dispatch_mvi!(app, screen, DogsReducer, DogsIntent::DogsUpdated { dogs });
        dispatch_mvi!(app, screen, DogsReducer, DogsIntent::LoadingChanged { loading });
        app
    }

    /// Bind a fresh view to the presenter.
    pub fn attach(&mut self, presenter: &DogsListPresenter) {
        let (view, clicks) = DogsListView::new(self.view_model.clone());
        presenter.attach_view(view);
        self.reload_clicks = Some(clicks);
    }

    pub fn detach(&mut self, presenter: &DogsListPresenter) {
        presenter.detach_view();
        self.reload_clicks = None;
    }

    /// Pull pending view model changes into the screen state.
    ///
    /// Returns true when anything changed.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        if self.dogs_rx.has_changed().unwrap_or(false) {
            let dogs = self.dogs_rx.borrow_and_update().clone();
            dispatch_mvi!(self, screen, DogsReducer, DogsIntent::DogsUpdated { dogs });
            changed = true;
        }
        if self.loading_rx.has_changed().unwrap_or(false) {
            let loading = *self.loading_rx.borrow_and_update();
            dispatch_mvi!(self, screen, DogsReducer, DogsIntent::LoadingChanged { loading });
            changed = true;
        }
        changed
    }

    pub fn screen(&self) -> &DogsScreenState {
        &self.screen
    }

    pub fn dispatch(&mut self, intent: DogsIntent) {
        dispatch_mvi!(self, screen, DogsReducer, intent);
    }

    pub fn request_reload(&self) {
        match &self.reload_clicks {
            Some(clicks) => {
                if !clicks.click() {
                    tracing::warn!("Reload click dropped: presenter no longer listening");
                }
            }
            None => tracing::debug!("Reload click ignored: no view attached"),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Record a new terminal size. Returns true if it differs from the last one.
    pub fn on_resize(&mut self, cols: u16, rows: u16) -> bool {
        let changed = self.size != Some((cols, rows));
        self.size = Some((cols, rows));
        changed
    }
}
