use crate::config::UiConfig;
use crate::presentation::{DogsListPresenter, DogsListViewModel};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the dogs list until the user quits or shutdown is signaled.
///
/// Must be called from a thread that has entered the tokio runtime the
/// presenter lives on. The view model lives exactly as long as this
/// session; a terminal resize re-binds the view the way a configuration
/// change would, and the presenter's cache makes that instant.
pub fn run(
    config: &UiConfig,
    presenter: &DogsListPresenter,
    shutdown: ShutdownHandle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone())?;

    let mut app = App::new(DogsListViewModel::new());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.attach(presenter);

    let mut dirty = true;
    loop {
        dirty |= app.sync();
        if dirty {
            terminal.draw(|frame| draw(frame, &app))?;
            dirty = false;
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                dirty = true;
            }
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => {
                if app.on_resize(cols, rows) {
                    app.detach(presenter);
                    app.attach(presenter);
                }
                dirty = true;
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.detach(presenter);
    drop(guard);
    Ok(())
}
