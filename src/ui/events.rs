use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Reads terminal input on a background thread.
///
/// The thread exits on shutdown, on a read error, or once the receiving
/// side is gone.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        break;
                    }

                    // Short poll timeout so the shutdown flag is checked often
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)).is_ok(),
                            Ok(Event::Resize(cols, rows)) => {
                                tx.send(AppEvent::Resize(cols, rows)).is_ok()
                            }
                            Ok(_) => true,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                false
                            }
                        },
                        Ok(false) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            false
                        }
                    };
                    if !forwarded {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
                tracing::debug!("Input thread stopped");
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
