use std::io;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::{Stream, StreamExt};
use log::{debug, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::handler::{InputCommand, InputHandler};
use super::swipe::SwipeTracker;

/// Registration of the terminal input listener.
///
/// Terminal events are read on a background task and reduced to
/// [`InputCommand`]s. Dropping the handle unregisters the listener.
pub struct InputListener {
    commands: mpsc::UnboundedReceiver<InputCommand>,
    task: JoinHandle<()>,
}

impl InputListener {
    /// Listen on the process terminal. Must be called inside a tokio runtime.
    pub fn spawn() -> Self {
        Self::from_stream(EventStream::new())
    }

    /// Listen on an arbitrary event source
    pub fn from_stream<St>(events: St) -> Self
    where
        St: Stream<Item = io::Result<Event>> + Unpin + Send + 'static,
    {
        let (tx, commands) = mpsc::unbounded_channel();
        let task = tokio::spawn(forward_events(events, tx));
        debug!("input listener registered");
        Self { commands, task }
    }

    /// Next command, or `None` once the event source is exhausted
    pub async fn recv(&mut self) -> Option<InputCommand> {
        self.commands.recv().await
    }
}

impl Drop for InputListener {
    fn drop(&mut self) {
        self.task.abort();
        debug!("input listener released");
    }
}

async fn forward_events<St>(mut events: St, tx: mpsc::UnboundedSender<InputCommand>)
where
    St: Stream<Item = io::Result<Event>> + Unpin,
{
    let keys = InputHandler::new();
    let mut swipes = SwipeTracker::new();

    while let Some(event) = events.next().await {
        let command = match event {
            // Only process key press events, not release
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => keys.handle_key_event(key),
            Ok(Event::Mouse(mouse)) => swipes
                .handle_mouse_event(mouse)
                .map_or(InputCommand::None, InputCommand::Steer),
            Ok(_) => continue,
            Err(err) => {
                warn!("terminal event stream failed: {err}");
                break;
            }
        };

        if command == InputCommand::None {
            continue;
        }
        if tx.send(command).is_err() {
            break;
        }
    }
}
