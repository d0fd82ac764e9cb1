//! Session-level state: quit/suspend flags and the transient status message
//! shown in the status bar.

/// Messages that can be sent to update the system state
pub enum Message {
    QuitRequested,
    SuspendRequested,
    Resumed,
    StatusMessageSet(String),
    StatusMessageCleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::QuitRequested => {
                self.should_quit = true;
            }
            Message::SuspendRequested => {
                self.should_suspend = true;
            }
            Message::Resumed => {
                self.should_suspend = false;
            }
            Message::StatusMessageSet(message) => {
                self.status_message = Some(message);
            }
            Message::StatusMessageCleared => {
                self.status_message = None;
            }
        }
    }
}
