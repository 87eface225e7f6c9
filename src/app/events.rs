//! Event processing from the message source

use super::SupportChatApp;

impl SupportChatApp {
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.state.apply_event(event);
        }
    }
}
