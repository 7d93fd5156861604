mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, FRAME_INTERVAL, MESSAGE_CHECK_INTERVAL, SIGNAL_POLL_INTERVAL};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::PollSystemSignals),
            time::every(Duration::from_millis(app.config.poll_interval_ms.max(100)))
                .map(|_| Message::PollStore),
        ];

        // Frames only while something moves; the editor message check runs
        // at a slower rate.
        if app.is_animating() {
            subscriptions.push(time::every(FRAME_INTERVAL).map(Message::Tick));
        } else if app.flash_pending() {
            subscriptions.push(time::every(MESSAGE_CHECK_INTERVAL).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
