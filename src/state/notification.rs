/// State management for notifications
#[derive(Default)]
pub struct NotificationState {
    pub current_notification: Option<(String, Option<u64>)>, // message, close_tick
}

impl NotificationState {
    pub fn set_notification(&mut self, message: impl Into<String>, ticks: Option<u64>, tick_count: u64) {
        let close_tick = ticks.map(|duration| tick_count + duration);
        self.current_notification = Some((message.into(), close_tick));
    }

    pub fn clear_notification(&mut self) {
        self.current_notification = None;
    }

    pub fn should_close_notification(&self, tick_count: u64) -> bool {
        if let Some((_, Some(close_tick))) = &self.current_notification {
            tick_count >= *close_tick
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.current_notification.as_ref().map(|(msg, _)| msg.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_notification_closes_at_deadline() {
        let mut state = NotificationState::default();
        state.set_notification("r/golang not found", Some(5), 10);
        assert!(!state.should_close_notification(14));
        assert!(state.should_close_notification(15));
    }

    #[test]
    fn sticky_notification_never_expires() {
        let mut state = NotificationState::default();
        state.set_notification("hello", None, 0);
        assert!(!state.should_close_notification(u64::MAX));
        state.clear_notification();
        assert_eq!(state.message(), None);
    }
}
