use weather_core::{FetchState, Notification, NotificationKind, Notifier};

/// Prints notifications and progress to stderr so stdout only carries the report.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", format_notification(notification));
    }

    fn state_changed(&self, state: &FetchState) {
        if matches!(state, FetchState::Loading) {
            eprintln!("Loading weather data...");
        }
    }
}

pub fn format_notification(notification: &Notification) -> String {
    let mark = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✖",
    };
    format!("{mark} {}", notification.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_by_kind() {
        assert_eq!(format_notification(&Notification::success("ok")), "✔ ok");
        assert_eq!(
            format_notification(&Notification::error("Please enter a city name")),
            "✖ Please enter a city name"
        );
    }
}
