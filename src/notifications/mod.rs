//! Notification sink: every `NotificationEvent`, in order, into a log the
//! presentation layer can read.

use bevy::prelude::*;

use crate::shared::*;

#[derive(Resource, Debug, Clone, Default)]
pub struct NotificationLog {
    pub messages: Vec<String>,
}

impl NotificationLog {
    pub fn latest(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

pub struct NotificationsPlugin;

impl Plugin for NotificationsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NotificationLog>()
            .add_event::<NotificationEvent>()
            .add_systems(Update, record_notifications.in_set(FieldhandSet::Notifications));
    }
}

fn record_notifications(
    mut events: EventReader<NotificationEvent>,
    mut log: ResMut<NotificationLog>,
) {
    for ev in events.read() {
        info!("[Notify] {}", ev.message);
        log.messages.push(ev.message.clone());
    }
}
