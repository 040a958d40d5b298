//! Awesome Miner notifications and their deduplicated collection.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use super::fields::Fields;
use crate::error::Result;

/// Element of the `notificationList` array
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Notification {
    pub miner_name: String,
    pub source: String,
    pub message: String,
}

impl Notification {
    pub fn from_json(value: &Value) -> Result<Self> {
        let fields = Fields::of("Notification", value)?;
        Ok(Self {
            miner_name: fields.string("minerName")?,
            source: fields.string("source")?,
            message: fields.string("message")?,
        })
    }
}

/// Notifications with duplicates removed.
///
/// Two notifications are duplicates when miner name, source and message all
/// match. The first occurrence is kept and input order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationCollection {
    notifications: Vec<Notification>,
}

impl NotificationCollection {
    /// Build from a decoded `/api/notifications` body
    pub fn from_response(response: &Value) -> Result<Self> {
        let fields = Fields::of("NotificationResponse", response)?;
        Self::from_records(fields.array("notificationList")?)
    }

    pub fn from_records(records: &[Value]) -> Result<Self> {
        let notifications = records
            .iter()
            .map(Notification::from_json)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_notifications(notifications))
    }

    pub fn from_notifications(notifications: impl IntoIterator<Item = Notification>) -> Self {
        let mut seen: HashSet<(String, String, String)> = HashSet::new();
        let notifications = notifications
            .into_iter()
            .filter(|n| seen.insert((n.miner_name.clone(), n.source.clone(), n.message.clone())))
            .collect();
        Self { notifications }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.notifications.iter()
    }

    /// Notifications whose miner name starts with `prefix` (case-sensitive)
    pub fn filter_by_prefix(&self, prefix: &str) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| n.miner_name.starts_with(prefix))
            .collect()
    }
}
