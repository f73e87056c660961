//! Domain types mirroring the event service's wire format (camelCase JSON).

use serde::{Deserialize, Serialize};

/// Account role. The server historically issued `USER` for participants;
/// the alias keeps those tokens and records readable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    #[serde(alias = "USER")]
    Participant,
    Organizer,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO-8601 timestamp, as the server sends it.
    pub date: String,
    pub location: String,
    pub max_attendees: u32,
    pub attendees_count: u32,
    pub organizer_id: String,
    /// Present on `/api/events/attending` responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_in: Option<bool>,
}

impl Event {
    /// An event with capacity 0 is treated as uncapped, never sold out.
    pub fn is_full(&self) -> bool {
        self.max_attendees > 0 && self.attendees_count >= self.max_attendees
    }

    pub fn is_owned_by(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.id == self.organizer_id)
    }
}

/// Payload for `POST /api/events`: the event minus server-assigned fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub max_attendees: u32,
}

/// Partial update payload for `PUT /api/events/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
}

impl From<EventDraft> for EventPatch {
    fn from(draft: EventDraft) -> Self {
        Self {
            title: Some(draft.title),
            description: Some(draft.description),
            date: Some(draft.date),
            location: Some(draft.location),
            max_attendees: Some(draft.max_attendees),
        }
    }
}

/// One attendee record from `GET /api/events/{id}/subscriptions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub checked_in: bool,
    pub subscription_date: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(max: u32, count: u32) -> Event {
        Event {
            id: "e1".into(),
            title: "Tech Meetup".into(),
            description: "An introductory meetup".into(),
            date: "2031-01-01T18:00:00Z".into(),
            location: "Room A".into(),
            max_attendees: max,
            attendees_count: count,
            organizer_id: "u1".into(),
            checked_in: None,
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            role: Role::Participant,
        }
    }

    #[test]
    fn test_is_full() {
        assert!(!event(2, 1).is_full());
        assert!(event(2, 2).is_full());
        assert!(event(1, 3).is_full());
        // capacity 0 is never full
        assert!(!event(0, 100).is_full());
    }

    #[test]
    fn test_is_owned_by() {
        let e = event(5, 0);
        assert!(e.is_owned_by(Some(&user("u1"))));
        assert!(!e.is_owned_by(Some(&user("u2"))));
        assert!(!e.is_owned_by(None));
    }

    #[test]
    fn test_role_accepts_legacy_user_value() {
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::Participant);
        let role: Role = serde_json::from_str("\"ORGANIZER\"").unwrap();
        assert_eq!(role, Role::Organizer);
        assert_eq!(serde_json::to_string(&Role::Participant).unwrap(), "\"PARTICIPANT\"");
    }

    #[test]
    fn test_event_wire_names() {
        let json = serde_json::json!({
            "id": "e1",
            "title": "Tech Meetup",
            "description": "An introductory meetup",
            "date": "2031-01-01T18:00:00Z",
            "location": "Room A",
            "maxAttendees": 1,
            "attendeesCount": 0,
            "organizerId": "u1"
        });
        let e: Event = serde_json::from_value(json).unwrap();
        assert_eq!(e.max_attendees, 1);
        assert_eq!(e.checked_in, None);
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = EventPatch {
            title: Some("New title".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            "{\"title\":\"New title\"}"
        );
    }
}
