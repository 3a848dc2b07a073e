use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

/// Onboarding questionnaire answers, written in one piece. A user either has a
/// full profile or none at all.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub gender: String,
    pub sport_type: String,
    pub training_frequency: String,
    pub diet_goal: String,
    #[serde(with = "time::serde::rfc3339")]
    pub completed_at: OffsetDateTime,
}

/// Profile fields as submitted; the store stamps `completed_at` itself.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub name: String,
    pub gender: String,
    pub sport_type: String,
    pub training_frequency: String,
    pub diet_goal: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

#[derive(Default)]
struct Inner {
    by_id: HashMap<String, User>,
    id_by_email: HashMap<String, String>,
}

/// In-memory account registry. One lock covers both maps so lookups and the
/// insert that follows them stay atomic under a multi-threaded runtime.
#[derive(Default)]
pub struct UserStore {
    inner: Mutex<Inner>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new record. Callers validate first; no duplicate check happens
    /// here. On a repeated email the index keeps pointing at the earliest record.
    pub fn create(&self, email: &str, password: &str) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_owned(),
            password: password.to_owned(),
            created_at: OffsetDateTime::now_utc(),
            profile: None,
        };

        let mut inner = self.inner.lock();
        inner
            .id_by_email
            .entry(user.email.clone())
            .or_insert_with(|| user.id.clone());
        inner.by_id.insert(user.id.clone(), user.clone());
        user
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.lock();
        inner
            .id_by_email
            .get(email)
            .and_then(|id| inner.by_id.get(id))
            .cloned()
    }

    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.inner.lock().by_id.get(id).cloned()
    }

    /// Replaces the profile wholesale and stamps a fresh `completed_at`.
    /// Returns `None` when the id resolves to nothing.
    pub fn update_profile(&self, id: &str, profile: NewProfile) -> Option<User> {
        let mut inner = self.inner.lock();
        let user = inner.by_id.get_mut(id)?;
        user.profile = Some(Profile {
            name: profile.name,
            gender: profile.gender,
            sport_type: profile.sport_type,
            training_frequency: profile.training_frequency,
            diet_goal: profile.diet_goal,
            completed_at: OffsetDateTime::now_utc(),
        });
        Some(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> NewProfile {
        NewProfile {
            name: "A".into(),
            gender: "F".into(),
            sport_type: "Rowing".into(),
            training_frequency: "Daily".into(),
            diet_goal: "Cutting".into(),
        }
    }

    #[test]
    fn create_assigns_unique_ids_and_no_profile() {
        let store = UserStore::new();
        let a = store.create("a@college.harvard.edu", "pass1234");
        let b = store.create("b@college.harvard.edu", "pass1234");

        assert_ne!(a.id, b.id);
        assert!(a.profile.is_none());
        assert_eq!(a.email, "a@college.harvard.edu");
    }

    #[test]
    fn find_by_email_is_case_sensitive() {
        let store = UserStore::new();
        store.create("Someone@college.harvard.edu", "pw");

        assert!(store.find_by_email("Someone@college.harvard.edu").is_some());
        assert!(store.find_by_email("someone@college.harvard.edu").is_none());
    }

    #[test]
    fn find_by_id_unknown_returns_none() {
        let store = UserStore::new();
        assert!(store.find_by_id("no-such-id").is_none());
    }

    #[test]
    fn find_by_email_returns_first_record_on_duplicate() {
        let store = UserStore::new();
        let first = store.create("dup@college.harvard.edu", "one");
        let second = store.create("dup@college.harvard.edu", "two");

        let found = store.find_by_email("dup@college.harvard.edu").unwrap();
        assert_eq!(found.id, first.id);
        // the second record still exists under its own id
        assert_eq!(store.find_by_id(&second.id).unwrap().password, "two");
    }

    #[test]
    fn update_profile_unknown_id_returns_none() {
        let store = UserStore::new();
        assert!(store.update_profile("missing", sample_profile()).is_none());
    }

    #[test]
    fn update_profile_sets_all_fields_and_timestamp() {
        let store = UserStore::new();
        let user = store.create("a@college.harvard.edu", "pw");

        let updated = store.update_profile(&user.id, sample_profile()).unwrap();
        let profile = updated.profile.expect("profile set");
        assert_eq!(profile.name, "A");
        assert_eq!(profile.sport_type, "Rowing");
        assert_eq!(profile.diet_goal, "Cutting");
        assert!(profile.completed_at >= user.created_at);
    }

    #[test]
    fn update_profile_overwrites_wholesale() {
        let store = UserStore::new();
        let user = store.create("a@college.harvard.edu", "pw");
        store.update_profile(&user.id, sample_profile()).unwrap();

        let mut again = sample_profile();
        again.diet_goal = "Bulking".into();
        let updated = store.update_profile(&user.id, again).unwrap();

        let profile = updated.profile.unwrap();
        assert_eq!(profile.diet_goal, "Bulking");
        assert_eq!(profile.name, "A");
    }

    #[test]
    fn password_never_serializes() {
        let store = UserStore::new();
        let user = store.create("a@college.harvard.edu", "hunter2");

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
