use std::sync::Arc;

use crate::users::repo::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            users: Arc::new(UserStore::new()),
        }
    }
}
