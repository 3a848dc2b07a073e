use serde::{Deserialize, Serialize};

use crate::users::PublicUser;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompleteOnboardingRequest {
    pub user_id: String,
    pub name: String,
    pub gender: String,
    pub sport_type: String,
    pub training_frequency: String,
    pub diet_goal: String,
}

impl CompleteOnboardingRequest {
    pub fn has_all_fields(&self) -> bool {
        !(self.user_id.is_empty()
            || self.name.is_empty()
            || self.gender.is_empty()
            || self.sport_type.is_empty()
            || self.training_frequency.is_empty()
            || self.diet_goal.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub success: bool,
    pub message: &'static str,
    pub user: PublicUser,
}
