//! User profile model.

use avolve_core::progression::ProgressFlags;
use avolve_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// A row from the `profiles` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Profile {
    pub id: UserId,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub has_agreed_to_terms: bool,
    #[serde(default)]
    pub has_genius_id: bool,
    #[serde(default)]
    pub has_gen_tokens: bool,
    #[serde(default)]
    pub has_genie_ai: bool,
    pub created_at: Option<Timestamp>,
}

impl Profile {
    pub fn flags(&self) -> ProgressFlags {
        ProgressFlags {
            has_agreed_to_terms: self.has_agreed_to_terms,
            has_genius_id: self.has_genius_id,
            has_gen_tokens: self.has_gen_tokens,
            has_genie_ai: self.has_genie_ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use avolve_core::progression::Stage;

    use super::*;

    #[test]
    fn missing_flags_default_to_false() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "id": "5f0c7c2e-8d4b-4a57-9d0e-6f1f6b0f4c11",
            "username": "ada",
            "full_name": null,
            "avatar_url": null,
            "has_agreed_to_terms": true
        }))
        .unwrap();

        assert_eq!(profile.flags().stage(), Stage::NeedsId);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["hasAgreedToTerms"], true);
        assert_eq!(json["hasGeniusId"], false);
    }
}
