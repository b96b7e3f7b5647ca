// ============================================================================
// PROFILE SERVICE - Account "saves" (logged only)
// ============================================================================

use serde::Serialize;

use crate::models::{NotificationPreferences, UserProfile};

fn log_submission<T: Serialize>(what: &str, payload: &T) {
    match serde_json::to_string(payload) {
        Ok(json) => log::info!("💾 {} saved: {}", what, json),
        Err(e) => log::error!("❌ Could not serialize {}: {}", what, e),
    }
}

/// Trims the edited fields and logs the result
pub fn save_profile(profile: &UserProfile) -> UserProfile {
    let saved = UserProfile {
        name: profile.name.trim().to_string(),
        email: profile.email.trim().to_string(),
        phone: profile.phone.trim().to_string(),
        avatar_url: profile.avatar_url.clone(),
    };
    log_submission("Profile", &saved);
    saved
}

pub fn save_notification_preferences(preferences: &NotificationPreferences) {
    log_submission("Notification preferences", preferences);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_profile_trims() {
        let profile = UserProfile {
            name: "  Alex Johnson ".into(),
            email: "alex@example.com\n".into(),
            phone: " 555-0101".into(),
            avatar_url: "https://example.com/a.png".into(),
        };
        let saved = save_profile(&profile);
        assert_eq!(saved.name, "Alex Johnson");
        assert_eq!(saved.email, "alex@example.com");
        assert_eq!(saved.phone, "555-0101");
        assert_eq!(saved.avatar_url, profile.avatar_url);
    }
}
