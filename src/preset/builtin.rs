use once_cell::sync::Lazy;

use super::{Preset, Source};

static BUILTINS: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            id: "all".to_string(),
            display_name: "Everything".to_string(),
            source: Source::All,
            key: None,
            icon: Some("🚀".to_string()),
            description: Some("Capture and replay all login data".to_string()),
            is_custom: false,
            created_at: None,
        },
        Preset {
            id: "token".to_string(),
            display_name: "Auth token".to_string(),
            source: Source::LocalStorage,
            key: Some("token".to_string()),
            icon: Some("🔑".to_string()),
            description: Some("Authentication token in localStorage".to_string()),
            is_custom: false,
            created_at: None,
        },
        Preset {
            id: "userInfo".to_string(),
            display_name: "User info".to_string(),
            source: Source::LocalStorage,
            key: Some("userInfo".to_string()),
            icon: Some("👤".to_string()),
            description: Some("User profile and settings data".to_string()),
            is_custom: false,
            created_at: None,
        },
        Preset {
            id: "authToken".to_string(),
            display_name: "Bearer token".to_string(),
            source: Source::Cookie,
            key: Some("authToken".to_string()),
            icon: Some("🛡️".to_string()),
            description: Some("Bearer authentication cookie".to_string()),
            is_custom: false,
            created_at: None,
        },
    ]
});

/// The immutable built-in preset list.
pub fn builtins() -> &'static [Preset] {
    &BUILTINS
}

/// Whether `id` names a built-in preset.
pub fn is_builtin(id: &str) -> bool {
    BUILTINS.iter().any(|p| p.id == id)
}
