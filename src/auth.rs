//! Who is signed in, as far as the UI needs to know.

use crate::config::AppConfig;

pub trait AuthProvider: Send + Sync {
    /// The signed-in user, or `None` for anonymous visitors.
    fn current_user(&self) -> Option<String>;

    fn is_signed_in(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Treats the `[admin] user` configured for this install as signed in.
#[derive(Debug, Clone, Default)]
pub struct ConfigAuth {
    user: Option<String>,
}

impl ConfigAuth {
    pub fn new(user: Option<String>) -> Self {
        let user = user
            .map(|user| user.trim().to_string())
            .filter(|user| !user.is_empty());
        Self { user }
    }
}

impl From<&AppConfig> for ConfigAuth {
    fn from(config: &AppConfig) -> Self {
        ConfigAuth::new(config.admin_user.clone())
    }
}

impl AuthProvider for ConfigAuth {
    fn current_user(&self) -> Option<String> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_user_is_signed_in() {
        let mut config = AppConfig::default();
        assert!(!ConfigAuth::from(&config).is_signed_in());

        config.admin_user = Some(" owner ".to_string());
        let auth = ConfigAuth::from(&config);
        assert_eq!(auth.current_user().as_deref(), Some("owner"));
    }

    #[test]
    fn blank_user_counts_as_anonymous() {
        assert!(!ConfigAuth::new(Some("   ".to_string())).is_signed_in());
    }
}
