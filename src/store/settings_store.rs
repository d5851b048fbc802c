use std::sync::RwLock;

use secrecy::{ExposeSecret, Secret};

use crate::domain::admin_profile::AdminProfile;
use crate::domain::processor::ProcessorAccount;
use crate::domain::theme::Theme;

#[derive(thiserror::Error, Debug)]
pub enum SettingsStoreError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// The settings screen's state: profile, theme, account password and the
/// payment processor link. Independent of the auth gate's configured
/// credential pair, like every other screen's state is independent.
pub struct SettingsStore {
    inner: RwLock<Inner>,
}

struct Inner {
    profile: AdminProfile,
    theme: Theme,
    password: Secret<String>,
    processor: Option<ProcessorAccount>,
}

impl SettingsStore {
    pub fn seeded() -> SettingsStore {
        SettingsStore {
            inner: RwLock::new(Inner {
                profile: AdminProfile {
                    username: String::from("AdminUser"),
                    email: String::from("admin@example.com"),
                    billing_email: String::from("billing@example.com"),
                },
                theme: Theme::Light,
                password: Secret::new(String::from("password")),
                processor: None,
            }),
        }
    }

    pub fn profile(&self) -> AdminProfile {
        self.read().profile.clone()
    }

    pub fn update_profile(&self, profile: AdminProfile) -> AdminProfile {
        let mut inner = self.write();
        inner.profile = profile;
        inner.profile.clone()
    }

    /// The form only checks that the new password and its confirmation
    /// agree before replacing the stored one.
    pub fn change_password(
        &self,
        new_password: Secret<String>,
        confirm_password: Secret<String>,
    ) -> Result<(), SettingsStoreError> {
        if new_password.expose_secret() != confirm_password.expose_secret() {
            return Err(SettingsStoreError::PasswordMismatch);
        }

        self.write().password = new_password;

        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.read().theme
    }

    pub fn set_theme(&self, theme: Theme) -> Theme {
        self.write().theme = theme;
        theme
    }

    pub fn processor(&self) -> Option<ProcessorAccount> {
        self.read().processor.clone()
    }

    /// Links the canned processor account; there is no real integration.
    pub fn connect_processor(&self) -> ProcessorAccount {
        let account = ProcessorAccount {
            account_id: String::from("acct_123456789"),
            email: String::from("admin@stripe.com"),
        };

        self.write().processor = Some(account.clone());

        account
    }

    pub fn disconnect_processor(&self) {
        self.write().processor = None;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("Settings store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("Settings store lock poisoned")
    }
}
