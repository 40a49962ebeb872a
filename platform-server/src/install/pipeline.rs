//! Install pipeline
//!
//! Ordered, fallible steps that stop at the first failure. Writes are not
//! wrapped in a transaction: a later failure leaves earlier writes in place.
//! The preset step is the one exception to short-circuiting, see
//! [`PresetFailurePolicy`].

use std::path::PathBuf;

use shared::install::{InstallForm, InstallSuccess};
use shared::models::{
    ADMINISTRATOR_ROLE, DEFAULT_PRESET_NAME, PresetCategory, Role, SettingUpdate, User, UserCreate,
    UserRole, UserStatus,
};
use sqlx::SqlitePool;

use super::failure::InstallFailure;
use super::logo::{ValidatedLogo, store_logo, validate_logo};
use crate::auth::all_privileges;
use crate::core::PresetFailurePolicy;
use crate::db::repository::{preset, role, setting, user};

pub struct Installer<'a> {
    pool: &'a SqlitePool,
    policy: PresetFailurePolicy,
    logo_dir: PathBuf,
}

impl<'a> Installer<'a> {
    pub fn new(pool: &'a SqlitePool, policy: PresetFailurePolicy, logo_dir: PathBuf) -> Self {
        Self {
            pool,
            policy,
            logo_dir,
        }
    }

    pub async fn run(&self, form: &InstallForm) -> Result<InstallSuccess, InstallFailure> {
        Self::validate(form)?;
        let logo = Self::check_logo(form)?;

        let admin_role = self.assign_role_privileges().await?;
        let admin = self.create_admin(form, admin_role.as_ref()).await?;
        self.save_settings(form, logo.as_ref()).await?;

        // Under `Continue` a preset failure is remembered, not returned
        let preset_failure = match self.save_presets(form.presets_config.as_deref()).await {
            Ok(()) => None,
            Err(failure) if self.policy == PresetFailurePolicy::Continue => {
                tracing::warn!(policy = %self.policy, "Continuing install after preset failure");
                Some(failure)
            }
            Err(failure) => return Err(failure),
        };

        let default_preset = self.assign_default_preset(&admin).await;

        if let Some(failure) = preset_failure {
            return Err(failure);
        }
        default_preset?;

        tracing::info!(user_id = admin.id, username = %admin.username, "Application installed");
        Ok(InstallSuccess::new())
    }

    fn validate(form: &InstallForm) -> Result<(), InstallFailure> {
        let (user_errors, settings_errors) = form.validate_groups();
        if user_errors.is_none() && settings_errors.is_none() {
            return Ok(());
        }
        tracing::error!(
            user_errors = ?user_errors,
            settings_errors = ?settings_errors,
            "Install form validation failed"
        );
        Err(InstallFailure::Validation {
            user: user_errors,
            settings: settings_errors,
        })
    }

    fn check_logo(form: &InstallForm) -> Result<Option<ValidatedLogo>, InstallFailure> {
        let Some(upload) = &form.logo else {
            return Ok(None);
        };
        match validate_logo(upload) {
            Ok(logo) => {
                tracing::debug!(name = %upload.name, size = logo.data.len(), "Logo accepted");
                Ok(Some(logo))
            }
            Err(e) => {
                tracing::error!(name = %upload.name, error = %e, "Logo rejected");
                Err(e.into())
            }
        }
    }

    /// Grant every system privilege to the administrator role
    ///
    /// A missing role is not fatal; a failed update aborts the install.
    async fn assign_role_privileges(&self) -> Result<Option<Role>, InstallFailure> {
        let found = role::find_by_name(self.pool, ADMINISTRATOR_ROLE)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to load administrator role");
                InstallFailure::RoleAssignment(e.to_string())
            })?;

        let Some(admin_role) = found else {
            tracing::warn!(role = ADMINISTRATOR_ROLE, "Administrator role not found, skipping privilege assignment");
            return Ok(None);
        };

        let updated = role::set_permissions(self.pool, admin_role.id, &all_privileges())
            .await
            .map_err(|e| {
                tracing::error!(role_id = admin_role.id, error = %e, "Failed to assign privileges to administrator role");
                InstallFailure::RoleAssignment(e.to_string())
            })?;

        tracing::info!(
            role_id = updated.id,
            privileges = updated.permissions.len(),
            "Administrator role privileges assigned"
        );
        Ok(Some(updated))
    }

    async fn create_admin(&self, form: &InstallForm, admin_role: Option<&Role>) -> Result<User, InstallFailure> {
        let data = UserCreate {
            username: form.account.username.clone(),
            email: form.account.email.clone(),
            password: form.account.password.clone(),
            role: UserRole::Admin,
            role_id: admin_role.map(|r| r.id),
            status: UserStatus::Active,
        };

        match user::create(self.pool, data).await {
            Ok(admin) => {
                tracing::info!(user_id = admin.id, username = %admin.username, email = %admin.email, "Administrator created");
                Ok(admin)
            }
            Err(e) => {
                tracing::error!(error = %e, "administrator could not be added");
                Err(InstallFailure::User(e.to_string()))
            }
        }
    }

    /// Populate the settings singleton; skipped when the row is absent
    async fn save_settings(&self, form: &InstallForm, logo: Option<&ValidatedLogo>) -> Result<(), InstallFailure> {
        let existing = setting::find(self.pool).await.map_err(|e| {
            tracing::error!(error = %e, "settings could not be added");
            InstallFailure::Settings(e.to_string())
        })?;
        if existing.is_none() {
            tracing::warn!("Settings row not found, skipping settings step");
            return Ok(());
        }

        let logo_file = match logo {
            Some(logo) => Some(store_logo(&self.logo_dir, logo).map_err(|e| {
                tracing::error!(dir = %self.logo_dir.display(), error = %e, "Failed to store logo");
                InstallFailure::Settings(e.to_string())
            })?),
            None => None,
        };

        let colors = &form.branding_colors;
        let update = SettingUpdate {
            company_name: Some(form.platform.company_name.clone()),
            company_website: Some(form.platform.company_url.clone()),
            platform_name: Some(form.platform.platform_name.clone()),
            terms_use: form.terms_url().map(str::to_string),
            privacy_policy: form.privacy_url().map(str::to_string),
            logo: logo_file,
            primary_color: color(&colors.primary_color),
            secondary_color: color(&colors.secondary_color),
            accent_color: color(&colors.accent_color),
            additional_color: color(&colors.add_color),
        };

        match setting::update(self.pool, update).await {
            Ok(saved) => {
                tracing::info!(
                    company_name = %saved.company_name,
                    platform_name = %saved.platform_name,
                    logo = ?saved.logo,
                    "Settings saved"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "settings could not be added");
                Err(InstallFailure::Settings(e.to_string()))
            }
        }
    }

    /// Persist every submitted subcategory flag, stopping at the first error
    async fn save_presets(&self, presets: Option<&[PresetCategory]>) -> Result<(), InstallFailure> {
        let Some(presets) = presets else {
            return Ok(());
        };

        let mut saved = 0usize;
        for category in presets {
            for sub in &category.subcategories {
                if let Err(e) = preset::upsert_flag(self.pool, &category.name, &sub.name, sub.enabled).await {
                    tracing::error!(
                        category = %category.name,
                        subcategory = %sub.name,
                        error = %e,
                        "preset settings could not be added"
                    );
                    return Err(InstallFailure::Presets(e.to_string()));
                }
                saved += 1;
            }
        }
        tracing::info!(categories = presets.len(), flags = saved, "Preset settings saved");
        Ok(())
    }

    /// Store a snapshot of the preset catalogue as the admin's default preset
    async fn assign_default_preset(&self, admin: &User) -> Result<(), InstallFailure> {
        let result = async {
            let snapshot = preset::find_all(self.pool).await?;
            preset::save_user_preset(self.pool, admin.id, DEFAULT_PRESET_NAME, &snapshot).await
        }
        .await;

        match result {
            Ok(saved) => {
                tracing::info!(user_id = admin.id, preset_id = saved.id, "Default preset assigned");
                Ok(())
            }
            Err(e) => {
                tracing::error!(user_id = admin.id, error = %e, "default preset could not be assigned");
                Err(InstallFailure::DefaultPreset(e.to_string()))
            }
        }
    }
}

/// Empty colors keep the stored default
fn color(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
