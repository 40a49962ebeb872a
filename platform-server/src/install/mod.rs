//! Application installation
//!
//! - [`Installer`] - the ordered install pipeline
//! - [`InstallFailure`] - pipeline failures and their legacy response shapes
//! - [`logo`] - logo validation and storage

pub mod failure;
pub mod logo;
pub mod pipeline;

pub use failure::InstallFailure;
pub use pipeline::Installer;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ALL_PRIVILEGES;
    use crate::core::PresetFailurePolicy;
    use crate::db::repository::{preset, role, setting, test_support, user};
    use serde_json::json;
    use shared::install::{InstallForm, LogoUpload};
    use shared::models::{ADMINISTRATOR_ROLE, DEFAULT_PRESET_NAME, UserRole, UserStatus};
    use sqlx::SqlitePool;

    fn form() -> InstallForm {
        serde_json::from_value(json!({
            "username": "admin",
            "email": "admin@example.com",
            "password": "secret",
            "company_name": "Acme",
            "company_url": "https://acme.example.com",
            "platform_name": "Acme Rooms",
            "term_url": "https://acme.example.com/terms",
            "policy_url": "",
            "branding_colors": {
                "primary_color": "#111111",
                "secondary_color": "#222222",
                "accent_color": "#333333",
                "add_color": "#444444"
            },
            "presetsConfig": [
                { "name": "Audio", "subcategories": [{ "name": "Mute on join", "enabled": true }] }
            ]
        }))
        .unwrap()
    }

    async fn fail_on(pool: &SqlitePool, table: &str, event: &str) {
        let sql = format!(
            "CREATE TRIGGER fail_{table}_{event} BEFORE {event} ON {table} \
             BEGIN SELECT RAISE(ABORT, '{table} locked'); END"
        );
        sqlx::query(&sql).execute(pool).await.unwrap();
    }

    fn installer<'a>(
        pool: &'a SqlitePool,
        policy: PresetFailurePolicy,
        dir: &tempfile::TempDir,
    ) -> Installer<'a> {
        Installer::new(pool, policy, dir.path().join("uploads/logos"))
    }

    #[tokio::test]
    async fn test_full_install() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();

        let success = installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&form())
            .await
            .unwrap();
        assert_eq!(success.result, "success");
        assert_eq!(success.message, "Application installed !");

        let admin_role = role::find_by_name(&pool, ADMINISTRATOR_ROLE).await.unwrap().unwrap();
        assert_eq!(admin_role.permissions.len(), ALL_PRIVILEGES.len());

        let admin = user::find_by_username(&pool, "admin").await.unwrap().unwrap();
        assert_eq!(admin.role, UserRole::Admin);
        assert_eq!(admin.status, UserStatus::Active);
        assert_eq!(admin.role_id, Some(admin_role.id));

        let settings = setting::find(&pool).await.unwrap().unwrap();
        assert_eq!(settings.company_website, "https://acme.example.com");
        assert_eq!(settings.terms_use.as_deref(), Some("https://acme.example.com/terms"));
        assert!(settings.privacy_policy.is_none());
        assert_eq!(settings.additional_color, "#444444");

        let audio = preset::find_category(&pool, "Audio").await.unwrap().unwrap();
        assert!(audio.subcategories.iter().any(|s| s.name == "Mute on join" && s.enabled));

        let default = preset::find_user_preset(&pool, admin.id, DEFAULT_PRESET_NAME)
            .await
            .unwrap()
            .unwrap();
        assert!(default.settings.iter().any(|c| c.name == "Audio"));
    }

    #[tokio::test]
    async fn test_validation_runs_before_any_write() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        let mut bad = form();
        bad.account.email = "not-an-email".into();

        let failure = installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&bad)
            .await
            .unwrap_err();
        assert!(matches!(failure, InstallFailure::Validation { user: Some(_), settings: None }));
        assert_eq!(user::count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_logo_is_stored_and_referenced() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        let mut with_logo = form();
        with_logo.logo = Some(LogoUpload {
            name: "logo.png".into(),
            content: logo::tests::png_base64(),
        });

        installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&with_logo)
            .await
            .unwrap();

        let file = setting::find(&pool).await.unwrap().unwrap().logo.unwrap();
        assert!(file.ends_with(".png"));
        assert!(dir.path().join("uploads/logos").join(&file).exists());
    }

    #[tokio::test]
    async fn test_invalid_logo_stops_before_writes() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        let mut with_logo = form();
        with_logo.logo = Some(LogoUpload {
            name: "logo.bmp".into(),
            content: logo::tests::png_base64(),
        });

        let failure = installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&with_logo)
            .await
            .unwrap_err();
        assert!(matches!(failure, InstallFailure::InvalidLogo(_)));
        assert_eq!(user::count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_role_assignment_failure_aborts() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        fail_on(&pool, "role", "UPDATE").await;

        let failure = installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&form())
            .await
            .unwrap_err();
        assert!(matches!(failure, InstallFailure::RoleAssignment(_)));
        assert_eq!(failure.body(), json!({}));
        assert_eq!(user::count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_role_is_skipped() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        sqlx::query("DELETE FROM role").execute(&pool).await.unwrap();

        installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&form())
            .await
            .unwrap();
        let admin = user::find_by_username(&pool, "admin").await.unwrap().unwrap();
        assert_eq!(admin.role_id, None);
    }

    #[tokio::test]
    async fn test_settings_failure_keeps_user() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        fail_on(&pool, "setting", "UPDATE").await;

        let failure = installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&form())
            .await
            .unwrap_err();
        assert!(matches!(failure, InstallFailure::Settings(_)));
        assert!(user::find_by_username(&pool, "admin").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_settings_row_is_skipped() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        sqlx::query("DELETE FROM setting").execute(&pool).await.unwrap();

        installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&form())
            .await
            .unwrap();
        assert!(setting::find(&pool).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_preset_failure_continue_still_assigns_default() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        fail_on(&pool, "preset_setting", "UPDATE").await;

        let failure = installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&form())
            .await
            .unwrap_err();
        assert!(matches!(failure, InstallFailure::Presets(_)));

        let admin = user::find_by_username(&pool, "admin").await.unwrap().unwrap();
        assert!(
            preset::find_user_preset(&pool, admin.id, DEFAULT_PRESET_NAME)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_preset_failure_halt_skips_default() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        fail_on(&pool, "preset_setting", "UPDATE").await;

        let failure = installer(&pool, PresetFailurePolicy::Halt, &dir)
            .run(&form())
            .await
            .unwrap_err();
        assert!(matches!(failure, InstallFailure::Presets(_)));

        let admin = user::find_by_username(&pool, "admin").await.unwrap().unwrap();
        assert!(
            preset::find_user_preset(&pool, admin.id, DEFAULT_PRESET_NAME)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_default_preset_failure() {
        let pool = test_support::pool().await;
        let dir = tempfile::tempdir().unwrap();
        fail_on(&pool, "user_preset", "INSERT").await;

        let failure = installer(&pool, PresetFailurePolicy::Continue, &dir)
            .run(&form())
            .await
            .unwrap_err();
        assert!(matches!(failure, InstallFailure::DefaultPreset(_)));
    }
}
