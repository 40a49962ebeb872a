// platform-server/tests/install_api.rs
// POST /api/install through the full router

mod common;

use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::test_app;
use http::{Method, StatusCode};
use platform_server::PresetFailurePolicy;
use platform_server::auth::ALL_PRIVILEGES;
use platform_server::db::repository::{preset, role, setting, user};
use serde_json::{Value, json};
use shared::models::{ADMINISTRATOR_ROLE, DEFAULT_PRESET_NAME, UserRole, UserStatus};

fn install_body() -> Value {
    json!({
        "data": {
            "username": "admin",
            "email": "admin@example.com",
            "password": "secret",
            "company_name": "Acme",
            "company_url": "https://acme.example.com",
            "platform_name": "Acme Rooms",
            "term_url": "",
            "policy_url": "https://acme.example.com/privacy",
            "branding_colors": {
                "primary_color": "#0a0a0a",
                "secondary_color": "#1b1b1b",
                "accent_color": "#2c2c2c",
                "add_color": "#3d3d3d"
            },
            "presetsConfig": [
                {
                    "name": "Recording",
                    "subcategories": [
                        { "id": 10, "name": "Auto start recording", "status": true }
                    ]
                }
            ]
        }
    })
}

fn png_base64() -> String {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 120, 200]));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    STANDARD.encode(buf)
}

/// PNG of pseudo-random pixels, which barely compresses (about 3 bytes per pixel)
fn noisy_png(side: u32) -> Vec<u8> {
    let mut state: u32 = 0x9E37_79B9;
    let img = image::RgbImage::from_fn(side, side, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_le_bytes();
        image::Rgb([r, g, b])
    });
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[tokio::test]
async fn test_missing_fields_in_both_groups() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let (status, body) = app
        .request(Method::POST, "/api/install", Some(json!({ "data": { "username": "admin" } })))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["userErrors"]["email"].is_array());
    assert!(body["userErrors"]["password"].is_array());
    assert!(body["userErrors"].get("username").is_none());
    assert!(body["settingsErrors"]["company_name"].is_array());
    assert!(body["settingsErrors"]["company_url"].is_array());
    assert!(body["settingsErrors"]["platform_name"].is_array());
}

#[tokio::test]
async fn test_invalid_company_url_only_reports_settings() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let mut body = install_body();
    body["data"]["company_url"] = json!("acme dot com");

    let (status, body) = app.request(Method::POST, "/api/install", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.get("userErrors").is_none());
    assert_eq!(body["settingsErrors"]["company_url"][0], "company_url must be a valid URL");
    assert_eq!(user::count(&app.state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_successful_install() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let (status, body) = app.request(Method::POST, "/api/install", Some(install_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": "success", "message": "Application installed !" }));

    let pool = &app.state.pool;
    let admin = user::find_by_username(pool, "admin").await.unwrap().unwrap();
    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(admin.status, UserStatus::Active);

    let admin_role = role::find_by_name(pool, ADMINISTRATOR_ROLE).await.unwrap().unwrap();
    assert_eq!(admin.role_id, Some(admin_role.id));
    for privilege in ALL_PRIVILEGES {
        assert!(admin_role.has_permission(privilege));
    }

    let settings = setting::find(pool).await.unwrap().unwrap();
    assert_eq!(settings.company_name, "Acme");
    assert!(settings.terms_use.is_none());
    assert_eq!(settings.privacy_policy.as_deref(), Some("https://acme.example.com/privacy"));
    assert_eq!(settings.primary_color, "#0a0a0a");

    let recording = preset::find_category(pool, "Recording").await.unwrap().unwrap();
    assert!(recording.subcategories.iter().any(|s| s.name == "Auto start recording" && s.enabled));

    assert!(
        preset::find_user_preset(pool, admin.id, DEFAULT_PRESET_NAME)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_settings_failure_leaves_user_in_place() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    app.fail_on("setting", "UPDATE").await;

    let (status, body) = app.request(Method::POST, "/api/install", Some(install_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "settingsErrors": "settings could not be added" }));
    assert!(user::find_by_username(&app.state.pool, "admin").await.unwrap().is_some());
}

#[tokio::test]
async fn test_user_failure_leaves_settings_untouched() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    sqlx::query(
        "INSERT INTO user (username, email, password_hash, role, status, created_at) \
         VALUES ('someone', 'admin@example.com', 'x', 'member', 'active', 0)",
    )
    .execute(&app.state.pool)
    .await
    .unwrap();

    let (status, body) = app.request(Method::POST, "/api/install", Some(install_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "userErrors": "administrator could not be added" }));

    let settings = setting::find(&app.state.pool).await.unwrap().unwrap();
    assert_eq!(settings.company_name, "");
    assert!(settings.updated_at.is_none());
}

#[tokio::test]
async fn test_role_assignment_failure_has_empty_body() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    app.fail_on("role", "UPDATE").await;

    let (status, body) = app.request(Method::POST, "/api/install", Some(install_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_invalid_logo_is_rejected() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let mut body = install_body();
    body["data"]["logo"] = json!({ "name": "logo.png", "content": STANDARD.encode(b"not an image") });

    let (status, body) = app.request(Method::POST, "/api/install", Some(body)).await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert!(body["errors"]["logo"].as_str().unwrap().starts_with("Invalid image file"));
    assert_eq!(user::count(&app.state.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_valid_logo_is_stored() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let mut body = install_body();
    body["data"]["logo"] = json!({ "name": "brand.png", "content": png_base64() });

    let (status, _) = app.request(Method::POST, "/api/install", Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    let logo = setting::find(&app.state.pool).await.unwrap().unwrap().logo.unwrap();
    let stored = app.work_dir.path().join("uploads").join("logos").join(&logo);
    assert!(stored.exists());
}

#[tokio::test]
async fn test_preset_failure_continue_policy() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    app.fail_on("preset_setting", "UPDATE").await;

    let (status, body) = app.request(Method::POST, "/api/install", Some(install_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "presetsErrors": "preset settings could not be added" }));

    let admin = user::find_by_username(&app.state.pool, "admin").await.unwrap().unwrap();
    let default = preset::find_user_preset(&app.state.pool, admin.id, DEFAULT_PRESET_NAME)
        .await
        .unwrap();
    assert!(default.is_some());
}

#[tokio::test]
async fn test_preset_failure_halt_policy() {
    let app = test_app(PresetFailurePolicy::Halt).await;
    app.fail_on("preset_setting", "UPDATE").await;

    let (status, body) = app.request(Method::POST, "/api/install", Some(install_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["presetsErrors"], "preset settings could not be added");

    let admin = user::find_by_username(&app.state.pool, "admin").await.unwrap().unwrap();
    let default = preset::find_user_preset(&app.state.pool, admin.id, DEFAULT_PRESET_NAME)
        .await
        .unwrap();
    assert!(default.is_none());
}

#[tokio::test]
async fn test_malformed_body() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let (status, body) = app
        .request(Method::POST, "/api/install", Some(json!({ "form": {} })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_health() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let (status, body) = app.request(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "platform-server");
}

#[tokio::test]
async fn test_large_logo_reaches_validation() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let png = noisy_png(1000);
    assert!(png.len() > 2 * 1024 * 1024);
    assert!(png.len() < platform_server::install::logo::MAX_FILE_SIZE);

    let mut body = install_body();
    body["data"]["logo"] = json!({ "name": "banner.png", "content": STANDARD.encode(&png) });

    let (status, body) = app.request(Method::POST, "/api/install", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let logo = setting::find(&app.state.pool).await.unwrap().unwrap().logo.unwrap();
    let stored = app.work_dir.path().join("uploads").join("logos").join(&logo);
    assert_eq!(std::fs::metadata(stored).unwrap().len(), png.len() as u64);
}

#[tokio::test]
async fn test_oversized_logo_is_rejected_by_validation() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let oversized = vec![0u8; platform_server::install::logo::MAX_FILE_SIZE + 1024];

    let mut body = install_body();
    body["data"]["logo"] = json!({ "name": "banner.png", "content": STANDARD.encode(&oversized) });

    let (status, body) = app.request(Method::POST, "/api/install", Some(body)).await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(body["errors"]["logo"], "Logo too large. Maximum size is 5MB");
}

#[tokio::test]
async fn test_logo_content_must_match_extension() {
    let app = test_app(PresetFailurePolicy::Continue).await;
    let mut body = install_body();
    body["data"]["logo"] = json!({ "name": "brand.gif", "content": png_base64() });

    let (status, body) = app.request(Method::POST, "/api/install", Some(body)).await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert!(body["errors"]["logo"].as_str().unwrap().contains("'.gif'"));
    assert_eq!(user::count(&app.state.pool).await.unwrap(), 0);
}
