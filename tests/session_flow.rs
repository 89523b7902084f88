#![allow(clippy::unwrap_used)]

use alertsub::{
    app_lib::{ApiClient, AppConfig},
    features::{
        auth::{authenticate_user, log_out_user},
        profile::types::GeocodedFeature,
    },
    store::{Action, Dispatch, Route, Store},
    views::{
        profile_container::ProfileBody, AdminMenu, AlertBanner, LandingPage, ProfileContainer,
    },
};
use secrecy::SecretString;
use serde_json::json;
use std::{net::TcpListener, sync::Mutex};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn api_for(server: &MockServer) -> ApiClient {
    let config = AppConfig {
        api_base_url: server.uri(),
        ..AppConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

#[derive(Default)]
struct Recorder {
    actions: Mutex<Vec<Action>>,
}

impl Dispatch for Recorder {
    fn dispatch(&self, action: Action) {
        self.actions.lock().unwrap().push(action);
    }
}

#[tokio::test]
async fn login_then_manage_addresses() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "ana@example.gov", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "ana@example.gov",
            "authToken": "tok-42"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .and(query_param("access_token", "tok-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "addresses": [],
            "phone": "555-0100"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/profile"))
        .and(query_param("access_token", "tok-42"))
        .and(body_json(json!({
            "addresses": [{"address": "1 Main St", "latitude": 38.9, "longitude": -77.0}],
            "phone": "555-0100"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let store = Store::new();

    let landing = store.read(LandingPage::connect);
    landing.mount(&store);
    assert_eq!(store.snapshot().router.location(), Route::Landing);
    assert!(AdminMenu::render(store.snapshot().auth.is_logged_in()).is_hidden());

    authenticate_user(
        &api,
        &store,
        "ana@example.gov",
        &SecretString::from("hunter2".to_string()),
    )
    .await;

    let state = store.snapshot();
    assert_eq!(state.router.location(), Route::Profile);
    assert!(!AdminMenu::render(state.auth.is_logged_in()).is_hidden());

    let mut container = ProfileContainer::new(&store, &api);
    container.mount().await;
    assert!(matches!(container.render().body, ProfileBody::Loaded { .. }));

    let feature = GeocodedFeature::new("1 Main St", -77.0, 38.9);
    assert!(container.save_new_address(&feature).await);

    let view = container.render();
    assert!(view.to_string().contains("1 Main St"));

    store.dispatch(log_out_user());
    let state = store.snapshot();
    assert!(!state.auth.is_logged_in());
    assert!(matches!(container.render().body, ProfileBody::Loading));
}

#[tokio::test]
async fn rejected_login_only_alerts() {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(403).set_body_string("account locked"))
        .mount(&server)
        .await;

    let recorder = Recorder::default();
    authenticate_user(
        &api_for(&server),
        &recorder,
        "ana@example.gov",
        &SecretString::from("hunter2".to_string()),
    )
    .await;

    let actions = recorder.actions.into_inner().unwrap();
    assert_eq!(actions.len(), 1);
    assert!(matches!(&actions[0], Action::DisplayAlert(alert) if !alert.message.contains("locked")));

    let store = Store::new();
    for action in actions {
        store.dispatch(action);
    }
    let banner = store.read(|state| AlertBanner::render(&state.alert)).unwrap();
    assert_eq!(banner.class, "usa-alert-error");
    assert_eq!(banner.message, "Unable to log in, please try again");
    assert!(!store.snapshot().auth.is_logged_in());
}
