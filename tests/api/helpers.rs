use once_cell::sync::Lazy;
use secrecy::SecretString;
use softhub::{
    configuration::{Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub const RELAY_SECRET: &str = "relay-secret-token";

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(format!("{}/contact", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn received_email_bodies(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let config = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.app.host = "127.0.0.1".into();
        c.app.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.timeout_ms = 500;
        c.contact.brand = "SoftHub".into();
        c.contact.sender_email = Some("website@softhub.test".into());
        c.contact.sender_secret = Some(SecretString::from(RELAY_SECRET.to_string()));
        c.contact.recipient_email = Some("sales@softhub.test".into());
        customise(&mut c);
        c
    };

    let app = Application::build(config)
        .await
        .expect("Failed to build application.");
    let port = app.get_port();
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        email_server,
        api_client: reqwest::Client::new(),
    }
}
