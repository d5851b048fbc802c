use reqwest::Response;
use secrecy::ExposeSecret;

use subscription_admin::config::{get_configuration, Settings};
use subscription_admin::startup::Application;

pub struct TestApp {
    pub config: Settings,
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        let mut config = get_configuration().expect("Missing configuration file.");

        // We are using port 0 as way to define a different port per each test. Port 0 is a special case that operating systems
        // take into account: when port is 0, the OS will search for the first available port
        config.set_app_port(0);

        let application = Application::build(config.clone())
            .await
            .expect("Failed to build application.");

        let address = format!("http://127.0.0.1:{}", application.get_port());

        tokio::spawn(application.run_until_stop());

        TestApp {
            address,
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Most endpoints sit behind the auth gate; this spawns an app and logs
    /// in with the configured credential pair.
    pub async fn spawn_logged_in_app() -> TestApp {
        let test_app = TestApp::spawn_app().await;
        let admin = test_app.config.get_admin();

        let response = test_app
            .post_login(&admin.get_email(), admin.get_password().expose_secret())
            .await;
        assert!(response.status().is_success());

        test_app
    }

    pub async fn post_login(&self, email: &str, password: &str) -> Response {
        self.client
            .post(format!("{}/login", self.address))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_json(&self, path: &str) -> serde_json::Value {
        let response = self.get(path).await;
        assert!(
            response.status().is_success(),
            "GET {} failed with {}",
            path,
            response.status()
        );

        response.json().await.expect("Response was not valid JSON.")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_json(&self, path: &str, body: &serde_json::Value) -> Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
