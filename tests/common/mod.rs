#![allow(dead_code)]

use activity_directory::database::ActivityDirectory;
use activity_directory::models::Activity;
use activity_directory::web;
use serde_json::Value;
use tokio::net::TcpListener;

pub struct TestApp {
    pub base_url: String,
    pub directory: ActivityDirectory,
    pub client: reqwest::Client,
}

/// Serves a freshly seeded directory on an ephemeral port.
pub async fn spawn_app() -> TestApp {
    let directory = ActivityDirectory::seeded();
    let app = web::router(
        directory.clone(),
        concat!(env!("CARGO_MANIFEST_DIR"), "/static"),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        base_url: format!("http://{}", addr),
        directory,
        client,
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn activities(&self) -> Value {
        let resp = self.client.get(self.url("/activities")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        resp.json().await.unwrap()
    }

    pub async fn activity(&self, name: &str) -> Activity {
        let data = self.activities().await;
        serde_json::from_value(data[name].clone()).unwrap()
    }

    pub async fn participants(&self, name: &str) -> Vec<String> {
        self.activity(name).await.participants
    }

    pub async fn signup(&self, activity: &str, email: &str) -> reqwest::Response {
        self.client
            .post(self.url(&format!("/activities/{}/signup", activity)))
            .query(&[("email", email)])
            .send()
            .await
            .unwrap()
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/activities/{}/unregister", activity)))
            .query(&[("email", email)])
            .send()
            .await
            .unwrap()
    }
}
