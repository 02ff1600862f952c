//! Web application.

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Response, Route, Server};

use self::middleware::{ErrorMiddleware, SecurityHeadersMiddleware};
use crate::model::RandomForestRegressor;
use crate::opts::WebOpts;
use crate::prelude::*;

pub mod middleware;
pub mod partials;
pub mod views;

pub async fn run(opts: WebOpts) -> Result {
    let model = RandomForestRegressor::load(&opts.model)?;
    info!(path = %opts.model.display(), trained_at = %model.trained_at, "loaded the model");

    let app = create_app(model);
    info!(host = opts.host.as_str(), port = opts.port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run(app)
        .await?;
    Ok(())
}

fn create_app(model: RandomForestRegressor) -> impl Endpoint<Output = Response> {
    Route::new()
        .at("/", get(views::index::get))
        .at("/predict", get(views::predict::get).post(views::predict::post))
        .at("/api/predict", post(views::predict::post_api))
        .at("/theme.css", get(views::r#static::get_theme_css))
        .at("/robots.txt", get(views::r#static::get_robots_txt))
        .data(Arc::new(model))
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::test::create_test_client;
    use super::*;

    #[tokio::test]
    async fn index_ok() {
        let client = create_test_client();
        let response = client.get("/").send().await;
        response.assert_status_is_ok();
        response.assert_header("content-type", "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn predict_form_ok() {
        let client = create_test_client();
        let response = client.get("/predict").send().await;
        response.assert_status_is_ok();
        response.assert_header("content-type", "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn predict_submission_ok() {
        let client = create_test_client();
        let response = client
            .post("/predict")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(
                "age=30&sex=%E7%94%B7%E6%80%A7&bmi=22.5&children=1\
                 &smoker=%E5%90%A6&region=%E4%B8%9C%E5%8D%97%E9%83%A8",
            )
            .send()
            .await;
        response.assert_status_is_ok();
        response.assert_header("content-type", "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn predict_rejects_an_incomplete_submission() {
        let client = create_test_client();
        let response = client
            .post("/predict")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("age=30")
            .send()
            .await;
        response.assert_status(poem::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn api_predict_ok() {
        let client = create_test_client();
        let response = client
            .post("/api/predict")
            .header("content-type", "application/json")
            .body(
                json!({
                    "age": 30,
                    "sex": "男性",
                    "bmi": 22.5,
                    "children": 1,
                    "smoker": "否",
                    "region": "东南部",
                })
                .to_string(),
            )
            .send()
            .await;
        response.assert_status_is_ok();
        let expenses = response.json().await.value().object().get("expenses").f64();
        assert!(expenses.is_finite());
        assert!(expenses >= 0.0);
    }

    #[tokio::test]
    async fn theme_css_ok() {
        let client = create_test_client();
        let response = client.get("/theme.css").send().await;
        response.assert_status_is_ok();
        response.assert_header("content-type", "text/css");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let client = create_test_client();
        let response = client.get("/no-such-page").send().await;
        response.assert_status(poem::http::StatusCode::NOT_FOUND);
    }
}
