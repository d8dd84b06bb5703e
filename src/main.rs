use std::net::SocketAddr;

use anyhow::Context;
use axum::routing::{get, post, Router};
use tower_http::cors::CorsLayer;

mod config;
mod error;
mod inventory;
mod search;
mod vehicles;

use config::ServerConfig;
use inventory::Inventory;
use search::search::{health, list_vehicles, search, sort_options};

fn app(inventory: Inventory) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/vehicles", get(list_vehicles))
		.route("/vehicles/search", post(search))
		.route("/vehicles/sort-options", get(sort_options))
		.layer(CorsLayer::permissive())
		.with_state(inventory)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env()?;
	let inventory = Inventory::load(&config.catalog)
		.await
		.with_context(|| format!("loading catalog {}", config.catalog.display()))?;
	if inventory.is_empty() {
		log::warn!("catalog {} has no vehicles", config.catalog.display());
	}

	let listener = tokio::net::TcpListener::bind(config.addr)
		.await
		.with_context(|| format!("binding {}", config.addr))?;
	log::info!("listening on {}", config.addr);

	axum::serve(listener, app(inventory).into_make_service_with_connect_info::<SocketAddr>())
		.await
		.context("server error")?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use axum::{
		body::{to_bytes, Body},
		http::Request,
	};
	use hyper::StatusCode;
	use serde_json::Value;
	use tower::ServiceExt;

	use super::*;

	fn inventory() -> Inventory {
		let catalog = include_str!("../data/vehicles.json");
		Inventory::from_vehicles(serde_json::from_str(catalog).unwrap())
	}

	async fn send(request: Request<Body>) -> (StatusCode, Value) {
		let response = app(inventory()).oneshot(request).await.unwrap();
		let status = response.status();
		let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&body).unwrap())
	}

	fn post_search(body: &'static str) -> Request<Body> {
		Request::builder()
			.method("POST")
			.uri("/vehicles/search")
			.header("content-type", "application/json")
			.body(Body::from(body))
			.unwrap()
	}

	#[tokio::test]
	async fn health_reports_catalog_size() {
		let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
		let (status, body) = send(request).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["status"], "ok");
		assert_eq!(body["vehicles"], 12);
	}

	#[tokio::test]
	async fn search_route_filters_and_sorts() {
		let (status, body) = send(post_search(r#"{"zipCode":"10001","filters":{"make":["toyota"]},"sort":"price-high"}"#)).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["available"], 5);
		assert_eq!(body["matched"], 2);
		assert_eq!(body["vehicles"][0]["model"], "RAV4");
		assert_eq!(body["vehicles"][1]["model"], "Camry");
	}

	#[tokio::test]
	async fn search_route_errors_are_json() {
		let (status, body) = send(post_search(r#"{"zipCode":"30301"}"#)).await;
		assert_eq!(status, StatusCode::NOT_FOUND);
		assert!(body["error"].as_str().unwrap().contains("30301"));

		let (status, body) = send(post_search(r#"{"zipCode":10001}"#)).await;
		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
		assert!(body["error"].is_string());
	}

	#[tokio::test]
	async fn sort_options_route_lists_five() {
		let request = Request::builder().uri("/vehicles/sort-options").body(Body::empty()).unwrap();
		let (status, body) = send(request).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.as_array().map(Vec::len), Some(5));
	}
}
