use std::path::PathBuf;

use axum::{
	extract::rejection::JsonRejection,
	response::{IntoResponse, Response},
	Json,
};
use hyper::StatusCode;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
	#[error("failed to read vehicle catalog {path}")]
	CatalogRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("malformed vehicle catalog {path}")]
	CatalogParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid request body: {}", .0.body_text())]
	InvalidRequest(#[from] JsonRejection),

	#[error("Invalid ZIP code {zip_code}. Please enter a valid ZIP code (e.g., 12345 or 12345-6789)")]
	InvalidZip { zip_code: String },

	#[error("No vehicles found for ZIP code {zip_code}. Please try a different ZIP code.")]
	NoVehiclesFound { zip_code: String },

	#[error("invalid listen address {addr}")]
	InvalidAddress {
		addr: String,
		#[source]
		source: std::net::AddrParseError,
	},
}

impl ServerError {
	pub fn status(&self) -> StatusCode {
		match self {
			ServerError::InvalidRequest(rejection) => rejection.status(),
			ServerError::InvalidZip { .. } => StatusCode::BAD_REQUEST,
			ServerError::NoVehiclesFound { .. } => StatusCode::NOT_FOUND,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let status = self.status();
		if status.is_server_error() {
			log::error!("{:?}", self);
		}
		(status, Json(json!({ "error": self.to_string() }))).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn not_found_message_names_the_zip() {
		let err = ServerError::NoVehiclesFound {
			zip_code: "99999".into(),
		};
		assert_eq!(err.status(), StatusCode::NOT_FOUND);
		assert_eq!(err.to_string(), "No vehicles found for ZIP code 99999. Please try a different ZIP code.");
	}

	#[test]
	fn maps_errors_to_status_codes() {
		let invalid = ServerError::InvalidZip { zip_code: "12".into() };
		assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

		let read = ServerError::CatalogRead {
			path: PathBuf::from("missing.json"),
			source: std::io::Error::from(std::io::ErrorKind::NotFound),
		};
		assert_eq!(read.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
