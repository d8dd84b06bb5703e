use std::{net::SocketAddr, path::PathBuf};

use crate::error::ServerError;

pub const DEFAULT_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_CATALOG: &str = "data/vehicles.json";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
	pub addr: SocketAddr,
	pub catalog: PathBuf,
}

impl ServerConfig {
	/// Reads `FLEXCAR_ADDR` and `FLEXCAR_CATALOG`, falling back to the defaults.
	pub fn from_env() -> Result<Self, ServerError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
		let addr = lookup("FLEXCAR_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
		let catalog = lookup("FLEXCAR_CATALOG").unwrap_or_else(|| DEFAULT_CATALOG.to_owned());

		let addr = addr
			.trim()
			.parse::<SocketAddr>()
			.map_err(|source| ServerError::InvalidAddress { addr: addr.clone(), source })?;

		Ok(ServerConfig {
			addr,
			catalog: PathBuf::from(catalog),
		})
	}
}
