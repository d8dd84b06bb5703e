use std::{path::Path, sync::Arc};

use crate::{error::ServerError, search::zip, vehicles::Vehicle};

/// Read-only vehicle catalog shared by every request.
#[derive(Clone, Debug, Default)]
pub struct Inventory(Arc<Vec<Vehicle>>);

impl Inventory {
	pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Self {
		Inventory(Arc::new(vehicles))
	}

	/// Loads a JSON array of vehicles.
	pub async fn load(path: impl AsRef<Path>) -> Result<Self, ServerError> {
		let path = path.as_ref();
		let contents = tokio::fs::read_to_string(path).await.map_err(|source| ServerError::CatalogRead {
			path: path.to_path_buf(),
			source,
		})?;
		let vehicles: Vec<Vehicle> = serde_json::from_str(&contents).map_err(|source| ServerError::CatalogParse {
			path: path.to_path_buf(),
			source,
		})?;
		log::info!("loaded {} vehicles from {}", vehicles.len(), path.display());
		Ok(Self::from_vehicles(vehicles))
	}

	pub fn all(&self) -> &[Vehicle] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Vehicles listed under the 5-digit form of `zip_code`.
	pub fn by_zip(&self, zip_code: &str) -> Vec<Vehicle> {
		let wanted = zip::normalize(zip_code);
		self.0.iter().filter(|v| zip::normalize(&v.zip_code) == wanted).cloned().collect()
	}
}
