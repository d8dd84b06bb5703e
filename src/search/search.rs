use axum::{
	extract::{rejection::JsonRejection, State},
	Json,
};
use serde_json::{json, Value};

use crate::{
	error::ServerError,
	inventory::Inventory,
	search::zip,
	vehicles::{self, Facets, SortOption, SortType, Vehicle, VehicleFilters},
};

#[derive(serde::Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
	/// `null`, absent and blank all search the whole catalog.
	pub zip_code: Option<String>,
	pub filters: VehicleFilters,
	pub sort: Option<String>,
}

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub zip_code: Option<String>,
	/// Vehicles for the ZIP code before filtering.
	pub available: usize,
	pub matched: usize,
	pub active_filters: bool,
	pub sort: Option<SortType>,
	pub facets: Facets,
	pub vehicles: Vec<Vehicle>,
}

/// Absent sort means the default; an unrecognized one disables sorting.
fn resolve_sort(sort: Option<&str>) -> Option<SortType> {
	match sort {
		None => Some(SortType::default()),
		Some(value) => {
			let parsed = SortType::parse(value);
			if parsed.is_none() {
				log::warn!("unknown sort type {:?}, returning results unsorted", value);
			}
			parsed
		}
	}
}

pub fn run_search(inventory: &Inventory, request: SearchRequest) -> Result<SearchResponse, ServerError> {
	let requested = request.zip_code.as_deref().unwrap_or_default().trim();

	let (zip_code, pool) = if requested.is_empty() {
		(None, inventory.all().to_vec())
	} else {
		if !zip::is_valid(requested) {
			log::warn!("rejected ZIP code {:?}", requested);
			return Err(ServerError::InvalidZip {
				zip_code: requested.to_owned(),
			});
		}
		let zip_code = zip::normalize(requested).to_owned();
		(Some(zip_code), inventory.by_zip(requested))
	};

	if pool.is_empty() {
		return Err(ServerError::NoVehiclesFound {
			zip_code: requested.to_owned(),
		});
	}

	let sort = resolve_sort(request.sort.as_deref());
	let processed = vehicles::process_vehicles(&pool, &request.filters, sort);
	log::debug!(
		"search zip={:?} sort={:?} available={} matched={}",
		zip_code,
		sort,
		pool.len(),
		processed.len()
	);

	Ok(SearchResponse {
		zip_code,
		available: pool.len(),
		matched: processed.len(),
		active_filters: request.filters.is_active(),
		sort,
		facets: vehicles::facets(&pool),
		vehicles: processed,
	})
}

pub async fn search(
	inventory: State<Inventory>,
	request: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ServerError> {
	let Json(request) = request?;
	run_search(&inventory.0, request).map(Json)
}

pub async fn list_vehicles(inventory: State<Inventory>) -> Json<Vec<Vehicle>> {
	Json(inventory.all().to_vec())
}

pub async fn sort_options() -> Json<Vec<SortOption>> {
	Json(vehicles::sort_options())
}

pub async fn health(inventory: State<Inventory>) -> Json<Value> {
	Json(json!({ "status": "ok", "vehicles": inventory.len() }))
}
