pub mod facets;
pub mod filter;
pub mod sort;
pub mod vehicle;

pub use facets::{facets, Facets};
pub use filter::filter_vehicles;
pub use sort::{sort_options, sort_vehicles, SortOption, SortType};
pub use vehicle::{Vehicle, VehicleFilters};

/// Filters then sorts. A `None` sort leaves the filtered list in input order.
pub fn process_vehicles(vehicles: &[Vehicle], filters: &VehicleFilters, sort_type: Option<SortType>) -> Vec<Vehicle> {
	let filtered = filter_vehicles(vehicles, filters);
	match sort_type {
		Some(sort_type) => sort_vehicles(&filtered, sort_type),
		None => filtered,
	}
}


#[cfg(test)]
mod tests {
	use super::fixtures::mock_vehicles;
	use super::*;

	#[test]
	fn filters_then_sorts() {
		let filters = VehicleFilters {
			make: vec!["Toyota".into()],
			..Default::default()
		};
		let result = process_vehicles(&mock_vehicles(), &filters, Some(SortType::PriceHigh));
		assert_eq!(result.len(), 2);
		assert!(result.iter().all(|v| v.make == "Toyota"));
		assert_eq!(result[0].price, 32000.0);
		assert_eq!(result[1].price, 28500.0);
	}

	#[test]
	fn no_match_is_empty_for_any_sort() {
		let filters = VehicleFilters {
			make: vec!["BMW".into()],
			color: vec!["Blue".into()],
			..Default::default()
		};
		assert!(process_vehicles(&mock_vehicles(), &filters, Some(SortType::PriceLow)).is_empty());
		assert!(process_vehicles(&[], &VehicleFilters::default(), Some(SortType::PriceLow)).is_empty());
	}

	#[test]
	fn applies_every_criterion() {
		let filters = VehicleFilters {
			body_type: vec!["Sedan".into()],
			make: vec!["Toyota".into()],
			color: vec!["Silver".into()],
			local_only: true,
			..Default::default()
		};
		let result = process_vehicles(&mock_vehicles(), &filters, Some(SortType::Popularity));
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].model, "Camry");
	}

	#[test]
	fn sorts_without_filters() {
		let result = process_vehicles(&mock_vehicles(), &VehicleFilters::default(), Some(SortType::RecentlyAdded));
		assert_eq!(result.len(), 3);
		assert_eq!(result[0].model, "Civic");
	}

	#[test]
	fn unknown_sort_keeps_filtered_order() {
		let vehicles = mock_vehicles();
		let result = process_vehicles(&vehicles, &VehicleFilters::default(), SortType::parse("model"));
		assert_eq!(result, vehicles);
	}
}
