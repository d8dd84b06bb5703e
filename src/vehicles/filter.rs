use super::vehicle::{Vehicle, VehicleFilters};

/// Filter criteria with the string lists lowercased once up front.
struct Criteria<'a> {
	body_type: Vec<String>,
	make: Vec<String>,
	color: Vec<String>,
	filters: &'a VehicleFilters,
}

impl<'a> Criteria<'a> {
	fn new(filters: &'a VehicleFilters) -> Self {
		Criteria {
			body_type: lowercase_all(&filters.body_type),
			make: lowercase_all(&filters.make),
			color: lowercase_all(&filters.color),
			filters,
		}
	}

	fn matches(&self, vehicle: &Vehicle) -> bool {
		let body_type_match = field_matches(&self.body_type, vehicle.body_type.as_str());
		let make_match = field_matches(&self.make, &vehicle.make);
		let color_match = field_matches(&self.color, &vehicle.color);

		let recently_added_match = !self.filters.recently_added || vehicle.is_recently_added;
		let local_only_match = !self.filters.local_only || vehicle.is_local;
		let brand_new_match = !self.filters.brand_new || vehicle.is_brand_new;

		body_type_match && make_match && color_match && recently_added_match && local_only_match && brand_new_match
	}
}

fn lowercase_all(values: &[String]) -> Vec<String> {
	values.iter().map(|v| v.to_lowercase()).collect()
}

// An empty selection places no constraint on the field.
fn field_matches(selected: &[String], value: &str) -> bool {
	if selected.is_empty() {
		return true;
	}
	let value = value.to_lowercase();
	selected.iter().any(|s| *s == value)
}

/// Returns the vehicles passing every criterion, in input order.
pub fn filter_vehicles(vehicles: &[Vehicle], filters: &VehicleFilters) -> Vec<Vehicle> {
	let criteria = Criteria::new(filters);
	vehicles.iter().filter(|v| criteria.matches(v)).cloned().collect()
}
