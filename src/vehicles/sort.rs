use std::cmp::Ordering;

use super::vehicle::Vehicle;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortType {
	#[default]
	Popularity,
	PriceLow,
	PriceHigh,
	RecentlyAdded,
	EarliestAvailable,
}

impl SortType {
	/// Dropdown order.
	pub const ALL: [SortType; 5] = [
		SortType::Popularity,
		SortType::PriceLow,
		SortType::PriceHigh,
		SortType::RecentlyAdded,
		SortType::EarliestAvailable,
	];

	pub fn value(&self) -> &'static str {
		match self {
			SortType::Popularity => "popularity",
			SortType::PriceLow => "price-low",
			SortType::PriceHigh => "price-high",
			SortType::RecentlyAdded => "recently-added",
			SortType::EarliestAvailable => "earliest-available",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			SortType::Popularity => "Popularity",
			SortType::PriceLow => "Price: Low to high",
			SortType::PriceHigh => "Price: High to low",
			SortType::RecentlyAdded => "Recently added",
			SortType::EarliestAvailable => "Earliest available",
		}
	}

	/// `None` for anything that is not one of the five wire values.
	pub fn parse(value: &str) -> Option<SortType> {
		SortType::ALL.into_iter().find(|s| s.value() == value)
	}

	fn compare(&self, a: &Vehicle, b: &Vehicle) -> Ordering {
		match self {
			SortType::Popularity => recently_added_first(a, b).then_with(|| cheaper_first(a, b)),
			SortType::PriceLow => cheaper_first(a, b),
			SortType::PriceHigh => cheaper_first(b, a),
			SortType::RecentlyAdded => recently_added_first(a, b).then_with(|| b.year.cmp(&a.year)),
			SortType::EarliestAvailable => b.year.cmp(&a.year).then_with(|| a.mileage.cmp(&b.mileage)),
		}
	}
}

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SortOption {
	pub value: &'static str,
	pub label: &'static str,
}

pub fn sort_options() -> Vec<SortOption> {
	SortType::ALL
		.iter()
		.map(|s| SortOption {
			value: s.value(),
			label: s.label(),
		})
		.collect()
}

// Prices come from JSON, so never NaN; -0.0 and 0.0 tie.
fn cheaper_first(a: &Vehicle, b: &Vehicle) -> Ordering {
	a.monthly_price.partial_cmp(&b.monthly_price).unwrap_or(Ordering::Equal)
}

fn recently_added_first(a: &Vehicle, b: &Vehicle) -> Ordering {
	b.is_recently_added.cmp(&a.is_recently_added)
}

/// Sorts a copy of `vehicles`. The sort is stable, so ties keep input order.
pub fn sort_vehicles(vehicles: &[Vehicle], sort_type: SortType) -> Vec<Vehicle> {
	let mut sorted = vehicles.to_vec();
	sorted.sort_by(|a, b| sort_type.compare(a, b));
	sorted
}
