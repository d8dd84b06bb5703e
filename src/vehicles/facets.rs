use std::collections::BTreeMap;

use super::vehicle::Vehicle;

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Facet {
	pub value: String,
	pub count: usize,
}

/// Options offered by the filter panel, each with the number of vehicles carrying it.
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
	pub makes: Vec<Facet>,
	pub colors: Vec<Facet>,
}

fn count_by<'a>(vehicles: &'a [Vehicle], field: impl Fn(&'a Vehicle) -> &'a str) -> Vec<Facet> {
	let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
	for vehicle in vehicles {
		*counts.entry(field(vehicle)).or_default() += 1;
	}
	counts
		.into_iter()
		.map(|(value, count)| Facet {
			value: value.to_owned(),
			count,
		})
		.collect()
}

pub fn facets(vehicles: &[Vehicle]) -> Facets {
	Facets {
		makes: count_by(vehicles, |v| v.make.as_str()),
		colors: count_by(vehicles, |v| v.color.as_str()),
	}
}
