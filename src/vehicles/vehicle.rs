use std::fmt;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyType {
	Sedan,
	#[serde(rename = "SUV")]
	Suv,
	#[serde(rename = "Pickup Truck")]
	PickupTruck,
	Minivan,
}

impl BodyType {
	pub fn as_str(&self) -> &'static str {
		match self {
			BodyType::Sedan => "Sedan",
			BodyType::Suv => "SUV",
			BodyType::PickupTruck => "Pickup Truck",
			BodyType::Minivan => "Minivan",
		}
	}
}

impl fmt::Display for BodyType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A listing as it comes out of the catalog. Never mutated after load.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
	pub id: String,
	pub make: String,
	pub model: String,
	pub trim: String,
	pub year: u16,
	pub color: String,
	pub mileage: u32,
	pub price: f64,
	#[serde(default)]
	pub image: String,
	pub zip_code: String,
	pub body_type: BodyType,
	pub is_local: bool,
	pub is_recently_added: bool,
	pub is_brand_new: bool,
	pub monthly_price: f64,
}

/// Filter criteria. Empty lists and `false` flags place no constraint,
/// so `VehicleFilters::default()` is the cleared state.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleFilters {
	pub body_type: Vec<String>,
	pub make: Vec<String>,
	pub color: Vec<String>,
	pub recently_added: bool,
	pub local_only: bool,
	pub brand_new: bool,
}

impl VehicleFilters {
	pub fn is_active(&self) -> bool {
		!self.body_type.is_empty()
			|| !self.make.is_empty()
			|| !self.color.is_empty()
			|| self.recently_added
			|| self.local_only
			|| self.brand_new
	}
}
