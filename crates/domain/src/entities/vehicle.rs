//! Vehicle entity - a collection truck in the fleet

use serde::{Deserialize, Serialize};

/// Operational status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

/// Maintenance condition reported for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Good,
    NeedsService,
    InService,
}

/// A fleet vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: u32,
    /// Fleet code painted on the truck (e.g. "WM-T18"), unique
    pub vehicle_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub district: Option<String>,
    pub driver: Option<String>,
    pub status: VehicleStatus,
    /// Current fuel in litres
    pub fuel_level: u32,
    pub fuel_capacity: u32,
    pub maintenance_status: MaintenanceStatus,
    /// Distance driven today in miles
    pub current_mileage: f64,
    /// Idle minutes today
    pub idle_time: u32,
    pub fuel_efficiency: Option<f64>,
    pub image: Option<String>,
}

impl Vehicle {
    /// Create a vehicle with a full tank and no trip data
    pub fn new(
        vehicle_id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            vehicle_id: vehicle_id.into(),
            name: name.into(),
            kind: kind.into(),
            district: None,
            driver: None,
            status: VehicleStatus::default(),
            fuel_level: 100,
            fuel_capacity: 100,
            maintenance_status: MaintenanceStatus::default(),
            current_mileage: 0.0,
            idle_time: 0,
            fuel_efficiency: None,
            image: None,
        }
    }

    /// Fuel used so far, derived from the tank gap
    #[must_use]
    pub fn fuel_consumed(&self) -> f64 {
        f64::from(self.fuel_capacity.saturating_sub(self.fuel_level)) * 0.1
    }
}

/// Partial update merged into a stored vehicle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleUpdate {
    pub name: Option<String>,
    pub district: Option<String>,
    pub driver: Option<String>,
    pub status: Option<VehicleStatus>,
    pub fuel_level: Option<u32>,
    pub maintenance_status: Option<MaintenanceStatus>,
    pub current_mileage: Option<f64>,
    pub idle_time: Option<u32>,
    pub fuel_efficiency: Option<f64>,
}

impl VehicleUpdate {
    /// Overwrite the fields present in this update
    pub fn apply_to(self, vehicle: &mut Vehicle) {
        if let Some(name) = self.name {
            vehicle.name = name;
        }
        if self.district.is_some() {
            vehicle.district = self.district;
        }
        if self.driver.is_some() {
            vehicle.driver = self.driver;
        }
        if let Some(status) = self.status {
            vehicle.status = status;
        }
        if let Some(level) = self.fuel_level {
            vehicle.fuel_level = level;
        }
        if let Some(status) = self.maintenance_status {
            vehicle.maintenance_status = status;
        }
        if let Some(mileage) = self.current_mileage {
            vehicle.current_mileage = mileage;
        }
        if let Some(idle) = self.idle_time {
            vehicle.idle_time = idle;
        }
        if self.fuel_efficiency.is_some() {
            vehicle.fuel_efficiency = self.fuel_efficiency;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vehicle_defaults() {
        let v = Vehicle::new("WM-T01", "Test Truck", "Waste Collection");
        assert_eq!(v.id, 0);
        assert_eq!(v.status, VehicleStatus::Active);
        assert_eq!(v.fuel_level, 100);
        assert_eq!(v.maintenance_status, MaintenanceStatus::Good);
        assert!(v.fuel_consumed().abs() < f64::EPSILON);
    }

    #[test]
    fn fuel_consumed_from_tank_gap() {
        let mut v = Vehicle::new("WM-T01", "Test Truck", "Waste Collection");
        v.fuel_level = 68;
        assert!((v.fuel_consumed() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn serializes_camel_case_with_type_field() {
        let v = Vehicle::new("WM-T01", "Test Truck", "Recycling");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["vehicleId"], "WM-T01");
        assert_eq!(json["type"], "Recycling");
        assert_eq!(json["maintenanceStatus"], "good");
        assert_eq!(json["fuelCapacity"], 100);
    }

    #[test]
    fn update_merges_present_fields_only() {
        let mut v = Vehicle::new("WM-T01", "Test Truck", "Recycling");
        v.driver = Some("Sarah Johnson".to_string());

        VehicleUpdate {
            status: Some(VehicleStatus::Maintenance),
            fuel_level: Some(40),
            ..VehicleUpdate::default()
        }
        .apply_to(&mut v);

        assert_eq!(v.status, VehicleStatus::Maintenance);
        assert_eq!(v.fuel_level, 40);
        assert_eq!(v.driver.as_deref(), Some("Sarah Johnson"));
        assert_eq!(v.name, "Test Truck");
    }
}
