//! # Survey Response
//!
//! The household inputs collected across the wizard steps. The struct owns
//! its invariants: fields are private, and every write path goes through a
//! mutator that rounds/clamps or validates against the catalogs. State is
//! session-scoped; nothing here persists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use suriya_core::{
    Appliance, ApplianceQuantity, BillAmount, OccupantCount, Province, ProvinceId, ResidenceType,
};

/// The full set of household inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResponse {
    monthly_bill: BillAmount,
    residence: ResidenceType,
    province: Option<ProvinceId>,
    occupants: OccupantCount,
    appliances: BTreeMap<Appliance, ApplianceQuantity>,
}

impl Default for SurveyResponse {
    /// Wizard-mount defaults: 4000 baht, single-family home, the first
    /// catalog province preselected, two occupants, every appliance off.
    fn default() -> Self {
        let appliances = Appliance::all()
            .iter()
            .map(|appliance| (*appliance, ApplianceQuantity::OFF))
            .collect();
        Self {
            monthly_bill: BillAmount::default(),
            residence: ResidenceType::default(),
            province: suriya_core::PROVINCES.first().map(Province::province_id),
            occupants: OccupantCount::default(),
            appliances,
        }
    }
}

impl SurveyResponse {
    /// A response with the wizard-mount defaults.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutators (total over raw input) ──────────────────────────────

    /// Set the monthly bill in baht. Presets and slider values are already
    /// in range and pass through unchanged; anything else clamps.
    pub fn set_monthly_bill(&mut self, baht: u32) {
        self.monthly_bill = BillAmount::new(baht);
    }

    /// Set the residence type.
    pub fn set_residence(&mut self, residence: ResidenceType) {
        self.residence = residence;
    }

    /// Set or clear the province selection. `None` always clears; an id
    /// that names no catalog entry leaves the selection unchanged.
    pub fn select_province(&mut self, id: Option<ProvinceId>) {
        match id {
            None => self.province = None,
            Some(id) => {
                if Province::find(&id).is_some() {
                    self.province = Some(id);
                }
            }
        }
    }

    /// Set the occupant count from a raw slider value (round, then clamp).
    pub fn set_occupants(&mut self, raw: f64) {
        self.occupants = OccupantCount::from_raw(raw);
    }

    /// Set one appliance's quantity from a raw slider value. Values that
    /// round to zero or below switch the appliance off.
    pub fn set_appliance_quantity(&mut self, appliance: Appliance, raw: f64) {
        self.appliances
            .insert(appliance, ApplianceQuantity::from_raw(raw));
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The monthly bill.
    pub fn monthly_bill(&self) -> BillAmount {
        self.monthly_bill
    }

    /// The residence type.
    pub fn residence(&self) -> ResidenceType {
        self.residence
    }

    /// The selected province, if any.
    pub fn province(&self) -> Option<&ProvinceId> {
        self.province.as_ref()
    }

    /// The occupant count.
    pub fn occupants(&self) -> OccupantCount {
        self.occupants
    }

    /// One appliance's quantity (off when never set).
    pub fn appliance_quantity(&self, appliance: Appliance) -> ApplianceQuantity {
        self.appliances
            .get(&appliance)
            .copied()
            .unwrap_or(ApplianceQuantity::OFF)
    }

    /// Appliances with quantity > 0, in catalog order.
    pub fn selected_appliances(&self) -> Vec<(Appliance, ApplianceQuantity)> {
        Appliance::all()
            .iter()
            .map(|appliance| (*appliance, self.appliance_quantity(*appliance)))
            .filter(|(_, quantity)| quantity.is_active())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let response = SurveyResponse::new();
        assert_eq!(response.monthly_bill().baht(), 4_000);
        assert_eq!(response.residence(), ResidenceType::House);
        assert_eq!(response.province().map(ProvinceId::as_str), Some("bkk"));
        assert_eq!(response.occupants().get(), 2);
        assert!(response.selected_appliances().is_empty());
    }

    #[test]
    fn test_bill_presets_pass_through() {
        let mut response = SurveyResponse::new();
        for preset in BillAmount::PRESETS {
            response.set_monthly_bill(preset);
            assert_eq!(response.monthly_bill().baht(), preset);
        }
    }

    #[test]
    fn test_unknown_province_is_noop() {
        let mut response = SurveyResponse::new();
        response.select_province(Some(ProvinceId::from_str("cmi").unwrap()));
        assert_eq!(response.province().unwrap().as_str(), "cmi");

        // Valid token, not in the catalog: selection unchanged.
        response.select_province(Some(ProvinceId::from_str("zzz").unwrap()));
        assert_eq!(response.province().unwrap().as_str(), "cmi");
    }

    #[test]
    fn test_none_always_clears_province() {
        let mut response = SurveyResponse::new();
        response.select_province(None);
        assert!(response.province().is_none());
    }

    #[test]
    fn test_appliance_off_at_zero() {
        let mut response = SurveyResponse::new();
        response.set_appliance_quantity(Appliance::AirConditioner, 2.0);
        assert!(response.appliance_quantity(Appliance::AirConditioner).is_active());

        response.set_appliance_quantity(Appliance::AirConditioner, -1.0);
        assert_eq!(response.appliance_quantity(Appliance::AirConditioner).get(), 0);
    }

    #[test]
    fn test_selected_appliances_catalog_order() {
        let mut response = SurveyResponse::new();
        response.set_appliance_quantity(Appliance::EvCharger, 1.0);
        response.set_appliance_quantity(Appliance::AirConditioner, 2.0);
        response.set_appliance_quantity(Appliance::Refrigerator, 1.0);

        let selected: Vec<Appliance> = response
            .selected_appliances()
            .into_iter()
            .map(|(appliance, _)| appliance)
            .collect();
        assert_eq!(
            selected,
            vec![
                Appliance::AirConditioner,
                Appliance::Refrigerator,
                Appliance::EvCharger
            ]
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut response = SurveyResponse::new();
        response.set_monthly_bill(9_000);
        response.set_appliance_quantity(Appliance::Tv, 3.0);

        let json = serde_json::to_string(&response).unwrap();
        let parsed: SurveyResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }

    proptest! {
        #[test]
        fn prop_occupants_stay_in_range(raw in -1e5f64..1e5f64) {
            let mut response = SurveyResponse::new();
            response.set_occupants(raw);
            prop_assert!((1..=10).contains(&response.occupants().get()));
        }

        #[test]
        fn prop_quantities_stay_in_band(raw in -1e5f64..1e5f64) {
            let mut response = SurveyResponse::new();
            response.set_appliance_quantity(Appliance::WaterHeater, raw);
            let quantity = response.appliance_quantity(Appliance::WaterHeater).get();
            prop_assert!(quantity <= 6);
        }
    }
}
