//! # Derived Summaries
//!
//! Read-only text derived from the current response. These are pure
//! functions of `(response, localizer)`; nothing is memoized, so the text
//! can never go stale against the state it describes.

use suriya_core::{Appliance, Province, ResidenceType};
use suriya_i18n::{Localizer, MessageKey};

use crate::response::SurveyResponse;

/// The catalog label key for an appliance kind.
pub fn appliance_label_key(appliance: Appliance) -> MessageKey {
    match appliance {
        Appliance::AirConditioner => MessageKey::ApplianceAc,
        Appliance::WaterHeater => MessageKey::ApplianceHeater,
        Appliance::Laundry => MessageKey::ApplianceLaundry,
        Appliance::Refrigerator => MessageKey::ApplianceFridge,
        Appliance::Tv => MessageKey::ApplianceTv,
        Appliance::EvCharger => MessageKey::ApplianceEv,
    }
}

/// The label key for a residence option.
pub fn residence_label_key(residence: ResidenceType) -> MessageKey {
    match residence {
        ResidenceType::House => MessageKey::ResidenceHouseLabel,
        ResidenceType::Townhouse => MessageKey::ResidenceTownhouseLabel,
        ResidenceType::Apartment => MessageKey::ResidenceApartmentLabel,
    }
}

/// The description key for a residence option.
pub fn residence_description_key(residence: ResidenceType) -> MessageKey {
    match residence {
        ResidenceType::House => MessageKey::ResidenceHouseDescription,
        ResidenceType::Townhouse => MessageKey::ResidenceTownhouseDescription,
        ResidenceType::Apartment => MessageKey::ResidenceApartmentDescription,
    }
}

/// `"{label} ×{quantity}"` for each selected appliance in catalog order,
/// or the fixed empty-state message when nothing is selected.
pub fn appliance_summary(response: &SurveyResponse, localizer: &Localizer) -> String {
    let selected = response.selected_appliances();
    if selected.is_empty() {
        return localizer.t(MessageKey::ApplianceSummaryEmpty);
    }
    selected
        .into_iter()
        .map(|(appliance, quantity)| {
            format!(
                "{} ×{}",
                localizer.t(appliance_label_key(appliance)),
                quantity.get()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The selected province's catalog name, or the fixed "not selected" text.
pub fn selected_province_name(response: &SurveyResponse, localizer: &Localizer) -> String {
    response
        .province()
        .and_then(Province::find)
        .map(|province| province.name.to_string())
        .unwrap_or_else(|| localizer.t(MessageKey::ProvinceNotSelected))
}

/// Pluralized resident phrase, e.g. `"1 resident"` / `"3 residents"`.
pub fn household_summary(response: &SurveyResponse, localizer: &Localizer) -> String {
    let occupants = response.occupants();
    let key = if occupants.is_plural() {
        MessageKey::HouseholdSummaryPlural
    } else {
        MessageKey::HouseholdSummarySingle
    };
    localizer.t_with(key, &[("count", occupants.get().to_string())])
}

/// Helper band for the household step: small (<= 2), large (>= 6), or the
/// middle band.
pub fn household_helper(response: &SurveyResponse, localizer: &Localizer) -> String {
    let occupants = response.occupants().get();
    let key = if occupants <= 2 {
        MessageKey::HouseholdHelperSmall
    } else if occupants >= 6 {
        MessageKey::HouseholdHelperLarge
    } else {
        MessageKey::HouseholdHelperMedium
    };
    localizer.t(key)
}

/// Baht currency rendering with thousands separators, e.g. `฿4,000`.
pub fn format_baht(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("฿{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use suriya_core::ProvinceId;
    use suriya_i18n::Language;

    fn english() -> Localizer {
        Localizer::new(Language::En)
    }

    #[test]
    fn test_appliance_summary_catalog_order() {
        let mut response = SurveyResponse::new();
        response.set_appliance_quantity(Appliance::Refrigerator, 1.0);
        response.set_appliance_quantity(Appliance::AirConditioner, 2.0);
        assert_eq!(
            appliance_summary(&response, &english()),
            "Air conditioner unit ×2, Refrigerator ×1"
        );
    }

    #[test]
    fn test_appliance_summary_empty() {
        let response = SurveyResponse::new();
        assert_eq!(
            appliance_summary(&response, &english()),
            "No power-hungry appliances set yet."
        );
    }

    #[test]
    fn test_appliance_summary_thai_labels() {
        let mut response = SurveyResponse::new();
        response.set_appliance_quantity(Appliance::Refrigerator, 1.0);
        assert_eq!(
            appliance_summary(&response, &Localizer::new(Language::Th)),
            "ตู้เย็น ×1"
        );
    }

    #[test]
    fn test_province_name_resolution() {
        let mut response = SurveyResponse::new();
        assert_eq!(selected_province_name(&response, &english()), "Bangkok");

        response.select_province(Some(ProvinceId::from_str("cmi").unwrap()));
        assert_eq!(selected_province_name(&response, &english()), "Chiang Mai");

        response.select_province(None);
        assert_eq!(selected_province_name(&response, &english()), "Not selected");
    }

    #[test]
    fn test_household_summary_pluralization() {
        let mut response = SurveyResponse::new();
        response.set_occupants(1.0);
        assert_eq!(household_summary(&response, &english()), "1 resident");

        response.set_occupants(4.0);
        assert_eq!(household_summary(&response, &english()), "4 residents");
    }

    #[test]
    fn test_household_helper_bands() {
        let mut response = SurveyResponse::new();
        response.set_occupants(2.0);
        assert_eq!(
            household_helper(&response, &english()),
            "Smaller households still drive meaningful demand."
        );

        response.set_occupants(4.0);
        assert_eq!(
            household_helper(&response, &english()),
            "Nice balance—perfect for solar comparisons."
        );

        response.set_occupants(6.0);
        assert_eq!(
            household_helper(&response, &english()),
            "Larger homes often unlock the best solar savings."
        );
    }

    #[test]
    fn test_format_baht_grouping() {
        assert_eq!(format_baht(500), "฿500");
        assert_eq!(format_baht(4_000), "฿4,000");
        assert_eq!(format_baht(20_000), "฿20,000");
        assert_eq!(format_baht(10_300), "฿10,300");
    }
}
