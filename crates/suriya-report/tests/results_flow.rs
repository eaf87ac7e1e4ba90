//! End-to-end flow: edit the wizard, submit, build the dashboard, render.

use std::str::FromStr;

use suriya_core::{Appliance, ProvinceId};
use suriya_i18n::{Language, Localizer};
use suriya_report::{render_json, render_text, DashboardInputs, ResultsDashboard};
use suriya_survey::{appliance_summary, Wizard};

fn completed_wizard() -> Wizard {
    let mut wizard = Wizard::new();
    wizard.response_mut().set_monthly_bill(6_000);
    wizard
        .response_mut()
        .select_province(Some(ProvinceId::from_str("cmi").unwrap()));
    wizard.response_mut().set_occupants(4.0);
    wizard
        .response_mut()
        .set_appliance_quantity(Appliance::AirConditioner, 2.0);
    wizard
        .response_mut()
        .set_appliance_quantity(Appliance::Refrigerator, 1.0);
    while !wizard.is_last_step() {
        wizard.go_next();
    }
    wizard
}

#[test]
fn survey_to_dashboard_flow() {
    let wizard = completed_wizard();
    let localizer = Localizer::new(Language::En);

    // The snapshot summary reflects the edits in catalog order.
    assert_eq!(
        appliance_summary(wizard.response(), &localizer),
        "Air conditioner unit ×2, Refrigerator ×1"
    );

    // Submission hands over the real snapshot plus a stable reference id.
    let submission = wizard.submit().unwrap();
    let again = completed_wizard().submit().unwrap();
    assert_eq!(submission.reference, again.reference);

    // The dashboard consumes the submitted province and bill.
    let inputs = DashboardInputs::from_submission(&submission);
    let dashboard = ResultsDashboard::build(&inputs, &localizer);
    assert_eq!(
        dashboard.efficiency.province_name.as_deref(),
        Some("Chiang Mai")
    );
    assert_eq!(dashboard.usage.center_primary, "฿6,000");

    // Both renderings agree on the derived score.
    let text = render_text(&dashboard);
    assert!(text.contains(&format!(
        "{} / 100",
        dashboard.efficiency.overall_score
    )));

    let json: serde_json::Value =
        serde_json::from_str(&render_json(&dashboard).unwrap()).unwrap();
    assert_eq!(
        json["efficiency"]["overall_score"],
        dashboard.efficiency.overall_score
    );
}

#[test]
fn identical_inputs_render_identically() {
    let localizer = Localizer::new(Language::En);
    let inputs = DashboardInputs::from_submission(&completed_wizard().submit().unwrap());

    let first = render_text(&ResultsDashboard::build(&inputs, &localizer));
    let second = render_text(&ResultsDashboard::build(&inputs, &localizer));
    assert_eq!(first, second);
}
