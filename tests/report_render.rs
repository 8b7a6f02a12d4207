use std::sync::Arc;

use capitolato::application::report::ReportService;
use capitolato::domain::requirements::{
    ClientInfo, ProjectPhase, ProjectRequirements, TechnicalDetails, Timeline, UiPreferences,
};
use capitolato::infra::clock::FixedClock;
use time::macros::datetime;

fn report_service() -> ReportService {
    ReportService::new(Arc::new(FixedClock(datetime!(2025-01-05 12:00 UTC))))
}

fn client() -> ClientInfo {
    ClientInfo {
        name: "Jordan Reyes".to_string(),
        company: "Reyes Logistics".to_string(),
        email: "jordan@reyeslogistics.example".to_string(),
        phone: "+1 555 0134".to_string(),
    }
}

fn requirements() -> ProjectRequirements {
    ProjectRequirements {
        title: "My Cool App".to_string(),
        problem_to_solve: "Dispatchers lose track of trucks between depots".to_string(),
        description: "A dispatch board with live truck positions".to_string(),
        target_users: "Depot dispatchers and drivers".to_string(),
        goals: "Cut missed handoffs in half".to_string(),
        core_features: vec![
            "Live map".to_string(),
            "Shift roster".to_string(),
            "Handoff checklist".to_string(),
        ],
        data_fields: vec![
            "Truck id".to_string(),
            "Driver name".to_string(),
            "Depot code".to_string(),
        ],
        admin_access: "Operations manager only".to_string(),
        file_uploads: "Route sheets as PDF".to_string(),
        ui_preferences: UiPreferences {
            design_inspiration: "Airtable".to_string(),
            theme_mode: "Light".to_string(),
            animations: "Minimal".to_string(),
            must_have_components: vec![
                "Data table".to_string(),
                "Map panel".to_string(),
                "Notifications".to_string(),
            ],
        },
        technical_details: TechnicalDetails {
            hosting: "AWS".to_string(),
            database: "PostgreSQL".to_string(),
            admin_dashboard: true,
            payments: true,
            payment_gateway: Some("Stripe".to_string()),
        },
        timeline: Timeline {
            deadline: "End of Q3 2025".to_string(),
            budget: "$15,000 - $25,000".to_string(),
            mvp_first: true,
        },
        phases: vec![
            ProjectPhase {
                name: "Requirement Analysis".to_string(),
                duration: "1 week".to_string(),
            },
            ProjectPhase {
                name: "Testing".to_string(),
                duration: "2 weeks".to_string(),
            },
            ProjectPhase {
                name: "Prototyping".to_string(),
                duration: "3 days".to_string(),
            },
        ],
    }
}

fn index_of(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` missing from rendered report"))
}

#[test]
fn rendered_report_contains_every_field_verbatim() {
    let rendered = report_service()
        .generate(&client(), &requirements())
        .expect("report renders");
    let html = &rendered.html;

    for expected in [
        "Jordan Reyes",
        "Reyes Logistics",
        "jordan@reyeslogistics.example",
        "+1 555 0134",
        "My Cool App",
        "Dispatchers lose track of trucks between depots",
        "A dispatch board with live truck positions",
        "Depot dispatchers and drivers",
        "Cut missed handoffs in half",
        "Operations manager only",
        "Route sheets as PDF",
        "Airtable",
        "Minimal",
        "AWS",
        "PostgreSQL",
        "End of Q3 2025",
        "$15,000 - $25,000",
    ] {
        index_of(html, expected);
    }
}

#[test]
fn list_elements_keep_their_input_order() {
    let rendered = report_service()
        .generate(&client(), &requirements())
        .expect("report renders");
    let html = &rendered.html;

    for ordered in [
        vec!["Live map", "Shift roster", "Handoff checklist"],
        vec!["Truck id", "Driver name", "Depot code"],
        vec!["Data table", "Map panel", "Notifications"],
        vec!["Requirement Analysis", "Testing", "Prototyping"],
    ] {
        let positions: Vec<usize> = ordered.iter().map(|item| index_of(html, item)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "items {ordered:?} rendered out of order");
    }
}

#[test]
fn sections_appear_in_the_documented_order() {
    let rendered = report_service()
        .generate(&client(), &requirements())
        .expect("report renders");
    let html = &rendered.html;

    let positions = [
        index_of(html, "Project Requirements Report"),
        index_of(html, "Client Information"),
        index_of(html, "Project Overview"),
        index_of(html, "Core Requirements"),
        index_of(html, "Data Requirements"),
        index_of(html, "UI/UX Preferences"),
        index_of(html, "Technical Specifications"),
        index_of(html, "Timeline &amp; Budget"),
        index_of(html, "Project Timeline"),
        index_of(html, "Client Approval"),
        index_of(html, "Professional Software Development Services"),
    ];
    let mut sorted = positions;
    sorted.sort_unstable();
    assert_eq!(positions, sorted, "sections rendered out of order");
}

#[test]
fn known_phase_gets_its_fixed_description_and_unknown_falls_back() {
    let rendered = report_service()
        .generate(&client(), &requirements())
        .expect("report renders");
    let html = &rendered.html;

    index_of(
        html,
        "Comprehensive testing including unit tests, integration tests, and user acceptance testing.",
    );
    index_of(html, "Project phase execution and deliverable completion.");
}

#[test]
fn payments_render_the_gateway_only_when_requested() {
    let service = report_service();

    let with_payments = service
        .generate(&client(), &requirements())
        .expect("report renders");
    index_of(&with_payments.html, "Yes - Stripe");

    let mut no_payments = requirements();
    no_payments.technical_details.payments = false;
    no_payments.technical_details.payment_gateway = Some("Stripe".to_string());
    let without = service
        .generate(&client(), &no_payments)
        .expect("report renders");
    assert!(!without.html.contains("Yes - Stripe"));
    index_of(&without.html, "Not Required");
}

#[test]
fn mvp_flag_selects_the_development_approach_phrase() {
    let service = report_service();

    let mvp = service
        .generate(&client(), &requirements())
        .expect("report renders");
    index_of(&mvp.html, "MVP First, then scale");

    let mut full = requirements();
    full.timeline.mvp_first = false;
    let rendered = service.generate(&client(), &full).expect("report renders");
    index_of(&rendered.html, "Full development");
    assert!(!rendered.html.contains("MVP First, then scale"));
}

#[test]
fn report_date_formats_as_long_month_day_year() {
    let rendered = report_service()
        .generate(&client(), &requirements())
        .expect("report renders");
    index_of(&rendered.html, "Generated on January 5, 2025");
}

#[test]
fn identical_inputs_and_clock_render_byte_identical_output() {
    let service = report_service();
    let first = service
        .generate(&client(), &requirements())
        .expect("report renders");
    let second = service
        .generate(&client(), &requirements())
        .expect("report renders");

    assert_eq!(first.html, second.html);
    assert_eq!(first.filename, second.filename);
}

#[test]
fn filename_derives_from_the_title() {
    let rendered = report_service()
        .generate(&client(), &requirements())
        .expect("report renders");
    assert_eq!(rendered.filename, "My_Cool_App_Requirements_Report.html");
}

#[test]
fn only_the_printable_variant_carries_the_auto_print_hook() {
    let service = report_service();

    let plain = service
        .generate(&client(), &requirements())
        .expect("report renders");
    assert!(!plain.html.contains("window.print()"));

    let printable = service
        .generate_printable(&client(), &requirements())
        .expect("report renders");
    index_of(&printable.html, "window.print()");
}
