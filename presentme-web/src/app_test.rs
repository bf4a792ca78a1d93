//! Browser-rendered checks for the view layer.
//!
//! Renders presentational components to markup and asserts on the produced
//! HTML, covering the states the list body can land in.

use wasm_bindgen_test::*;
use yew::{Callback, LocalServerRenderer};

use crate::pages::{PendingListView, PendingListViewProps};
use shared::models::{InstituteStatus, InstituteSummary};

wasm_bindgen_test_configure!(run_in_browser);

fn summary(id: &str, name: &str) -> InstituteSummary {
    InstituteSummary {
        institution_id: id.to_string(),
        institution_name: name.to_string(),
        status: InstituteStatus::Pending,
        kind: "Engineering College".to_string(),
        address: "14 Lakeview Road, Pune".to_string(),
        email_id: "office@meridian.example".to_string(),
        phone: "+91 98200 00000".to_string(),
        first_name: "Rohan".to_string(),
        last_name: "Mehta".to_string(),
        expected_students: 1200,
        expected_teachers: 80,
        bio: "Autonomous engineering college established in 1998.".to_string(),
        created_at: "2024-10-18".to_string(),
        profile_pic_url: None,
        website: None,
        aadhar_url: None,
        designation_id_url: None,
    }
}

async fn render_list(props: PendingListViewProps) -> String {
    LocalServerRenderer::<PendingListView>::with_props(props)
        .render()
        .await
}

#[wasm_bindgen_test]
async fn empty_pending_list_renders_the_empty_message() {
    let rendered = render_list(PendingListViewProps {
        loading: false,
        error: None,
        institutes: vec![],
        on_view: Callback::noop(),
    })
    .await;

    assert!(rendered.contains("No pending institutes found."));
}

#[wasm_bindgen_test]
async fn loading_list_shows_the_spinner() {
    let rendered = render_list(PendingListViewProps {
        loading: true,
        error: None,
        institutes: vec![],
        on_view: Callback::noop(),
    })
    .await;

    assert!(rendered.contains("animate-spin"));
    assert!(!rendered.contains("No pending institutes found."));
}

#[wasm_bindgen_test]
async fn fetch_failure_renders_inline() {
    let rendered = render_list(PendingListViewProps {
        loading: false,
        error: Some("request failed: connection refused".to_string()),
        institutes: vec![summary("inst-001", "Meridian Engineering College")],
        on_view: Callback::noop(),
    })
    .await;

    assert!(rendered.contains("request failed: connection refused"));
    assert!(!rendered.contains("Meridian Engineering College"));
}

#[wasm_bindgen_test]
async fn populated_list_renders_review_cards() {
    let rendered = render_list(PendingListViewProps {
        loading: false,
        error: None,
        institutes: vec![
            summary("inst-001", "Meridian Engineering College"),
            summary("inst-002", "Lakeside Polytechnic"),
        ],
        on_view: Callback::noop(),
    })
    .await;

    assert!(rendered.contains("Meridian Engineering College"));
    assert!(rendered.contains("Lakeside Polytechnic"));
    assert!(rendered.contains("View Details"));
    assert!(rendered.contains("Rohan Mehta"));
    assert!(!rendered.contains("No pending institutes found."));
}
