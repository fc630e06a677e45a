use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::{DisplayPrecision, ProgressBar};

use super::ProgressMeter;
use super::test_harness::{StubApi, ViewHarness, drive_dom, question};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_preload_state() {
    let mut harness = ViewHarness::new(Arc::new(StubApi::with_questions(vec![question(
        "geo", "Oslo is in Norway", "",
    )])));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading questions..."), "missing preload text in {html}");
    assert!(html.contains("trueButton"), "missing answer button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_loaded_question() {
    let mut harness = ViewHarness::new(Arc::new(StubApi::with_questions(vec![
        question("geo", "Oslo is in Norway", "TRUE"),
        question("bio", "Whales are fish", ""),
    ])));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("[bio] Whales are fish"), "missing question in {html}");
    assert!(html.contains("50.00"), "missing answered percentage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_connection_error() {
    let mut harness = ViewHarness::new(Arc::new(StubApi::unreachable()));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Unable to connect to the backend"),
        "missing error in {html}"
    );
}

#[component]
fn FullMeter() -> Element {
    rsx! {
        ProgressMeter {
            metric_id: "totalAccuracy",
            title: "Total accuracy".to_string(),
            bar: Some(ProgressBar::new(100.0, DisplayPrecision::Hundredths)),
        }
    }
}

#[test]
fn progress_meter_renders_fill_and_label() {
    let mut dom = VirtualDom::new(FullMeter);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("totalAccuracyFill"), "missing fill in {html}");
    assert!(html.contains("100.00%"), "missing label in {html}");
    assert!(html.contains("rgb(0, 255, 0)"), "missing color in {html}");
}
