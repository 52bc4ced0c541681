// tests/pipeline.rs
//
// Whole pipeline against captured pages: enumerate → fetch → extract → resolve.
//
mod common;

use common::*;
use rune_scrape::config::{OverrideTable, ScrapeOptions};
use rune_scrape::core::{HtmlSession, Session};
use rune_scrape::error::{EnumerateError, SessionError};
use rune_scrape::file::records_to_string;
use rune_scrape::scrape;

/// Five items, one per scenario:
/// 1: [100, 200], 100 overridden to 999
/// 2: [150] only
/// 3: [300, 310], related 301
/// 4: [400, 401], no related rows
/// 5: tooltip 404
fn fixture() -> (ScrapeOptions, rune_scrape::core::HtmlSession, FakeHttp, OverrideTable) {
    let opts = ScrapeOptions::default();
    let mut session = listing_session(&opts, 5, &[vec![1, 2, 3, 4, 5]]);
    session.add_page(opts.see_also_url(300), see_also_page(&[301, 302]));
    session.add_page(opts.see_also_url(400), see_also_page(&[]));
    // 100 has a page too; it must never be visited
    session.add_page(opts.see_also_url(100), see_also_page(&[555]));

    let http = FakeHttp::default()
        .with(opts.tooltip_url(1), 200, &tooltip(&[100, 200]))
        .with(opts.tooltip_url(2), 200, &tooltip(&[150]))
        .with(opts.tooltip_url(3), 200, &tooltip(&[300, 310]))
        .with(opts.tooltip_url(4), 200, &tooltip(&[400, 401]));

    let overrides = OverrideTable::from_pairs([(100, 999)]);
    (opts, session, http, overrides)
}

#[test]
fn scenarios_end_to_end() {
    let (opts, mut session, http, overrides) = fixture();
    let mut rec = Recorder::default();

    let records = scrape::run(&mut session, &http, &opts, &overrides, Some(&mut rec)).unwrap();

    // A and C survive, in listing order
    assert_eq!(
        records_to_string(&records),
        format!("999,{}\n301,{}", tooltip(&[100, 200]), tooltip(&[300, 310]))
    );
    assert_eq!(rec.done, vec![1, 3]);
    let skipped: Vec<u32> = rec.skipped.iter().map(|(id, _)| *id).collect();
    assert_eq!(skipped, vec![2, 4, 5]);
    assert!(rec.finished);
}

#[test]
fn skip_reasons_are_reported() {
    let (opts, mut session, http, overrides) = fixture();
    let mut rec = Recorder::default();
    scrape::run(&mut session, &http, &opts, &overrides, Some(&mut rec)).unwrap();

    let reason = |id: u32| rec.skipped.iter().find(|(i, _)| *i == id).map(|(_, r)| r.clone()).unwrap();
    assert!(reason(2).contains("only 1 embedded"));
    assert!(reason(4).contains("no related spell ids found for spell 400"));
    assert!(reason(5).contains("status code 404"));
}

#[test]
fn override_never_touches_the_session() {
    let (opts, mut session, http, overrides) = fixture();
    scrape::run(&mut session, &http, &opts, &overrides, None).unwrap();

    assert!(!session.visited().contains(&opts.see_also_url(100)));
    assert!(session.visited().contains(&opts.see_also_url(300)));
}

#[test]
fn failed_fetch_stops_before_lookup() {
    let (opts, mut session, http, overrides) = fixture();
    let resolver = scrape::EffectResolver::new(&overrides, &opts);
    let before = session.visited().len();

    let err = scrape::resolve_candidate(&mut session, &http, &opts, &resolver, 5).unwrap_err();
    assert!(err.to_string().contains("404"));
    assert_eq!(session.visited().len(), before);
}

/// Item 7 with [700, 701] whose tooltip request is set up by `http`.
fn single_item(
    http: impl FnOnce(&ScrapeOptions) -> FakeHttp,
) -> (ScrapeOptions, HtmlSession, FakeHttp) {
    let opts = ScrapeOptions::default();
    let mut session = listing_session(&opts, 1, &[vec![7]]);
    session.add_page(opts.see_also_url(700), see_also_page(&[702]));
    let http = http(&opts);
    (opts, session, http)
}

fn assert_fetch_skip(opts: &ScrapeOptions, session: &mut HtmlSession, http: &FakeHttp) {
    let mut rec = Recorder::default();
    let records = scrape::run(session, http, opts, &OverrideTable::empty(), Some(&mut rec)).unwrap();

    assert!(records.is_empty());
    assert_eq!(rec.skipped.len(), 1);
    assert_eq!(rec.skipped[0].0, 7);
    assert!(rec.skipped[0].1.starts_with("tooltip request for item 7 failed"));
    // Listing only: the spell page is never opened
    assert!(!session.visited().contains(&opts.see_also_url(700)));
    assert_eq!(session.visited(), [opts.listing_url(None), opts.listing_url(Some(0))]);
}

#[test]
fn transport_error_drops_the_item() {
    let (opts, mut session, http) = single_item(|o| FakeHttp::default().unreachable(o.tooltip_url(7)));
    assert_fetch_skip(&opts, &mut session, &http);
}

#[test]
fn empty_tooltip_drops_the_item() {
    let (opts, mut session, http) = single_item(|o| FakeHttp::default().with(o.tooltip_url(7), 200, "  \n"));
    assert_fetch_skip(&opts, &mut session, &http);

    let (opts, _, http) = single_item(|o| FakeHttp::default().with(o.tooltip_url(7), 200, ""));
    let err = scrape::fetch_tooltip(&http, &opts, 7).unwrap_err();
    assert!(err.to_string().ends_with("empty body"));
}

#[test]
fn payload_is_the_items_own_tooltip() {
    let (opts, mut session, http, overrides) = fixture();
    let records = scrape::run(&mut session, &http, &opts, &overrides, None).unwrap();

    let fetched = [tooltip(&[100, 200]), tooltip(&[300, 310])];
    for r in &records {
        assert!(r.effect > 0);
        assert!(fetched.contains(&r.payload));
    }
}

#[test]
fn lookup_without_section_is_dropped() {
    let opts = ScrapeOptions::default();
    let mut session = listing_session(&opts, 1, &[vec![7]]);
    session.add_page(opts.see_also_url(700), r#"<div id="data-tree-switcher"></div><p>new layout</p>"#);
    let http = FakeHttp::default().with(opts.tooltip_url(7), 200, &tooltip(&[700, 701]));
    let mut rec = Recorder::default();

    let records = scrape::run(&mut session, &http, &opts, &OverrideTable::empty(), Some(&mut rec)).unwrap();
    assert!(records.is_empty());
    assert!(rec.skipped[0].1.contains("no related spell section"));
}

#[test]
fn base_policy_is_swappable() {
    let mut opts = ScrapeOptions::default();
    opts.base_policy.index = 1;
    let mut session = listing_session(&opts, 1, &[vec![3]]);
    session.add_page(opts.see_also_url(310), see_also_page(&[311]));
    let http = FakeHttp::default().with(opts.tooltip_url(3), 200, &tooltip(&[300, 310]));

    let records = scrape::run(&mut session, &http, &opts, &OverrideTable::empty(), None).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].effect, 311);
}

#[test]
fn missing_listing_is_fatal() {
    let opts = ScrapeOptions::default();
    let mut session = rune_scrape::core::HtmlSession::new();
    let http = FakeHttp::default();

    let err = scrape::run(&mut session, &http, &opts, &OverrideTable::builtin(), None).unwrap_err();
    assert!(matches!(err, EnumerateError::Session(SessionError::Timeout { .. })));
}

#[test]
fn session_trait_object_is_enough() {
    let (opts, session, http, overrides) = fixture();
    let mut boxed: Box<dyn Session> = Box::new(session);
    let records = scrape::run(boxed.as_mut(), &http, &opts, &overrides, None).unwrap();
    assert_eq!(records.len(), 2);
}
