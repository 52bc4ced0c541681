// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use rune_scrape::config::ScrapeOptions;
use rune_scrape::core::{HtmlSession, HttpGet, HttpResponse};
use rune_scrape::error::NetError;
use rune_scrape::progress::Progress;

/// Canned tooltip endpoint. Unknown URLs answer 404.
#[derive(Default)]
pub struct FakeHttp {
    responses: HashMap<String, (u16, String)>,
    unreachable: HashSet<String>,
}

impl FakeHttp {
    pub fn with(mut self, url: String, status: u16, body: &str) -> Self {
        self.responses.insert(url, (status, body.to_string()));
        self
    }

    /// `url` fails before any response arrives.
    pub fn unreachable(mut self, url: String) -> Self {
        self.unreachable.insert(url);
        self
    }
}

/// A real transport-level error, built without touching the network.
fn transport_error() -> NetError {
    let err = reqwest::blocking::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    NetError::Request(err)
}

impl HttpGet for FakeHttp {
    fn get(&self, url: &str) -> Result<HttpResponse, NetError> {
        if self.unreachable.contains(url) {
            return Err(transport_error());
        }
        let (status, body) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or((404, "Not Found".to_string()));
        Ok(HttpResponse { status, body })
    }
}

#[derive(Default)]
pub struct Recorder {
    pub lines: Vec<String>,
    pub done: Vec<u32>,
    pub skipped: Vec<(u32, String)>,
    pub finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, id: u32) {
        self.done.push(id);
    }
    fn item_skipped(&mut self, id: u32, reason: &str) {
        self.skipped.push((id, reason.to_string()));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

pub fn row(href: &str) -> String {
    format!(r#"<tr class="listview-row"><td><a class="listview-cleartext" href="{href}">x</a></td></tr>"#)
}

/// Listview page: `total` in the nav, one row per id.
pub fn listing_page(total: usize, ids: &[u32]) -> String {
    let rows: String = ids.iter().map(|id| row(&format!("/classic-ptr/item={id}/soul"))).collect();
    format!(
        r#"<div id="data-tree-switcher"></div>
           <div id="lv-items">
             <div class="listview-nav"><span>1 - 50 of <b>{total}</b></span></div>
             <table>{rows}</table>
           </div>"#
    )
}

/// Spell page whose "See also" tab lists `related` spells.
pub fn see_also_page(related: &[u32]) -> String {
    let rows: String = related.iter().map(|id| row(&format!("/classic-ptr/spell={id}/effect"))).collect();
    format!(
        r#"<div id="data-tree-switcher"></div>
           <div id="tab-see-also-other"><table>{rows}</table></div>"#
    )
}

/// Session serving a listing split into pages of `opts.page_size`.
pub fn listing_session(opts: &ScrapeOptions, total: usize, pages: &[Vec<u32>]) -> HtmlSession {
    let first = pages.first().cloned().unwrap_or_default();
    let mut s = HtmlSession::new().with_page(opts.listing_url(None), listing_page(total, &first));
    for (i, ids) in pages.iter().enumerate() {
        s.add_page(opts.listing_url(Some(i * opts.page_size)), listing_page(total, ids));
    }
    s
}

pub fn tooltip(spells: &[u32]) -> String {
    let links: String = spells
        .iter()
        .map(|id| format!(r#"<a href=\"\/classic-ptr\/spell={id}\">s</a>"#))
        .collect();
    format!(r#"{{"name":"Soul","tooltip":"<table>{links}</table>"}}"#)
}
