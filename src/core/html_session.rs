// src/core/html_session.rs
// Session over captured pages held in memory. No JavaScript, no network:
// what you register for a URL is exactly what `goto` renders.

use std::{collections::HashMap, time::Duration};

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;
use super::session::{Locator, Node, Session};
use crate::error::SessionError;

pub struct HtmlSession {
    pages: HashMap<String, String>,
    current: Html,
    visited: Vec<String>,
}

impl Default for HtmlSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSession {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            current: Html::new_document(),
            visited: Vec::new(),
        }
    }

    /// Register the markup served for `url` (fragment included).
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    pub fn add_page(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }

    /// Every URL passed to `goto`, in order.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

fn selector(locator: &Locator) -> Result<Selector, SessionError> {
    Selector::parse(locator.as_css()).map_err(|_| SessionError::Selector(locator.to_string()))
}

fn snapshot(el: ElementRef<'_>) -> Node {
    let text = el.text().collect::<String>();
    let attributes = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Node { text: normalize_ws(&text), attributes }
}

impl Session for HtmlSession {
    fn goto(&mut self, url: &str) -> Result<(), SessionError> {
        self.visited.push(url.to_string());
        self.current = match self.pages.get(url) {
            Some(html) => Html::parse_document(html),
            None => {
                tracing::debug!(url, "No captured page, rendering blank");
                Html::new_document()
            }
        };
        Ok(())
    }

    fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Result<(), SessionError> {
        let sel = selector(locator)?;
        if self.current.select(&sel).next().is_some() {
            Ok(())
        } else {
            Err(SessionError::Timeout { locator: locator.to_string(), timeout })
        }
    }

    fn query(&mut self, locator: &Locator) -> Result<Vec<Node>, SessionError> {
        let sel = selector(locator)?;
        Ok(self.current.select(&sel).map(snapshot).collect())
    }

    fn query_within(
        &mut self,
        parent: &Locator,
        child: &Locator,
    ) -> Result<Vec<Vec<Node>>, SessionError> {
        let psel = selector(parent)?;
        let csel = selector(child)?;
        Ok(self
            .current
            .select(&psel)
            .map(|p| p.select(&csel).map(snapshot).collect())
            .collect())
    }
}
