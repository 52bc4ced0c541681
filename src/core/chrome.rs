// src/core/chrome.rs
// Headless Chrome behind the Session seam. One browser, one tab, reused for
// the whole run. Dropping the session shuts the browser down.

use std::{ffi::OsStr, path::PathBuf, sync::Arc, time::Duration};

use headless_chrome::browser::tab::NoElementFound;
use headless_chrome::{Browser, Element, LaunchOptions, Tab};

use super::session::{Locator, Node, Session};
use super::sanitize::normalize_ws;
use crate::error::SessionError;

const BLANK: &str = "about:blank";

pub struct ChromeSession {
    tab: Arc<Tab>,
    _browser: Browser,
}

/// `CHROME` env var wins; otherwise headless_chrome's own detection.
fn find_chrome() -> Option<PathBuf> {
    let path = PathBuf::from(std::env::var_os("CHROME")?);
    if path.exists() {
        tracing::debug!(path = %path.display(), "Using Chrome from CHROME env var");
        Some(path)
    } else {
        tracing::warn!(path = %path.display(), "CHROME points nowhere, using default detection");
        None
    }
}

fn browser_err(e: impl std::fmt::Display) -> SessionError {
    SessionError::Browser(e.to_string())
}

impl ChromeSession {
    pub fn launch() -> Result<Self, SessionError> {
        // Flags so Chrome also runs inside a container
        let mut builder = LaunchOptions::default_builder();
        builder
            .headless(true)
            .sandbox(false)
            .args(vec![OsStr::new("--disable-dev-shm-usage")])
            .path(find_chrome());
        let options = builder.build().map_err(browser_err)?;

        let browser = Browser::new(options).map_err(browser_err)?;
        let tab = browser.new_tab().map_err(browser_err)?;
        tracing::debug!("Browser launched");
        Ok(Self { tab, _browser: browser })
    }

    /// Explicit end of the session; same as dropping it.
    pub fn close(self) {}
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        tracing::debug!("Closing browser");
    }
}

fn snapshot(el: &Element<'_>) -> Result<Node, SessionError> {
    let text = el.get_inner_text().map_err(browser_err)?;
    // Flat [name, value, name, value, …]
    let flat = el.get_attributes().map_err(browser_err)?.unwrap_or_default();
    let attributes = flat
        .chunks_exact(2)
        .map(|kv| (kv[0].clone(), kv[1].clone()))
        .collect();
    Ok(Node { text: normalize_ws(&text), attributes })
}

/// headless_chrome reports "no matches" as an error; we want an empty list.
fn none_if_missing<T>(res: anyhow::Result<Vec<T>>) -> Result<Vec<T>, SessionError> {
    match res {
        Ok(v) => Ok(v),
        Err(e) if e.downcast_ref::<NoElementFound>().is_some() => Ok(Vec::new()),
        Err(e) => Err(browser_err(e)),
    }
}

impl Session for ChromeSession {
    fn goto(&mut self, url: &str) -> Result<(), SessionError> {
        tracing::debug!(url, "Navigating");
        let nav = |e: anyhow::Error| SessionError::Navigation {
            url: url.to_string(),
            reason: format!("{e:#}"),
        };
        // Listview pages differ only by fragment, which stays in the same
        // document and never finishes a navigation. Going through a blank page
        // forces a full load that can be waited on.
        self.tab
            .navigate_to(BLANK)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(nav)?;
        self.tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(nav)?;
        Ok(())
    }

    fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Result<(), SessionError> {
        self.tab
            .wait_for_element_with_custom_timeout(locator.as_css(), timeout)
            .map(|_| ())
            .map_err(|e| {
                tracing::debug!(%locator, error = %e, "Wait failed");
                SessionError::Timeout { locator: locator.to_string(), timeout }
            })
    }

    fn query(&mut self, locator: &Locator) -> Result<Vec<Node>, SessionError> {
        let elements = none_if_missing(self.tab.find_elements(locator.as_css()))?;
        elements.iter().map(snapshot).collect()
    }

    fn query_within(
        &mut self,
        parent: &Locator,
        child: &Locator,
    ) -> Result<Vec<Vec<Node>>, SessionError> {
        let parents = none_if_missing(self.tab.find_elements(parent.as_css()))?;
        let mut out = Vec::with_capacity(parents.len());
        for p in &parents {
            let children = none_if_missing(p.find_elements(child.as_css()))?;
            out.push(children.iter().map(snapshot).collect::<Result<Vec<_>, _>>()?);
        }
        Ok(out)
    }
}
