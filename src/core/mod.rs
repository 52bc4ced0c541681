// src/core/mod.rs

pub mod chrome;
pub mod html_session;
pub mod links;
pub mod net;
pub mod sanitize;
pub mod session;

pub use chrome::ChromeSession;
pub use html_session::HtmlSession;
pub use net::{HttpClient, HttpGet, HttpResponse};
pub use session::{Locator, Node, Session};
