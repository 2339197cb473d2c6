// src/core/net.rs

// Blocking HTTP(S) GET with bounded connect and read timeouts.

use std::{error::Error as _, fs, io};

use crate::config::consts::{ACCEPT_LANGUAGE, USER_AGENT};
use crate::config::options::{FetchOptions, Source};
use crate::error::FetchError;

/// Load the page HTML from wherever the options point.
pub fn load_source(fetch: &FetchOptions) -> Result<String, FetchError> {
    match &fetch.source {
        Source::Remote(url) => http_get(url, fetch),
        Source::LocalFile(path) => {
            logf!("Fetch: Reading local page {}", path.display());
            fs::read_to_string(path)
                .map_err(|source| FetchError::ReadFile { path: path.clone(), source })
        }
    }
}

pub fn http_get(url: &str, fetch: &FetchOptions) -> Result<String, FetchError> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(fetch.connect_timeout)
        .timeout_read(fetch.read_timeout)
        .user_agent(USER_AGENT)
        .build();

    logf!(
        "Fetch: GET {url} (connect={:?}, read={:?})",
        fetch.connect_timeout, fetch.read_timeout
    );

    let resp = match agent.get(url).set("Accept-Language", ACCEPT_LANGUAGE).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, resp)) => {
            check_status(url, code, resp.status_text())?;
            resp
        }
        Err(ureq::Error::Transport(t)) => {
            loge!("Fetch: {t}");
            return Err(classify_transport(url, t));
        }
    };
    check_status(url, resp.status(), resp.status_text())?;

    let body = resp.into_string().map_err(|source| {
        loge!("Fetch: Body read failed: {source}");
        if is_timeout(&source) {
            FetchError::Timeout { url: s!(url) }
        } else {
            FetchError::Body { url: s!(url), source }
        }
    })?;

    logf!("Fetch: OK {} bytes", body.len());
    Ok(body)
}

/// Only a 2xx response carries the chart page.
fn check_status(url: &str, code: u16, text: &str) -> Result<(), FetchError> {
    if (200..300).contains(&code) {
        return Ok(());
    }
    loge!("Fetch: HTTP {code} {text} from {url}");
    Err(FetchError::Status { url: s!(url), code, text: s!(text) })
}

fn classify_transport(url: &str, t: ureq::Transport) -> FetchError {
    let timed_out = t
        .source()
        .and_then(|e| e.downcast_ref::<io::Error>())
        .is_some_and(is_timeout);

    if timed_out {
        FetchError::Timeout { url: s!(url) }
    } else {
        FetchError::Transport { url: s!(url), source: Box::new(t) }
    }
}

fn is_timeout(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}
