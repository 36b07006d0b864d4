//! Browser glue.
//!
//! Thin wrappers over web-sys and gloo: page measurements, smooth scrolling,
//! native listeners, the section intersection observer, and the browser
//! implementations of the core `Timer` and `Transport` traits.
//!
//! Missing elements are never errors here. Lookups return `Option` or a
//! neutral value and the feature that needed them simply does not start.

use std::time::Duration;

use futures::channel::mpsc::UnboundedSender;
use gloo::events::EventListener;
use gloo::net::http::Request;
use portfolio_core::{
    RevealConfig, SectionBand, Submission, Timer, Transport, TransportError, ACCEPT_JSON,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Node, ScrollBehavior, ScrollToOptions,
};

use crate::context::PageEvent;

pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

pub fn document() -> Option<web_sys::Document> {
    window()?.document()
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Current vertical scroll offset
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Whether the page is in a background tab
pub fn document_hidden() -> bool {
    document().map(|d| d.hidden()).unwrap_or(false)
}

fn html_element(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Rendered height of the fixed header
pub fn header_height() -> f64 {
    html_element("header")
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0)
}

/// Document offset of the section with `id`
pub fn section_top(id: &str) -> Option<f64> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|section| section.offset_top() as f64)
}

/// Vertical bands of every `.section`, measured live
pub fn section_bands() -> Vec<SectionBand> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(".section").ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBand::new(
                section.id(),
                section.offset_top() as f64,
                section.offset_height() as f64,
            )
        })
        .collect()
}

/// Whether a click on `target` landed outside the nav list and the menu
/// toggle. Targets that are not nodes count as outside.
fn is_outside_nav(target: Option<web_sys::EventTarget>) -> bool {
    let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
        return true;
    };
    let Some(document) = document() else {
        return true;
    };

    ["nav ul", ".menu-toggle"].iter().all(|selector| {
        match document.query_selector(selector).ok().flatten() {
            Some(element) => !element.contains(Some(&node)),
            None => true,
        }
    })
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Timer backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        gloo::timers::future::sleep(duration).await;
    }
}

/// Posts the contact form as `FormData` with `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_form(&self, submission: &Submission) -> Result<u16, TransportError> {
        let body = web_sys::FormData::new().map_err(|e| TransportError::Request(js_error(e)))?;
        for (name, value) in &submission.fields {
            body.append_with_str(name, value)
                .map_err(|e| TransportError::Request(js_error(e)))?;
        }

        let request = Request::post(&submission.endpoint)
            .header("Accept", ACCEPT_JSON)
            .body(body)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(response.status())
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Intersection observer over every `.section`
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Report each `.section` once, the first time it intersects the viewport.
pub fn observe_sections(
    config: &RevealConfig,
    mut on_visible: impl FnMut(String) + 'static,
) -> Option<SectionObserver> {
    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target.id());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!(error = %js_error(e), "intersection observer unavailable");
                return None;
            }
        };

    let sections = document()?.query_selector_all(".section").ok()?;
    for i in 0..sections.length() {
        if let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&section);
        }
    }
    tracing::debug!(count = sections.length(), "observing sections");

    Some(SectionObserver {
        observer,
        _callback: callback,
    })
}

/// Native listeners feeding [`PageEvent`]s into the app.
///
/// Dropping this detaches everything.
#[derive(Default)]
pub struct PageListeners {
    _listeners: Vec<EventListener>,
    _observer: Option<SectionObserver>,
}

impl PageListeners {
    pub fn attach(events: UnboundedSender<PageEvent>, reveal: &RevealConfig) -> Self {
        let mut listeners = Vec::new();

        match window() {
            Some(window) => {
                let tx = events.clone();
                listeners.push(EventListener::new(&window, "scroll", move |_| {
                    let _ = tx.unbounded_send(PageEvent::Scrolled);
                }));

                let tx = events.clone();
                listeners.push(EventListener::new(&window, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        let _ = tx.unbounded_send(PageEvent::KeyDown(event.key()));
                    }
                }));
            }
            None => tracing::warn!("no window, scroll and key listeners not attached"),
        }

        match document() {
            Some(document) => {
                let tx = events.clone();
                listeners.push(EventListener::new(&document, "click", move |event| {
                    if is_outside_nav(event.target()) {
                        let _ = tx.unbounded_send(PageEvent::OutsideClick);
                    }
                }));

                let tx = events.clone();
                listeners.push(EventListener::new(&document, "visibilitychange", move |_| {
                    let _ = tx.unbounded_send(PageEvent::VisibilityChanged);
                }));
            }
            None => tracing::warn!("no document, click and visibility listeners not attached"),
        }

        let observer = observe_sections(reveal, move |id| {
            let _ = events.unbounded_send(PageEvent::SectionVisible(id));
        });

        Self {
            _listeners: listeners,
            _observer: observer,
        }
    }
}
