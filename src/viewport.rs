//! Browser-facing half of the scroll spy: smooth scrolling to anchors and
//! intersection observation. Everything above this module only sees
//! [`ScrollTarget`] and [`VisibilitySample`], so state transitions can be
//! exercised without a DOM.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Something that can bring a named anchor into view.
pub trait ScrollTarget {
    /// Starts scrolling towards `anchor` and returns whether the anchor
    /// exists. The scroll itself is not awaited.
    fn scroll_to(&self, anchor: &str) -> bool;
}

/// Scrolls the live document with the native smooth-scroll animation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DocumentScroll;

impl ScrollTarget for DocumentScroll {
    fn scroll_to(&self, anchor: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(anchor));

        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// One intersection report for an observed section.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilitySample {
    pub id: String,
    pub intersecting: bool,
    pub ratio: f64,
}

impl VisibilitySample {
    fn from_entry(entry: &IntersectionObserverEntry) -> Self {
        Self {
            id: entry.target().id(),
            intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        }
    }
}

/// Ids of the samples that count as an entry into the observed band, in
/// delivery order. Callers apply them one after another, so the last one wins.
pub fn entering_ids(samples: &[VisibilitySample], threshold: f64) -> Vec<&str> {
    samples
        .iter()
        .filter(|sample| sample.intersecting && sample.ratio >= threshold && !sample.id.is_empty())
        .map(|sample| sample.id.as_str())
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: &'static str,
    pub threshold: f64,
}

#[derive(Error, Debug)]
pub enum ViewportError {
    #[error("no browser document available")]
    NoDocument,
    #[error("IntersectionObserver unavailable: {0}")]
    Observer(String),
}

/// Owns an `IntersectionObserver` together with the closure it calls back
/// into. Dropping it disconnects the observer.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new<F>(options: ObserverOptions, mut on_samples: F) -> Result<Self, ViewportError>
    where
        F: FnMut(Vec<VisibilitySample>) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let samples: Vec<VisibilitySample> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| VisibilitySample::from_entry(&entry))
                .collect();
            if !samples.is_empty() {
                on_samples(samples);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| ViewportError::Observer(format!("{:?}", err)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Observes every element with one of the given ids. Missing elements are
    /// skipped; returns how many were found.
    pub fn observe_ids<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Result<usize, ViewportError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(ViewportError::NoDocument)?;

        let mut observed = 0;
        for id in ids {
            match document.get_element_by_id(id) {
                Some(element) => {
                    self.observe(&element);
                    observed += 1;
                }
                None => log::debug!("no element with id {} to observe", id),
            }
        }
        Ok(observed)
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, intersecting: bool, ratio: f64) -> VisibilitySample {
        VisibilitySample {
            id: id.to_string(),
            intersecting,
            ratio,
        }
    }

    #[test]
    fn only_intersecting_samples_are_reported() {
        let samples = vec![
            sample("seo", false, 0.0),
            sample("keywords", true, 0.2),
            sample("content", false, 0.0),
        ];
        assert_eq!(entering_ids(&samples, 0.0), vec!["keywords"]);
    }

    #[test]
    fn delivery_order_is_kept() {
        let samples = vec![sample("growth", true, 0.1), sample("metrics", true, 0.05)];
        assert_eq!(entering_ids(&samples, 0.0), vec!["growth", "metrics"]);
    }

    #[test]
    fn threshold_filters_small_intersections() {
        let samples = vec![sample("growth", true, 0.3), sample("metrics", true, 0.6)];
        assert_eq!(entering_ids(&samples, 0.5), vec!["metrics"]);
    }

    #[test]
    fn anonymous_targets_are_ignored() {
        let samples = vec![sample("", true, 1.0)];
        assert!(entering_ids(&samples, 0.0).is_empty());
    }
}
