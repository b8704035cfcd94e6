//! A scripted, in-memory document for unit tests. Nodes can appear, become visible or go
//! stale at fixed offsets on the (paused) tokio clock.

use crate::document::{Document, Element};
use crate::error::{DriverError, ErrorKind};
use crate::locator::Locator;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub(crate) struct FakeNode {
    locator: Locator,
    parent: Option<usize>,
    appears_after: Duration,
    visible_after: Duration,
    hidden: bool,
    enabled: bool,
    detached: bool,
    intercepts_clicks: bool,
    ignores_clear: bool,
    text: String,
    attributes: HashMap<String, String>,
}

impl FakeNode {
    pub(crate) fn new(locator: Locator) -> Self {
        Self {
            locator,
            parent: None,
            appears_after: Duration::ZERO,
            visible_after: Duration::ZERO,
            hidden: false,
            enabled: true,
            detached: false,
            intercepts_clicks: false,
            ignores_clear: false,
            text: String::new(),
            attributes: HashMap::new(),
        }
    }

    pub(crate) fn appears_after(mut self, delay: Duration) -> Self {
        self.appears_after = delay;
        self
    }

    pub(crate) fn visible_after(mut self, delay: Duration) -> Self {
        self.visible_after = delay;
        self
    }

    pub(crate) fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub(crate) fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Native clicks land on an overlay instead of this node.
    pub(crate) fn intercepts_clicks(mut self) -> Self {
        self.intercepts_clicks = true;
        self
    }

    /// A controlled input whose framework restores the value after a plain clear.
    pub(crate) fn ignores_clear(mut self) -> Self {
        self.ignores_clear = true;
        self
    }

    pub(crate) fn text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    pub(crate) fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    pub(crate) fn child_of(mut self, parent: usize) -> Self {
        self.parent = Some(parent);
        self
    }
}

#[derive(Debug)]
struct State {
    started: Instant,
    nodes: Vec<FakeNode>,
    url: String,
    title: String,
    events: Vec<String>,
    query_error: Option<DriverError>,
    queries: usize,
}

impl State {
    fn attached(&self, id: usize) -> bool {
        let node = &self.nodes[id];
        !node.detached && self.started.elapsed() >= node.appears_after
    }

    fn live(&self, id: usize) -> Result<&FakeNode, DriverError> {
        if self.attached(id) {
            Ok(&self.nodes[id])
        } else {
            Err(DriverError::stale(&self.nodes[id].locator))
        }
    }

    fn is_descendant(&self, id: usize, ancestor: usize) -> bool {
        let mut current = self.nodes[id].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent].parent;
        }
        false
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FakePage {
    state: Arc<Mutex<State>>,
}

impl FakePage {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                started: Instant::now(),
                nodes: Vec::new(),
                url: "about:blank".to_owned(),
                title: String::new(),
                events: Vec::new(),
                query_error: None,
                queries: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("fake page lock poisoned")
    }

    pub(crate) fn add(&self, node: FakeNode) -> usize {
        let mut state = self.lock();
        state.nodes.push(node);
        state.nodes.len() - 1
    }

    pub(crate) fn element(&self, id: usize) -> FakeElement {
        FakeElement {
            id,
            state: Arc::clone(&self.state),
        }
    }

    pub(crate) fn detach(&self, id: usize) {
        self.lock().nodes[id].detached = true;
    }

    pub(crate) fn show(&self, id: usize) {
        self.lock().nodes[id].hidden = false;
    }

    pub(crate) fn set_attribute(&self, id: usize, name: &str, value: &str) {
        self.lock().nodes[id]
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    pub(crate) fn set_location(&self, url: &str, title: &str) {
        let mut state = self.lock();
        state.url = url.to_owned();
        state.title = title.to_owned();
    }

    /// Every query fails with `err` until cleared with `None`.
    pub(crate) fn fail_queries_with(&self, err: Option<DriverError>) {
        self.lock().query_error = err;
    }

    /// Number of document-level queries issued so far.
    pub(crate) fn queries(&self) -> usize {
        self.lock().queries
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.lock().events.clone()
    }

    fn record(&self, event: String) {
        self.lock().events.push(event);
    }
}

impl Document for FakePage {
    type Element = FakeElement;

    async fn query_all(&self, locator: &Locator) -> Result<Vec<FakeElement>, DriverError> {
        let mut state = self.lock();
        state.queries += 1;
        if let Some(err) = &state.query_error {
            return Err(err.clone());
        }
        Ok((0..state.nodes.len())
            .filter(|&id| state.nodes[id].locator == *locator && state.attached(id))
            .map(|id| self.element(id))
            .collect())
    }

    async fn script_click(&self, element: &FakeElement) -> Result<(), DriverError> {
        let locator = element.with_node(|node| Ok(node.locator.clone()))?;
        self.record(format!("script-click {locator}"));
        Ok(())
    }

    async fn hover(&self, element: &FakeElement) -> Result<(), DriverError> {
        let locator = element.with_node(|node| Ok(node.locator.clone()))?;
        self.record(format!("hover {locator}"));
        Ok(())
    }

    async fn navigate_to(&self, url: &str) -> Result<(), DriverError> {
        self.record(format!("navigate {url}"));
        self.lock().url = url.to_owned();
        Ok(())
    }

    async fn reload(&self) -> Result<(), DriverError> {
        self.record("reload".to_owned());
        Ok(())
    }

    async fn page_url(&self) -> Result<String, DriverError> {
        Ok(self.lock().url.clone())
    }

    async fn page_title(&self) -> Result<String, DriverError> {
        Ok(self.lock().title.clone())
    }
}

#[derive(Clone)]
pub(crate) struct FakeElement {
    id: usize,
    state: Arc<Mutex<State>>,
}

impl Debug for FakeElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FakeElement({})", self.id)
    }
}

impl FakeElement {
    fn with_node<T>(
        &self,
        f: impl FnOnce(&FakeNode) -> Result<T, DriverError>,
    ) -> Result<T, DriverError> {
        let state = self.state.lock().expect("fake page lock poisoned");
        f(state.live(self.id)?)
    }

    fn with_node_mut<T>(&self, f: impl FnOnce(&mut FakeNode) -> T) -> Result<T, DriverError> {
        let mut state = self.state.lock().expect("fake page lock poisoned");
        state.live(self.id)?;
        Ok(f(&mut state.nodes[self.id]))
    }

    fn record(&self, event: String) {
        self.state
            .lock()
            .expect("fake page lock poisoned")
            .events
            .push(event);
    }
}

impl Element for FakeElement {
    async fn is_visible(&self) -> Result<bool, DriverError> {
        let state = self.state.lock().expect("fake page lock poisoned");
        let node = state.live(self.id)?;
        Ok(!node.hidden && state.started.elapsed() >= node.visible_after)
    }

    async fn is_enabled(&self) -> Result<bool, DriverError> {
        self.with_node(|node| Ok(node.enabled))
    }

    async fn visible_text(&self) -> Result<String, DriverError> {
        self.with_node(|node| Ok(node.text.clone()))
    }

    async fn attribute_value(&self, name: &str) -> Result<Option<String>, DriverError> {
        self.with_node(|node| Ok(node.attributes.get(name).cloned()))
    }

    async fn press(&self) -> Result<(), DriverError> {
        let locator = self.with_node(|node| {
            if node.intercepts_clicks {
                return Err(DriverError::new(
                    ErrorKind::ElementNotInteractable,
                    "element click intercepted",
                ));
            }
            Ok(node.locator.clone())
        })?;
        self.record(format!("click {locator}"));
        Ok(())
    }

    async fn clear_value(&self) -> Result<(), DriverError> {
        self.with_node_mut(|node| {
            if !node.ignores_clear {
                node.attributes.insert("value".to_owned(), String::new());
            }
        })
    }

    async fn select_all_and_delete(&self) -> Result<(), DriverError> {
        self.with_node_mut(|node| {
            node.attributes.insert("value".to_owned(), String::new());
        })
    }

    async fn type_text(&self, text: &str) -> Result<(), DriverError> {
        self.with_node_mut(|node| {
            node.attributes
                .entry("value".to_owned())
                .or_default()
                .push_str(text);
        })
    }

    async fn press_enter(&self) -> Result<(), DriverError> {
        let locator = self.with_node(|node| Ok(node.locator.clone()))?;
        self.record(format!("enter {locator}"));
        Ok(())
    }

    async fn children(&self, locator: &Locator) -> Result<Vec<FakeElement>, DriverError> {
        let state = self.state.lock().expect("fake page lock poisoned");
        state.live(self.id)?;
        Ok((0..state.nodes.len())
            .filter(|&id| {
                state.nodes[id].locator == *locator
                    && state.attached(id)
                    && state.is_descendant(id, self.id)
            })
            .map(|id| FakeElement {
                id,
                state: Arc::clone(&self.state),
            })
            .collect())
    }
}
