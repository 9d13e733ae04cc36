use crate::errors::{Error, Result};

use std::io::{BufReader, Cursor};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    Empty(RawElement),
    Start(RawElement),
    End(String),
    Comment(String),
    Text(String),
    CData(String),
    Other(super::RawXmlEvent),
}

impl EventKind {
    /// True for text consisting only of whitespace, e.g. indentation.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, EventKind::Text(t) if t.trim().is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub event: EventKind,
    /// source line on which the event starts
    pub line: usize,
}

/// Element name and attributes, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement(pub String, pub Vec<(String, String)>);

impl RawElement {
    pub fn new(name: &str, attrs: Vec<(String, String)>) -> Self {
        Self(name.to_string(), attrs)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn get_attrs(&self) -> &Vec<(String, String)> {
        &self.1
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.1
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the value of an existing attribute, or append a new one.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        if let Some((_, v)) = self.1.iter_mut().find(|(k, _)| k == key) {
            *v = value.to_string();
        } else {
            self.1.push((key.to_string(), value.to_string()));
        }
    }
}

impl std::fmt::Display for RawElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        for (k, v) in &self.1 {
            write!(f, r#" {}="{}""#, k, v)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputList {
    pub events: Vec<InputEvent>,
}

impl FromStr for InputList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(&mut BufReader::new(Cursor::new(s.as_bytes())))
    }
}

impl InputList {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[derive(Debug, Default, Clone)]
pub struct OutputList {
    pub events: Vec<EventKind>,
}

impl From<InputList> for OutputList {
    fn from(value: InputList) -> Self {
        Self {
            events: value.events.into_iter().map(|ev| ev.event).collect(),
        }
    }
}

impl OutputList {
    pub fn new() -> Self {
        Self { events: vec![] }
    }

    pub fn push(&mut self, ev: EventKind) {
        self.events.push(ev);
    }

    /// Remove a trailing whitespace-only text event, if present.
    pub fn pop_blank_text(&mut self) {
        if self.events.last().is_some_and(|ev| ev.is_blank_text()) {
            self.events.pop();
        }
    }
}
