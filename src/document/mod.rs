//! Streaming SVG document processing: path data normalization and joining
//! of line elements into paths.

mod events;
mod xml;

pub use events::{EventKind, InputEvent, InputList, OutputList, RawElement};
use xml::RawXmlEvent;

use std::collections::{HashMap, HashSet};
use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::chain::{OptimizedPathCollection, PathLine};
use crate::errors::{Error, Result};
use crate::geometry::Point;
use crate::path::{parse_path_data, write_path_data};
use crate::types::strp;
use crate::TransformConfig;

const LINE_COORDS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Key identifying `<line>` elements which may be merged: same parent and
/// identical non-coordinate attributes.
type LineGroupKey = (Option<usize>, Vec<(String, String)>);

pub(crate) struct Transformer {
    config: TransformConfig,
}

impl Transformer {
    pub fn from_config(config: &TransformConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn transform(&self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> Result<()> {
        let input = InputList::from_reader(reader)?;
        let output = self.process_events(input)?;
        output.write_to(writer)
    }

    fn process_events(&self, mut input: InputList) -> Result<OutputList> {
        if self.config.normalize_paths {
            normalize_path_data(&mut input)?;
        }
        if self.config.join_lines {
            Ok(join_lines(input))
        } else {
            Ok(input.into())
        }
    }
}

/// Rewrite each `<path>` element's `d` attribute in canonical form.
fn normalize_path_data(input: &mut InputList) -> Result<()> {
    for ev in input.events.iter_mut() {
        let line = ev.line;
        let (EventKind::Empty(el) | EventKind::Start(el)) = &mut ev.event else {
            continue;
        };
        if el.name() != "path" {
            continue;
        }
        if let Some(d) = el.get_attr("d") {
            let subpaths = parse_path_data(d)
                .map_err(|e| Error::Document(format!("invalid path data at line {line}: {e}")))?;
            el.set_attr("d", &write_path_data(&subpaths));
        }
    }
    Ok(())
}

/// Coordinates of a `<line>` element; missing coordinates default to 0.
fn line_segment(el: &RawElement) -> Option<PathLine> {
    let mut coords = [0.; 4];
    for (value, key) in coords.iter_mut().zip(LINE_COORDS) {
        if let Some(v) = el.get_attr(key) {
            *value = strp(v).ok()?;
        }
    }
    let [x1, y1, x2, y2] = coords;
    Some(PathLine::new(Point::new(x1, y1), Point::new(x2, y2)))
}

/// Replace groups of sibling `<line>` elements sharing all other attributes
/// with a single `<path>`, positioned at the first line of the group.
///
/// Lines whose coordinates can't be read are left alone.
fn join_lines(input: InputList) -> OutputList {
    let mut parents: Vec<usize> = Vec::new();
    let mut lines = Vec::new();
    for (idx, ev) in input.iter().enumerate() {
        match &ev.event {
            EventKind::Start(_) => parents.push(idx),
            EventKind::End(_) => {
                parents.pop();
            }
            EventKind::Empty(el) if el.name() == "line" => {
                if let Some(segment) = line_segment(el) {
                    let shared: Vec<(String, String)> = el
                        .get_attrs()
                        .iter()
                        .filter(|(k, _)| !LINE_COORDS.contains(&k.as_str()))
                        .cloned()
                        .collect();
                    let key: LineGroupKey = (parents.last().copied(), shared);
                    lines.push((key, (idx, segment)));
                }
            }
            _ => {}
        }
    }

    let mut replacements: HashMap<usize, EventKind> = HashMap::new();
    let mut removed: HashSet<usize> = HashSet::new();
    for ((_, shared), members) in lines.into_iter().into_group_map() {
        if members.len() < 2 {
            continue;
        }
        let mut opc = OptimizedPathCollection::new();
        for (_, segment) in &members {
            opc.add_segment(Box::new(*segment));
        }
        opc.optimize();

        let mut attrs = vec![("d".to_string(), write_path_data(&opc.to_path_data()))];
        attrs.extend(shared);
        replacements.insert(members[0].0, EventKind::Empty(RawElement::new("path", attrs)));
        removed.extend(members[1..].iter().map(|(idx, _)| *idx));
    }

    let mut output = OutputList::new();
    for (idx, ev) in input.events.into_iter().enumerate() {
        if removed.contains(&idx) {
            // drop the indentation which preceded the removed line
            output.pop_blank_text();
        } else if let Some(replacement) = replacements.remove(&idx) {
            output.push(replacement);
        } else {
            output.push(ev.event);
        }
    }
    output
}
