use std::io::{BufRead, Write};

use super::{EventKind, InputEvent, InputList, OutputList, RawElement};
use crate::errors::{Error, Result};

use quick_xml::events::{BytesCData, BytesEnd, BytesStart, BytesText, Event as XmlEvent};
use quick_xml::{Reader, Writer};

/// Any XML event passed through without interpretation (declarations,
/// doctypes, processing instructions, entity references).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawXmlEvent(XmlEvent<'static>);

impl EventKind {
    pub fn is_eof(&self) -> bool {
        matches!(self, EventKind::Other(event) if matches!(event.0, XmlEvent::Eof))
    }
}

impl TryFrom<XmlEvent<'_>> for EventKind {
    type Error = Error;

    fn try_from(event: XmlEvent) -> Result<Self> {
        let res = match event {
            XmlEvent::Empty(bs) => EventKind::Empty(bs.try_into()?),
            XmlEvent::Start(bs) => EventKind::Start(bs.try_into()?),
            XmlEvent::End(e) => EventKind::End(String::from_utf8(e.name().into_inner().to_vec())?),
            XmlEvent::Text(t) => EventKind::Text(String::from_utf8(t.into_inner().to_vec())?),
            XmlEvent::CData(c) => EventKind::CData(String::from_utf8(c.into_inner().to_vec())?),
            XmlEvent::Comment(c) => {
                EventKind::Comment(String::from_utf8(c.into_inner().to_vec())?)
            }
            other => EventKind::Other(RawXmlEvent(other.into_owned())),
        };
        Ok(res)
    }
}

impl<'a> From<EventKind> for XmlEvent<'a> {
    fn from(ev: EventKind) -> XmlEvent<'a> {
        match ev {
            EventKind::Empty(e) => XmlEvent::Empty(e.into()),
            EventKind::Start(e) => XmlEvent::Start(e.into()),
            // text content is kept in its escaped form throughout
            EventKind::Comment(content) => XmlEvent::Comment(BytesText::from_escaped(content)),
            EventKind::Text(content) => XmlEvent::Text(BytesText::from_escaped(content)),
            EventKind::CData(content) => XmlEvent::CData(BytesCData::new(content)),
            EventKind::End(name) => XmlEvent::End(BytesEnd::new(name)),
            EventKind::Other(event) => event.0,
        }
    }
}

impl TryFrom<BytesStart<'_>> for RawElement {
    type Error = Error;

    /// Failures here are low-level XML errors (e.g. bad attribute syntax,
    /// non-UTF8) rather than anything about path data.
    fn try_from(e: BytesStart) -> Result<Self> {
        let name = String::from_utf8(e.name().into_inner().to_vec())?;
        let attrs: Result<Vec<(String, String)>> = e
            .attributes()
            .map(|a| {
                let aa = a.map_err(Error::from_err)?;
                let key = String::from_utf8(aa.key.into_inner().to_vec())?;
                let value = aa.unescape_value().map_err(Error::from_err)?.into_owned();
                Ok((key, value))
            })
            .collect();
        Ok(Self(name, attrs?))
    }
}

impl From<RawElement> for BytesStart<'static> {
    fn from(e: RawElement) -> Self {
        let mut bs = BytesStart::new(e.0);
        for (k, v) in &e.1 {
            // attribute values are stored unescaped; this escapes them
            bs.push_attribute((k.as_str(), v.as_str()));
        }
        bs
    }
}

impl InputList {
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);

        let mut events = Vec::new();
        let mut buf = Vec::new();
        let mut src_line = 1;
        loop {
            let ev = reader
                .read_event_into(&mut buf)
                .map_err(|e| Error::Document(format!("XML error near line {src_line}: {e}")))?;
            let event_lines = ev.iter().filter(|&&c| c == b'\n').count();

            let event: EventKind = ev.try_into()?;
            if event.is_eof() {
                break;
            }
            events.push(InputEvent {
                event,
                line: src_line,
            });

            src_line += event_lines;
            buf.clear();
        }

        Ok(Self { events })
    }
}

impl OutputList {
    pub fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        let mut writer = Writer::new(writer);
        for event in &self.events {
            writer
                .write_event(event.clone())
                .map_err(Error::from_err)?;
        }
        Ok(())
    }
}
