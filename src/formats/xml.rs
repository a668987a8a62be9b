//! XML adapter.
//!
//! Layout is a `people` root holding one `person` element per record, each
//! with `id`, `name`, `address` and `age` child elements carrying text.
//! Field text is kept byte for byte, including surrounding whitespace; only
//! whitespace between elements is ignored. `age` is parsed as `f64`, the same
//! as every other format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::core::Person;
use crate::{BenchError, BenchResult, BoxError};

use super::{Format, FormatAdapter};

const ROOT: &str = "people";
const RECORD: &str = "person";
const FIELDS: [&str; 4] = ["id", "name", "address", "age"];

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlFormat;

impl FormatAdapter for XmlFormat {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn read(&self, path: &Path) -> BenchResult<Vec<Person>> {
        let s = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        PeopleReader::new(&s)
            .read_people()
            .map_err(|e| BenchError::decode(Format::Xml, path, e))
    }

    fn write(&self, people: &[Person], path: &Path) -> BenchResult<()> {
        let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
        let mut writer = Writer::new(BufWriter::new(file));
        write_people(&mut writer, people).map_err(|e| BenchError::encode(Format::Xml, path, e))?;
        writer.into_inner().flush().map_err(|e| BenchError::io(path, e))
    }
}

fn write_people<W: Write>(writer: &mut Writer<W>, people: &[Person]) -> Result<(), BoxError> {
    writer.write_event(Event::Start(BytesStart::new(ROOT)))?;
    for person in people {
        writer.write_event(Event::Start(BytesStart::new(RECORD)))?;
        write_field(writer, "id", &person.id().to_string())?;
        write_field(writer, "name", person.name())?;
        write_field(writer, "address", person.address())?;
        write_field(writer, "age", &person.age().to_string())?;
        writer.write_event(Event::End(BytesEnd::new(RECORD)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT)))?;
    Ok(())
}

fn write_field<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), BoxError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

/// Walks the event stream of one document. End tag names are checked by the
/// underlying reader.
struct PeopleReader<'a> {
    reader: Reader<&'a [u8]>,
}

impl<'a> PeopleReader<'a> {
    fn new(s: &'a str) -> Self {
        PeopleReader { reader: Reader::from_str(s) }
    }

    /// Next element event, skipping the prolog, comments and whitespace.
    fn next_markup(&mut self) -> Result<Event<'a>, BoxError> {
        loop {
            match self.reader.read_event()? {
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
                Event::Text(t) if t.iter().all(u8::is_ascii_whitespace) => {}
                Event::Text(t) => return Err(format!("unexpected text {:?}", t.unescape()?).into()),
                Event::CData(_) => return Err("unexpected CDATA outside a field".into()),
                other => return Ok(other),
            }
        }
    }

    fn read_people(mut self) -> Result<Vec<Person>, BoxError> {
        let people = match self.next_markup()? {
            Event::Start(e) if e.name().as_ref() == ROOT.as_bytes() => self.read_records()?,
            Event::Empty(e) if e.name().as_ref() == ROOT.as_bytes() => Vec::new(),
            Event::Start(e) | Event::Empty(e) => {
                return Err(format!("expected <{ROOT}> root, found <{}>", element_name(&e)).into());
            }
            Event::Eof => return Err("document has no root element".into()),
            other => return Err(format!("unexpected {other:?} before root element").into()),
        };
        match self.next_markup()? {
            Event::Eof => Ok(people),
            other => Err(format!("unexpected {other:?} after root element").into()),
        }
    }

    fn read_records(&mut self) -> Result<Vec<Person>, BoxError> {
        let mut people = Vec::new();
        loop {
            match self.next_markup()? {
                Event::Start(e) if e.name().as_ref() == RECORD.as_bytes() => people.push(self.read_person()?),
                Event::Empty(e) if e.name().as_ref() == RECORD.as_bytes() => {
                    return Err(format!("empty <{RECORD}> element").into());
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(format!("expected <{RECORD}>, found <{}>", element_name(&e)).into());
                }
                Event::End(_) => return Ok(people),
                Event::Eof => return Err(format!("unterminated <{ROOT}>").into()),
                other => return Err(format!("unexpected {other:?} in <{ROOT}>").into()),
            }
        }
    }

    fn read_person(&mut self) -> Result<Person, BoxError> {
        let mut fields: [Option<String>; 4] = Default::default();
        loop {
            let (e, text) = match self.next_markup()? {
                Event::Start(e) => {
                    let text = self.read_text()?;
                    (e, text)
                }
                Event::Empty(e) => (e, String::new()),
                Event::End(_) => break,
                Event::Eof => return Err(format!("unterminated <{RECORD}>").into()),
                other => return Err(format!("unexpected {other:?} in <{RECORD}>").into()),
            };
            let name = element_name(&e);
            let slot = FIELDS
                .iter()
                .position(|f| *f == name)
                .ok_or_else(|| format!("unknown element <{name}> in <{RECORD}>"))?;
            if fields[slot].replace(text).is_some() {
                return Err(format!("duplicate <{name}> in <{RECORD}>").into());
            }
        }

        let [id, name, address, age] = fields;
        let missing = |field: &str| format!("missing <{field}> in <{RECORD}>");
        let id = id.ok_or_else(|| missing("id"))?;
        let name = name.ok_or_else(|| missing("name"))?;
        let address = address.ok_or_else(|| missing("address"))?;
        let age = age.ok_or_else(|| missing("age"))?;

        let id = id.trim().parse::<u32>().map_err(|err| format!("invalid id {id:?}: {err}"))?;
        let age = age.trim().parse::<f64>().map_err(|err| format!("invalid age {age:?}: {err}"))?;
        Ok(Person::new(id, name, address, age))
    }

    /// Text content up to the closing tag, unescaped and untrimmed.
    fn read_text(&mut self) -> Result<String, BoxError> {
        let mut text = String::new();
        loop {
            match self.reader.read_event()? {
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::CData(c) => text.push_str(std::str::from_utf8(&c)?),
                Event::Comment(_) => {}
                Event::End(_) => return Ok(text),
                Event::Start(e) | Event::Empty(e) => {
                    return Err(format!("unexpected <{}> inside a field", element_name(&e)).into());
                }
                Event::Eof => return Err("unterminated field element".into()),
                other => return Err(format!("unexpected {other:?} inside a field").into()),
            }
        }
    }
}
