//! OPC package assembly: parts, relationships and `[Content_Types].xml`.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};

use deckhand_error::{SerializationError, SerializationErrorKind};
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::constants::{XML_HEADER, content_type as ct, namespace};
use crate::xml::escape_xml;

/// Relationships of one source part, written as a `.rels` part.
#[derive(Debug, Clone, Default)]
pub(crate) struct Relationships {
    rels: Vec<(String, &'static str, String)>,
}

impl Relationships {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its `rId`.
    pub(crate) fn add(&mut self, rel_type: &'static str, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.rels.len() + 1);
        self.rels.push((id.clone(), rel_type, target.into()));
        id
    }

    pub(crate) fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);
        xml.push_str(XML_HEADER);
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        ));
        for (id, rel_type, target) in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                id,
                rel_type,
                escape_xml(target)
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// Path of the `.rels` part belonging to `partname`.
///
/// `ppt/slides/slide1.xml` maps to `ppt/slides/_rels/slide1.xml.rels`; the
/// package itself (empty name) maps to `_rels/.rels`.
pub(crate) fn rels_partname(partname: &str) -> String {
    match partname.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
        None => format!("_rels/{partname}.rels"),
    }
}

/// A package under construction. Parts are kept in insertion order.
#[derive(Debug, Default)]
pub(crate) struct Package {
    parts: Vec<(String, Vec<u8>)>,
    overrides: BTreeMap<String, &'static str>,
}

impl Package {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a part with its content type override.
    pub(crate) fn add_part(
        &mut self,
        partname: impl Into<String>,
        content_type: &'static str,
        blob: impl Into<Vec<u8>>,
    ) {
        let partname = partname.into();
        self.overrides.insert(format!("/{partname}"), content_type);
        self.parts.push((partname, blob.into()));
    }

    /// Add the relationships of `source` (empty for the package itself).
    pub(crate) fn add_rels(&mut self, source: &str, rels: &Relationships) {
        self.parts
            .push((rels_partname(source), rels.to_xml().into_bytes()));
    }

    /// Number of parts added so far, excluding `[Content_Types].xml`.
    pub(crate) fn part_count(&self) -> usize {
        self.parts.len()
    }

    fn content_types_xml(&self) -> String {
        let mut xml = String::with_capacity(512 + self.overrides.len() * 160);
        xml.push_str(XML_HEADER);
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES));
        xml.push_str(&format!(
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            ct::OPC_RELATIONSHIPS
        ));
        xml.push_str(&format!(
            r#"<Default Extension="xml" ContentType="{}"/>"#,
            ct::XML
        ));
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                content_type
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    /// Zip every part, `[Content_Types].xml` first.
    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let content_types = self.content_types_xml();
        let entries = std::iter::once(("[Content_Types].xml", content_types.as_bytes())).chain(
            self.parts
                .iter()
                .map(|(name, blob)| (name.as_str(), blob.as_slice())),
        );

        for (name, blob) in entries {
            zip.start_file(name, options)
                .map_err(|e| archive_error(name, e.to_string()))?;
            zip.write_all(blob)
                .map_err(|e| archive_error(name, e.to_string()))?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| archive_error("<central directory>", e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

#[track_caller]
fn archive_error(part: &str, message: String) -> SerializationError {
    SerializationError::new(SerializationErrorKind::Archive {
        part: part.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rels_partnames() {
        assert_eq!(
            rels_partname("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(rels_partname("ppt/presentation.xml"), "ppt/_rels/presentation.xml.rels");
        assert_eq!(rels_partname(""), "_rels/.rels");
    }

    #[test]
    fn relationship_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add("type/a", "a.xml"), "rId1");
        assert_eq!(rels.add("type/b", "b.xml"), "rId2");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"<Relationship Id="rId2" Type="type/b" Target="b.xml"/>"#));
    }

    #[test]
    fn content_types_list_overrides() {
        let mut package = Package::new();
        package.add_part("ppt/slides/slide1.xml", ct::PML_SLIDE, "<p:sld/>");
        let xml = package.content_types_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(&format!(
            r#"<Override PartName="/ppt/slides/slide1.xml" ContentType="{}"/>"#,
            ct::PML_SLIDE
        )));
    }
}
