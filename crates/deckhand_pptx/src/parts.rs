//! Fixed and document-level parts.

use std::fmt::Write;

use deckhand_error::SerializationError;
use deckhand_layout::{SLIDE_HEIGHT, SLIDE_WIDTH};

use crate::constants::{FIRST_SLIDE_ID, SLIDE_MASTER_ID, XML_HEADER, namespace};
use crate::xml::{escape_xml, xml_error};

pub(crate) const PRESENTATION: &str = "ppt/presentation.xml";
pub(crate) const SLIDE_MASTER: &str = "ppt/slideMasters/slideMaster1.xml";
pub(crate) const SLIDE_LAYOUT: &str = "ppt/slideLayouts/slideLayout1.xml";
pub(crate) const THEME: &str = "ppt/theme/theme1.xml";
pub(crate) const CORE_PROPERTIES: &str = "docProps/core.xml";
pub(crate) const APP_PROPERTIES: &str = "docProps/app.xml";

/// Slide master with no placeholders and one blank layout.
pub(crate) const SLIDE_MASTER_XML: &str = include_str!("../resources/slideMaster1.xml");

/// The blank layout every slide uses.
pub(crate) const SLIDE_LAYOUT_XML: &str = include_str!("../resources/slideLayout1.xml");

/// Theme carrying the deck palette as its accent colors.
pub(crate) const THEME_XML: &str = include_str!("../resources/theme1.xml");

/// Part name of slide `index` (zero-based).
pub(crate) fn slide_partname(index: usize) -> String {
    format!("ppt/slides/slide{}.xml", index + 1)
}

/// `ppt/presentation.xml` listing the master and slides by relationship id.
pub(crate) fn presentation_xml(
    master_rel_id: &str,
    slide_rel_ids: &[String],
) -> Result<String, SerializationError> {
    let err = |e| xml_error(PRESENTATION, e);
    let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

    xml.push_str(XML_HEADER);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        namespace::DML,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML
    )
    .map_err(err)?;

    xml.push_str("<p:sldMasterIdLst>");
    write!(
        xml,
        r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
        SLIDE_MASTER_ID, master_rel_id
    )
    .map_err(err)?;
    xml.push_str("</p:sldMasterIdLst>");

    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (offset, rel_id) in (0u32..).zip(slide_rel_ids) {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                FIRST_SLIDE_ID + offset,
                rel_id
            )
            .map_err(err)?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
        SLIDE_WIDTH, SLIDE_HEIGHT
    )
    .map_err(err)?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");

    Ok(xml)
}

/// `docProps/core.xml` with the document title and creator.
pub(crate) fn core_properties_xml(title: &str, creator: &str) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_HEADER);
    xml.push_str(concat!(
        r#"<cp:coreProperties "#,
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(creator)));
    xml.push_str("</cp:coreProperties>");
    xml
}

/// `docProps/app.xml` naming the producing application.
pub(crate) fn app_properties_xml(application: &str, slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_HEADER);
    xml.push_str(concat!(
        r#"<Properties "#,
        r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    xml.push_str(&format!(
        "<Application>{}</Application>",
        escape_xml(application)
    ));
    xml.push_str(&format!("<Slides>{slide_count}</Slides>"));
    xml.push_str("</Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_ids_start_at_256() {
        let ids = vec!["rId2".to_string(), "rId3".to_string()];
        let xml = presentation_xml("rId1", &ids).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000""#));
    }

    #[test]
    fn templates_are_well_formed_roots() {
        assert!(SLIDE_MASTER_XML.trim_end().ends_with("</p:sldMaster>"));
        assert!(SLIDE_LAYOUT_XML.trim_end().ends_with("</p:sldLayout>"));
        assert!(THEME_XML.trim_end().ends_with("</a:theme>"));
    }

    #[test]
    fn core_properties_escape_title() {
        let xml = core_properties_xml("R&D <2025>", "Deckhand");
        assert!(xml.contains("<dc:title>R&amp;D &lt;2025&gt;</dc:title>"));
    }
}
