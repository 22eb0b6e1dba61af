//! Slide parts: background and shapes as PresentationML.

use std::fmt::Write;

use deckhand_error::SerializationError;
use deckhand_layout::{Alignment, Paragraph, Shape, ShapeKind, Slide, TextBody};

use crate::constants::{XML_HEADER, namespace};
use crate::xml::{escape_xml, xml_error};

/// Serialize one slide. `partname` only labels errors.
pub(crate) fn slide_xml(slide: &Slide, partname: &str) -> Result<String, SerializationError> {
    let mut xml = String::with_capacity(2048 + slide.shapes().len() * 768);
    write_slide(&mut xml, slide).map_err(|e| xml_error(partname, e))?;
    Ok(xml)
}

fn write_slide(xml: &mut String, slide: &Slide) -> std::fmt::Result {
    xml.push_str(XML_HEADER);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        namespace::DML,
        namespace::OFC_RELATIONSHIPS,
        namespace::PML
    )?;
    xml.push_str("<p:cSld>");

    // Background must precede the shape tree.
    write!(
        xml,
        r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
        slide.background()
    )?;

    xml.push_str("<p:spTree>");
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/>"#);
    xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
    xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");

    // Shape id 1 is the tree itself.
    for (shape_id, shape) in (2u32..).zip(slide.shapes()) {
        write_shape(xml, shape, shape_id)?;
    }

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");
    Ok(())
}

fn preset(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::TextBox | ShapeKind::Rectangle => "rect",
        ShapeKind::RoundedRectangle => "roundRect",
        ShapeKind::Ellipse => "ellipse",
    }
}

fn shape_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::TextBox => "TextBox",
        ShapeKind::Rectangle => "Rectangle",
        ShapeKind::RoundedRectangle => "Rounded Rectangle",
        ShapeKind::Ellipse => "Oval",
    }
}

fn write_shape(xml: &mut String, shape: &Shape, shape_id: u32) -> std::fmt::Result {
    let kind = *shape.kind();
    let rect = shape.rect();

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        shape_id,
        shape_name(kind),
        shape_id - 1
    )?;
    if kind == ShapeKind::TextBox {
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    } else {
        xml.push_str("<p:cNvSpPr/>");
    }
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.left, rect.top)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height)?;
    xml.push_str("</a:xfrm>");
    write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        preset(kind)
    )?;
    match shape.fill() {
        Some(color) => write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            color
        )?,
        None => xml.push_str("<a:noFill/>"),
    }
    match shape.line() {
        Some(line) => write!(
            xml,
            r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
            line.width, line.color
        )?,
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    xml.push_str("</p:spPr>");

    if let Some(body) = shape.text() {
        write_text_body(xml, body, kind)?;
    }

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_text_body(xml: &mut String, body: &TextBody, kind: ShapeKind) -> std::fmt::Result {
    let wrap = if *body.word_wrap() { "square" } else { "none" };
    // Autoshapes center their text vertically; text boxes grow from the top.
    let anchor = if kind == ShapeKind::TextBox { "t" } else { "ctr" };

    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="{}" rtlCol="0" anchor="{}">"#,
        wrap, anchor
    )?;
    if kind == ShapeKind::TextBox {
        xml.push_str("<a:spAutoFit/>");
    } else {
        xml.push_str("<a:noAutofit/>");
    }
    xml.push_str("</a:bodyPr>");
    xml.push_str("<a:lstStyle/>");
    for paragraph in body.paragraphs() {
        write_paragraph(xml, paragraph)?;
    }
    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> std::fmt::Result {
    let style = &paragraph.style;
    let algn = match style.alignment {
        Alignment::Left => "l",
        Alignment::Center => "ctr",
        Alignment::Right => "r",
    };
    let bold = if style.bold { " b=\"1\"" } else { "" };
    let size = u32::from(style.size) * 100;

    xml.push_str("<a:p>");
    write!(xml, r#"<a:pPr algn="{}"/>"#, algn)?;
    if paragraph.text.is_empty() {
        write!(
            xml,
            r#"<a:endParaRPr lang="en-US" sz="{}"{} dirty="0"/>"#,
            size, bold
        )?;
    } else {
        xml.push_str("<a:r>");
        write!(xml, r#"<a:rPr lang="en-US" sz="{}"{} dirty="0">"#, size, bold)?;
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            style.color
        )?;
        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t>", escape_xml(&paragraph.text))?;
        xml.push_str("</a:r>");
    }
    xml.push_str("</a:p>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_layout::{SlideSpec, Theme, render};

    #[test]
    fn content_slide_geometry_and_text() {
        let slide = render(
            &SlideSpec::Content {
                section: "Q&A".to_string(),
                body: "Ask <anything>".to_string(),
            },
            &Theme::default(),
        );
        let xml = slide_xml(&slide, "ppt/slides/slide1.xml").unwrap();

        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/>"#));
        assert!(xml.contains("<a:t>Q&amp;A</a:t>"));
        assert!(xml.contains("<a:t>Ask &lt;anything&gt;</a:t>"));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr">"#));
        assert!(xml.contains(r#"sz="3200" b="1""#));
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
    }

    #[test]
    fn motif_is_written_as_ellipses() {
        let slide = render(&SlideSpec::ThankYou, &Theme::default());
        let xml = slide_xml(&slide, "ppt/slides/slide9.xml").unwrap();
        assert_eq!(xml.matches(r#"prst="ellipse""#).count(), 3);
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
    }
}
