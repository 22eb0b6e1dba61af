//! Whole-deck serialization.

use deckhand_error::{DeckhandResult, SerializationError, SerializationErrorKind};
use deckhand_layout::Slide;
use tracing::{debug, instrument};

use crate::constants::{content_type as ct, relationship_type as rt};
use crate::package::{Package, Relationships};
use crate::parts::{self, slide_partname};
use crate::slide::slide_xml;

/// Document-level metadata written into the package.
///
/// # Examples
///
/// ```
/// use deckhand_pptx::PackageOptions;
///
/// let options = PackageOptions::new("Intro to Rust").with_application("Acme".to_string());
/// assert_eq!(options.title(), "Intro to Rust");
/// assert_eq!(options.application(), "Acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct PackageOptions {
    /// Document title (`dc:title`)
    title: String,
    /// Producing application, also used as the creator
    application: String,
}

impl PackageOptions {
    /// Options for a deck titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            application: "Deckhand".to_string(),
        }
    }
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self::new("Presentation")
    }
}

/// Serialize slides, in order, into `.pptx` bytes.
///
/// # Errors
///
/// Returns [`SerializationErrorKind::EmptyDeck`] for an empty slice, and an
/// archive or XML error if any part fails. No partial output is returned.
#[instrument(skip_all, fields(slides = slides.len(), title = %options.title()))]
pub fn serialize(slides: &[Slide], options: &PackageOptions) -> DeckhandResult<Vec<u8>> {
    if slides.is_empty() {
        return Err(SerializationError::new(SerializationErrorKind::EmptyDeck).into());
    }

    let mut package = Package::new();

    let mut root_rels = Relationships::new();
    root_rels.add(rt::OFFICE_DOCUMENT, parts::PRESENTATION);
    root_rels.add(rt::CORE_PROPERTIES, parts::CORE_PROPERTIES);
    root_rels.add(rt::EXTENDED_PROPERTIES, parts::APP_PROPERTIES);
    package.add_rels("", &root_rels);

    // Targets in part-level rels are relative to the source part's folder.
    let mut pres_rels = Relationships::new();
    let master_rel_id = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    let slide_rel_ids: Vec<String> = (0..slides.len())
        .map(|index| pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", index + 1)))
        .collect();
    pres_rels.add(rt::THEME, "theme/theme1.xml");

    package.add_part(
        parts::PRESENTATION,
        ct::PML_PRESENTATION_MAIN,
        parts::presentation_xml(&master_rel_id, &slide_rel_ids)?,
    );
    package.add_rels(parts::PRESENTATION, &pres_rels);

    let mut master_rels = Relationships::new();
    master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add(rt::THEME, "../theme/theme1.xml");
    package.add_part(parts::SLIDE_MASTER, ct::PML_SLIDE_MASTER, parts::SLIDE_MASTER_XML);
    package.add_rels(parts::SLIDE_MASTER, &master_rels);

    let mut layout_rels = Relationships::new();
    layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    package.add_part(parts::SLIDE_LAYOUT, ct::PML_SLIDE_LAYOUT, parts::SLIDE_LAYOUT_XML);
    package.add_rels(parts::SLIDE_LAYOUT, &layout_rels);

    package.add_part(parts::THEME, ct::OFC_THEME, parts::THEME_XML);

    let mut slide_rels = Relationships::new();
    slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    for (index, slide) in slides.iter().enumerate() {
        let partname = slide_partname(index);
        let xml = slide_xml(slide, &partname)?;
        package.add_part(partname.as_str(), ct::PML_SLIDE, xml);
        package.add_rels(&partname, &slide_rels);
    }

    package.add_part(
        parts::CORE_PROPERTIES,
        ct::OPC_CORE_PROPERTIES,
        parts::core_properties_xml(options.title(), options.application()),
    );
    package.add_part(
        parts::APP_PROPERTIES,
        ct::OFC_EXTENDED_PROPERTIES,
        parts::app_properties_xml(options.application(), slides.len()),
    );

    let part_count = package.part_count();
    let bytes = package.to_bytes()?;
    debug!(parts = part_count, bytes = bytes.len(), "Package written");
    Ok(bytes)
}
