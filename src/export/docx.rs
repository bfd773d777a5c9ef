//! Word (.docx) rendering
//!
//! Writes the smallest OOXML package Word opens: content types, the package
//! relationship and a main document holding a single table.

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::Renderer;
use crate::error::ContaResult;
use crate::reports::{DateStyle, ReportData, ReportTable};

/// Cell width in twentieths of a point
const CELL_WIDTH: u32 = 2000;
/// Border size in eighths of a point
const BORDER_SIZE: u32 = 6;
const BORDER_COLOR: &str = "000000";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Renders the report as a bordered table; the footer's four leading cells
/// are left without borders so only the total stands out
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxRenderer;

impl Renderer for DocxRenderer {
    fn render(&self, data: &ReportData, out: &mut dyn Write) -> ContaResult<()> {
        let table = ReportTable::build(data, DateStyle::Br);
        let document = document_xml(&table);

        // The zip writer needs to seek back for its central directory
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(PACKAGE_RELS.as_bytes())?;
        zip.start_file("word/document.xml", options)?;
        zip.write_all(document.as_bytes())?;

        let buffer = zip.finish()?.into_inner();
        out.write_all(&buffer)?;
        Ok(())
    }
}

fn document_xml(table: &ReportTable) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:tbl><w:tblPr><w:tblW w:w="0" w:type="auto"/></w:tblPr><w:tblGrid>"#,
    );
    for _ in 0..table.header.len() {
        xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, CELL_WIDTH));
    }
    xml.push_str("</w:tblGrid>");

    push_row(&mut xml, table.header.iter().map(|c| (c.as_str(), true)));
    for row in &table.rows {
        push_row(&mut xml, row.iter().map(|c| (c.as_str(), true)));
    }
    let last = table.footer.len() - 1;
    push_row(
        &mut xml,
        table
            .footer
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i == last)),
    );

    xml.push_str("</w:tbl><w:sectPr/></w:body></w:document>");
    xml
}

fn push_row<'a>(xml: &mut String, cells: impl Iterator<Item = (&'a str, bool)>) {
    xml.push_str("<w:tr>");
    for (text, bordered) in cells {
        push_cell(xml, text, bordered);
    }
    xml.push_str("</w:tr>");
}

fn push_cell(xml: &mut String, text: &str, bordered: bool) {
    xml.push_str(&format!(
        r#"<w:tc><w:tcPr><w:tcW w:w="{}" w:type="dxa"/>"#,
        CELL_WIDTH
    ));
    if bordered {
        xml.push_str("<w:tcBorders>");
        for side in ["top", "left", "bottom", "right"] {
            xml.push_str(&format!(
                r#"<w:{} w:val="single" w:sz="{}" w:space="0" w:color="{}"/>"#,
                side, BORDER_SIZE, BORDER_COLOR
            ));
        }
        xml.push_str("</w:tcBorders>");
    }
    xml.push_str("</w:tcPr>");

    if text.is_empty() {
        xml.push_str("<w:p/>");
    } else {
        xml.push_str(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            escape_xml(text)
        ));
    }
    xml.push_str("</w:tc>");
}

/// Escape markup characters and drop the ones XML 1.0 does not allow at all
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\t' | '\n' | '\r' => escaped.push(ch),
            '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => {}
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
