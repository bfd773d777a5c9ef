//! PDF rendering
//!
//! The listing is laid out as fixed-width text through a tera template, then
//! set in Courier on A4 portrait pages of a plain PDF 1.4 file.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;
use tera::{Context, Tera, Value};
use tracing::debug;

use super::latin1::encode_win_ansi_lossy;
use super::Renderer;
use crate::error::ContaResult;
use crate::reports::table::Row;
use crate::reports::{DateStyle, ReportData, ReportTable};

const TEMPLATE_NAME: &str = "listar_contas.txt";
const TEMPLATE: &str = include_str!("templates/listar_contas.txt");

// A4 portrait, in points
const PAGE_WIDTH: usize = 595;
const PAGE_HEIGHT: usize = 842;
const MARGIN: usize = 40;
const FONT_SIZE: usize = 9;
const LEADING: usize = 11;
const LINES_PER_PAGE: usize = (PAGE_HEIGHT - 2 * MARGIN) / LEADING;

/// Names longer than this are cut to keep a row on the page
const MAX_NAME_WIDTH: usize = 40;

/// Renders the paginated account listing
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    lines_per_page: usize,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self {
            lines_per_page: LINES_PER_PAGE,
        }
    }
}

impl PdfRenderer {
    pub fn with_lines_per_page(lines_per_page: usize) -> Self {
        Self {
            lines_per_page: lines_per_page.max(1),
        }
    }
}

impl Renderer for PdfRenderer {
    fn render(&self, data: &ReportData, out: &mut dyn Write) -> ContaResult<()> {
        let text = layout_text(data)?;
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let document = write_document(&lines, self.lines_per_page);
        out.write_all(&document)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Cell<'a> {
    text: &'a str,
    width: usize,
    align: &'static str,
}

fn cells<'a>(row: &'a Row, widths: &[usize; 5]) -> Vec<Cell<'a>> {
    row.iter()
        .zip(widths.iter())
        .enumerate()
        .map(|(i, (text, &width))| Cell {
            text,
            width,
            // id and amount columns
            align: if i == 0 || i == 4 { "right" } else { "left" },
        })
        .collect()
}

/// Lay the report out as fixed-width text lines
pub fn layout_text(data: &ReportData) -> ContaResult<String> {
    let table = ReportTable::build(data, DateStyle::Br);
    let mut widths = table.column_widths();
    widths[1] = widths[1].min(MAX_NAME_WIDTH);
    let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    let rows: Vec<Vec<Cell<'_>>> = table.rows.iter().map(|r| cells(r, &widths)).collect();

    let mut context = Context::new();
    context.insert("header", &cells(&table.header, &widths));
    context.insert("rows", &rows);
    context.insert("footer", &cells(&table.footer, &widths));
    context.insert("rule", &"-".repeat(rule_width));

    let mut tera = Tera::default();
    tera.register_filter("pad", pad);
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

/// `{{ text | pad(width=10, align="right") }}`: fit text to an exact width
fn pad(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("pad: value must be a string"))?;
    let width = args
        .get("width")
        .and_then(Value::as_u64)
        .ok_or_else(|| tera::Error::msg("pad: missing numeric `width`"))? as usize;
    let align = args.get("align").and_then(Value::as_str).unwrap_or("left");

    let fitted: String = text.chars().take(width).collect();
    let padded = match align {
        "right" => format!("{:>width$}", fitted, width = width),
        _ => format!("{:<width$}", fitted, width = width),
    };
    Ok(Value::String(padded))
}

/// Sequential object writer that records byte offsets for the xref table
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Append the next object; ids must be handed out in order starting at 1
    fn object(&mut self, body: &[u8]) -> usize {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        self.buf
            .extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
        id
    }

    fn stream(&mut self, data: &[u8]) -> usize {
        let mut body = format!("<< /Length {} >>\nstream\n", data.len()).into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(b"\nendstream");
        self.object(&body)
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", self.offsets.len() + 1);
        for offset in &self.offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            self.offsets.len() + 1,
            root,
            xref_offset
        ));
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}

fn write_document(lines: &[&str], lines_per_page: usize) -> Vec<u8> {
    let pages: Vec<&[&str]> = if lines.is_empty() {
        vec![lines]
    } else {
        lines.chunks(lines_per_page).collect()
    };

    // Objects: 1 catalog, 2 page tree, 3 font, then a page and its content
    // stream for every page
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    let mut pdf = PdfWriter::new();
    let root = pdf.object(b"<< /Type /Catalog /Pages 2 0 R >>");
    pdf.object(
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )
        .as_bytes(),
    );
    pdf.object(b"<< /Type /Font /Subtype /Type1 /BaseFont /Courier /Encoding /WinAnsiEncoding >>");

    let mut replaced = 0;
    for page in &pages {
        let content_id = pdf.offsets.len() + 2;
        pdf.object(
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                PAGE_WIDTH, PAGE_HEIGHT, content_id
            )
            .as_bytes(),
        );
        pdf.stream(&content_stream(page, &mut replaced));
    }

    if replaced > 0 {
        debug!(replaced, "characters outside WinAnsi replaced in PDF export");
    }
    pdf.finish(root)
}

fn content_stream(lines: &[&str], replaced: &mut usize) -> Vec<u8> {
    let mut stream = format!(
        "BT\n/F1 {} Tf\n{} TL\n{} {} Td\n",
        FONT_SIZE,
        LEADING,
        MARGIN,
        PAGE_HEIGHT - MARGIN
    )
    .into_bytes();

    for line in lines {
        let (bytes, lost) = encode_win_ansi_lossy(line);
        *replaced += lost;

        stream.push(b'(');
        for b in bytes {
            if matches!(b, b'(' | b')' | b'\\') {
                stream.push(b'\\');
            }
            stream.push(b);
        }
        stream.extend_from_slice(b") Tj\nT*\n");
    }
    stream.extend_from_slice(b"ET");
    stream
}
