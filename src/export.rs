//! Text exports of a star map.
//!
//! - **CSV**: one `ra,dec,mag` line per present star, RA and Dec to eight
//!   decimals, magnitude to two. No header; removed stars are skipped.
//!   Fields are separated by a bare `,` as the `csv` writer emits them, not
//!   `", "`, so the output loads as standard CSV.
//! - **SVG bundle**: both chart drawings, each wrapped in a bare `<svg>` root
//!   and delimited by `<!--Begin File N-->` / `<!--End File N-->` comments so
//!   they can be pasted into two files.

use std::io;

use tracing::info;

use crate::chart::SvgSurface;
use crate::Catalog;

/// Suggested file names for the two SVG files of [`svg_bundle`], north first.
pub const SVG_FILE_NAMES: [&str; 2] = ["NorthHemisphere.svg", "SouthernHemisphere.svg"];

/// Instructions shown next to the SVG bundle.
pub const SVG_INSTRUCTIONS: &str = "Copy and paste the following into two separate files \
(between the <!--Begin File X--> and <!--End File X --> comments). \
Save the first one as NorthHemisphere.svg and the second as SouthernHemisphere.svg.";

/// Instructions shown next to the CSV listing.
pub const CSV_INSTRUCTIONS: &str =
    "Copy this text into a plaintext file and save it with .csv to get a table.";

const SVG_ROOT_OPEN: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\">";

/// Write the CSV listing of all present stars to `writer`.
pub fn write_csv<W: io::Write>(catalog: &Catalog, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for star in catalog.list() {
        let mag = star.mag().map(|m| format!("{:.2}", m)).unwrap_or_default();
        wtr.write_record([
            format!("{:.8}", star.ra()),
            format!("{:.8}", star.dec()),
            mag,
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// CSV listing as a string. An empty catalog gives an empty string.
pub fn csv_string(catalog: &Catalog) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    write_csv(catalog, &mut buf)?;
    info!(stars = catalog.len(), bytes = buf.len(), "csv export");
    Ok(String::from_utf8(buf)?)
}

/// Wrap the north and south drawings into the two-file SVG bundle.
pub fn svg_bundle(north: &SvgSurface, south: &SvgSurface) -> String {
    let mut out = String::new();
    out.push_str("<!--Begin File 1-->\n");
    out.push_str(SVG_ROOT_OPEN);
    out.push_str(north.markup());
    out.push_str("</svg><!--End File 1-->\n\n");
    out.push_str("<!--Begin File 2-->\n");
    out.push_str(SVG_ROOT_OPEN);
    out.push_str(south.markup());
    out.push_str("</svg><!--End File 2-->");
    info!(bytes = out.len(), "svg export");
    out
}
