use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  spec,
  ui::{Colors, colors::IntoComfyColor, term_width},
};

/// Fetch the spec and print its endpoints, one row per (path, method) pair,
/// in document declaration order.
pub async fn list_endpoints(url: &str, colors: &Colors) -> anyhow::Result<()> {
  let document = spec::fetch_spec(url).await?;
  let endpoints = spec::list_endpoints(&document);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  header.add_cell(Cell::new("METHOD").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("PATH").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("OPERATION ID").fg(IntoComfyColor::into(colors.label())));
  header.add_cell(Cell::new("SUMMARY").fg(IntoComfyColor::into(colors.label())));
  table.set_header(header);

  for endpoint in &endpoints {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&endpoint.method)
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&endpoint.path).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(endpoint.display_id())
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&endpoint.summary).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
