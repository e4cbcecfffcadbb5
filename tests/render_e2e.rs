// tests/render_e2e.rs
//
// Full renders through Grid::lines / Grid::render_to, checked against
// the exact markup the legacy scripts produced.
//
use spoke_table::config::options::{LayoutOptions, RowTemplate};
use spoke_table::core::html::strip_tags;
use spoke_table::grid::Grid;
use spoke_table::input::{parse_records, Record};

fn render(records: &[Record], layout: &LayoutOptions) -> String {
    let grid = Grid::new(records, layout).unwrap();
    let mut buf = Vec::new();
    grid.render_to(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn sample() -> Vec<Record> {
    parse_records("radial 0\n3-cross 12\ntangential 8\n4-cross, offset 16\n").unwrap()
}

#[test]
fn simple_template_four_columns() {
    let layout = LayoutOptions { columns: 4, ..Default::default() };
    let html = render(&sample(), &layout);
    let expected = "\
<table>
<tr>
<td>radial</td>
<td>3-cross</td>
<td>tangential</td>
<td>4-cross, offset</td>
</tr>
<tr>
<td>0</td>
<td>12</td>
<td>8</td>
<td>16</td>
</tr>
<tr>
<td><img src=\"img/radial.png\"/></td>
<td><img src=\"img/3-cross.png\"/></td>
<td><img src=\"img/tangential.png\"/></td>
<td><img src=\"img/4-cross offset.png\"/></td>
</tr>
</table>
";
    assert_eq!(html, expected);
}

#[test]
fn header_template_folds_labels_into_first_slot() {
    let records = parse_records("a 1\nb 2\nc 3\n").unwrap();
    let layout = LayoutOptions {
        columns: 4,
        template: RowTemplate::WithHeader,
        ..Default::default()
    };
    let html = render(&records, &layout);
    let expected = "\
<table>
<tr>
<td>Name</td>
<td>Length</td>
<td>a</td>
<td>1</td>
<td>b</td>
<td>2</td>
<td>c</td>
<td>3</td>
</tr>
<tr>
<td colspan=\"2\">Image of the pattern (highlighted in red) used in a typical wheel (20, 32 or 36 spokes).</td>
<td colspan=\"2\"><img src=\"img/a.png\"/></td>
<td colspan=\"2\"><img src=\"img/b.png\"/></td>
<td colspan=\"2\"><img src=\"img/c.png\"/></td>
</tr>
<tr>
<td colspan=\"2\">Common names</td>
<td colspan=\"2\"></td>
<td colspan=\"2\"></td>
<td colspan=\"2\"></td>
</tr>
</table>
";
    assert_eq!(html, expected);
}

#[test]
fn empty_input_renders_bare_table() {
    let layout = LayoutOptions { columns: 4, ..Default::default() };
    let html = render(&[], &layout);
    assert_eq!(html, "<table>\n</table>\n");
}

#[test]
fn partial_final_super_row_omits_missing_cells() {
    let records = parse_records("a 1\nb 2\nc 3\nd 4\ne 5\n").unwrap();
    let layout = LayoutOptions { columns: 4, ..Default::default() };
    let html = render(&records, &layout);

    // Two super-rows; the trailing one holds a single cell per band.
    assert_eq!(html.matches("<tr>").count(), 6);
    assert!(html.contains("<tr>\n<td>e</td>\n</tr>"));
    assert!(html.contains("<tr>\n<td>5</td>\n</tr>"));
    assert!(html.contains("<tr>\n<td><img src=\"img/e.png\"/></td>\n</tr>"));
}

#[test]
fn exact_multiple_has_no_partial_row() {
    let records = parse_records("a 1\nb 2\nc 3\nd 4\ne 5\nf 6\n").unwrap();
    let layout = LayoutOptions { columns: 3, ..Default::default() };
    let html = render(&records, &layout);

    assert_eq!(html.matches("<tr>").count(), 6);
    // every band is full
    for band in html.split("</tr>").filter(|b| b.contains("<td>")) {
        assert_eq!(band.matches("<td").count(), 3, "band not full: {band}");
    }
}

#[test]
fn names_and_attributes_round_trip_in_order() {
    let records = sample();
    let layout = LayoutOptions { columns: 3, ..Default::default() };
    let html = render(&records, &layout);

    // pull the cell text back out of the name/attribute bands
    let cells: Vec<String> = html
        .lines()
        .filter(|l| l.starts_with("<td>") && !l.contains("<img"))
        .map(strip_tags)
        .collect();

    for r in &records {
        assert_eq!(cells.iter().filter(|c| **c == r.name).count(), 1, "{}", r.name);
        assert_eq!(cells.iter().filter(|c| **c == r.attribute).count(), 1, "{}", r.attribute);
    }
    // input order is preserved across super-rows
    let pos: Vec<usize> = records
        .iter()
        .map(|r| cells.iter().position(|c| c == &r.name).unwrap())
        .collect();
    assert!(pos.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn rendering_is_idempotent() {
    let records = sample();
    let layout = LayoutOptions { columns: 2, ..Default::default() };
    assert_eq!(render(&records, &layout), render(&records, &layout));
}

#[test]
fn super_row_band_count_scales_with_ceil() {
    for (n, c, groups) in [(1usize, 4usize, 1usize), (9, 4, 3), (7, 7, 1), (8, 7, 2)] {
        let text: String = (0..n).map(|i| format!("p{i} {i}\n")).collect();
        let records = parse_records(&text).unwrap();
        let layout = LayoutOptions { columns: c, ..Default::default() };
        let html = render(&records, &layout);
        // three bands per super-row in the simple template
        assert_eq!(html.matches("<tr>").count(), groups * 3, "n={n} c={c}");
    }
}
