use std::collections::BTreeMap;

use crate::docket::{RowPolicy, extract};
use crate::model::Charge;

use super::*;

fn sample_mapping() -> DocketMapping {
    let mut mapping = DocketMapping::new();

    let morning = mapping.ensure_slot("9:30 a.m.");
    let slot = mapping.slot_mut(morning).expect("morning slot");
    let doe = slot.ensure_case("John Doe");
    doe.record_charge("Assault");
    doe.record_charge("Assault");
    doe.record_charge("Mischief");
    slot.ensure_case("Jane Roe");

    let afternoon = mapping.ensure_slot("1:30 p.m.");
    let slot = mapping.slot_mut(afternoon).expect("afternoon slot");
    slot.ensure_case("Rick Poe").record_charge("Theft, under $5000");

    mapping
}

fn options(format: OutputFormat, pretty: bool) -> RenderOptions {
    RenderOptions { format, pretty }
}

fn triples(mapping: &BTreeMap<String, BTreeMap<String, Vec<Charge>>>) -> Vec<(String, String, String, u32)> {
    let mut out = Vec::new();
    for (time, cases) in mapping {
        for (case, charges) in cases {
            for charge in charges {
                out.push((
                    time.clone(),
                    case.clone(),
                    charge.description.clone(),
                    charge.count,
                ));
            }
        }
    }
    out.sort();
    out
}

#[test]
fn compact_json_keeps_document_order() {
    let rendered = render(&sample_mapping(), options(OutputFormat::Json, false)).unwrap();
    assert_eq!(
        rendered,
        concat!(
            r#"{"9:30 a.m.":{"John Doe":[{"description":"Assault","count":2},"#,
            r#"{"description":"Mischief","count":1}],"Jane Roe":[]},"#,
            r#""1:30 p.m.":{"Rick Poe":[{"description":"Theft, under $5000","count":1}]}}"#
        )
    );
}

#[test]
fn pretty_json_uses_four_space_indent() {
    let mut mapping = DocketMapping::new();
    let index = mapping.ensure_slot("10:00 a.m.");
    mapping
        .slot_mut(index)
        .unwrap()
        .ensure_case("John Doe")
        .record_charge("Assault");

    let rendered = render(&mapping, options(OutputFormat::Json, true)).unwrap();
    let expected = [
        "{",
        "    \"10:00 a.m.\": {",
        "        \"John Doe\": [",
        "            {",
        "                \"description\": \"Assault\",",
        "                \"count\": 1",
        "            }",
        "        ]",
        "    }",
        "}",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}

#[test]
fn json_round_trip_preserves_charge_triples() {
    let mapping = sample_mapping();
    for pretty in [false, true] {
        let rendered = render(&mapping, options(OutputFormat::Json, pretty)).unwrap();
        let parsed: BTreeMap<String, BTreeMap<String, Vec<Charge>>> =
            serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            triples(&parsed),
            vec![
                (
                    "1:30 p.m.".to_string(),
                    "Rick Poe".to_string(),
                    "Theft, under $5000".to_string(),
                    1
                ),
                (
                    "9:30 a.m.".to_string(),
                    "John Doe".to_string(),
                    "Assault".to_string(),
                    2
                ),
                (
                    "9:30 a.m.".to_string(),
                    "John Doe".to_string(),
                    "Mischief".to_string(),
                    1
                ),
            ]
        );
        assert!(parsed["9:30 a.m."]["Jane Roe"].is_empty());
    }
}

#[test]
fn text_lists_cases_with_underlines_and_counts() {
    let rendered = render(&sample_mapping(), options(OutputFormat::Text, false)).unwrap();
    let expected = concat!(
        ">> 9:30 a.m.\n",
        "John Doe\n",
        "--------\n",
        "* Assault (2 counts)\n",
        "* Mischief\n",
        "\n",
        "Jane Roe\n",
        "--------\n",
        "\n",
        ">> 1:30 p.m.\n",
        "Rick Poe\n",
        "--------\n",
        "* Theft, under $5000\n",
        "\n",
    );
    assert_eq!(rendered, expected);
}

#[test]
fn text_underline_counts_characters() {
    let mut mapping = DocketMapping::new();
    let index = mapping.ensure_slot("10:00 a.m.");
    mapping.slot_mut(index).unwrap().ensure_case("Zoë");

    let rendered = render(&mapping, options(OutputFormat::Text, false)).unwrap();
    assert_eq!(rendered, ">> 10:00 a.m.\nZoë\n---\n\n");
}

#[test]
fn csv_emits_one_record_per_charge() {
    let rendered = render(&sample_mapping(), options(OutputFormat::Csv, false)).unwrap();
    let expected = concat!(
        "9:30 a.m.,John Doe,Assault,2\n",
        "9:30 a.m.,John Doe,Mischief,1\n",
        "1:30 p.m.,Rick Poe,\"Theft, under $5000\",1\n",
    );
    assert_eq!(rendered, expected);
    assert!(!rendered.contains("Jane Roe"));
}

#[test]
fn csv_quotes_embedded_quotes_and_leading_spaces() {
    let mut mapping = DocketMapping::new();
    let index = mapping.ensure_slot("10:00 a.m.");
    mapping
        .slot_mut(index)
        .unwrap()
        .ensure_case(" John \"JJ\" Doe")
        .record_charge("Assault");

    let rendered = render(&mapping, options(OutputFormat::Csv, false)).unwrap();
    assert_eq!(rendered, "10:00 a.m.,\" John \"\"JJ\"\" Doe\",Assault,1\n");
}

#[test]
fn empty_mapping_renders_empty_outputs() {
    let mapping = DocketMapping::new();
    assert_eq!(render(&mapping, options(OutputFormat::Json, false)).unwrap(), "{}");
    assert_eq!(render(&mapping, options(OutputFormat::Text, false)).unwrap(), "");
    assert_eq!(render(&mapping, options(OutputFormat::Csv, false)).unwrap(), "");
}

#[test]
fn docket_page_renders_in_every_format() {
    let html = concat!(
        "<table>",
        "<tr><td><span>10:00 a.m.</span>&nbsp;John Doe</td><td></td></tr>",
        "<tr><td>John Doe</td><td>[s.1] Assault</td><td></td></tr>",
        "<tr><td>John Doe</td><td>[s.1] Assault</td><td></td></tr>",
        "</table>"
    );
    let mapping = extract(html, RowPolicy::Strict).unwrap().mapping;

    let text = render(&mapping, options(OutputFormat::Text, false)).unwrap();
    assert!(text.contains("* Assault (2 counts)\n"));

    let csv = render(&mapping, options(OutputFormat::Csv, false)).unwrap();
    assert_eq!(csv, "10:00 a.m.,John Doe,Assault,2\n");

    let json = render(&mapping, options(OutputFormat::Json, false)).unwrap();
    assert_eq!(
        json,
        r#"{"10:00 a.m.":{"John Doe":[{"description":"Assault","count":2}]}}"#
    );
}
