use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use super::accumulator::DocketAccumulator;
use super::{DocketError, Extraction, RowPolicy};

const ROW_SELECTOR: &str = "table tr";
const TIME_SELECTOR: &str = "span";

/// Shape of a docket table row, decided purely by its element-child count.
///
/// The docket site renders case rows as two cells, the first holding the
/// names and a nested time `span`, and charge rows as three cells led by the
/// case and the charge. Anything else is layout. Tied to the current markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Case { time: String, names: String },
    Charge { case: String, charge: String },
    Ignored,
}

pub fn classify_row(row: ElementRef<'_>, time_selector: &Selector) -> RowKind {
    let cells: Vec<ElementRef<'_>> = row.children().filter_map(ElementRef::wrap).collect();

    match cells.as_slice() {
        [first, _] => {
            let time: String = first
                .select(time_selector)
                .flat_map(|span| span.text())
                .collect();
            let names = element_text(first).replacen(&time, "", 1);
            RowKind::Case { time, names }
        }
        [first, second, _] => RowKind::Charge {
            case: element_text(first),
            charge: element_text(second),
        },
        _ => RowKind::Ignored,
    }
}

pub fn extract(html: &str, policy: RowPolicy) -> Result<Extraction, DocketError> {
    let document = Html::parse_document(html);
    let row_selector = parse_selector(ROW_SELECTOR)?;
    let time_selector = parse_selector(TIME_SELECTOR)?;

    let mut accumulator = DocketAccumulator::new();
    for (index, row) in document.select(&row_selector).enumerate() {
        match classify_row(row, &time_selector) {
            RowKind::Case { time, names } => {
                accumulator.add_time(&time);
                accumulator.add_case(&names)?;
            }
            RowKind::Charge { case, charge } => match accumulator.add_charge(&case, &charge) {
                Ok(()) => {}
                Err(DocketError::MalformedCharge { text }) if policy == RowPolicy::Lenient => {
                    warn!(
                        row = index,
                        time = accumulator.current_time().unwrap_or_default(),
                        case = %case.trim(),
                        charge = %text,
                        "skipping charge row without statute prefix"
                    );
                    accumulator.record_warning(format!(
                        "row {index}: charge '{text}' has no statute prefix"
                    ));
                }
                Err(err) => return Err(err),
            },
            RowKind::Ignored => debug!(row = index, "ignoring non-data row"),
        }
    }

    let extraction = accumulator.finish();
    info!(
        time_slots = extraction.mapping.slots().len(),
        cases = extraction.mapping.case_count(),
        charges = extraction.mapping.charge_count(),
        warnings = extraction.warnings.len(),
        "extracted docket"
    );
    Ok(extraction)
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

fn parse_selector(selector: &'static str) -> Result<Selector, DocketError> {
    Selector::parse(selector).map_err(|err| DocketError::Selector {
        selector,
        reason: format!("{err:?}"),
    })
}
