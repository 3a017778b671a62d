use crate::model::{Charge, DocketMapping};

pub fn render(mapping: &DocketMapping) -> String {
    let mut out = String::new();

    for slot in mapping.slots() {
        out.push_str(&format!(">> {}\n", slot.label));
        for entry in &slot.cases {
            let underline = "-".repeat(entry.label.chars().count());
            out.push_str(&format!("{}\n{underline}\n", entry.label));
            for charge in &entry.charges {
                out.push_str(&bullet(charge));
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out
}

fn bullet(charge: &Charge) -> String {
    if charge.has_multiple() {
        format!("* {} ({} counts)", charge.description, charge.count)
    } else {
        format!("* {}", charge.description)
    }
}
