use crate::model::DocketMapping;

const SEPARATOR: char = ',';

/// One `time,case,charge,count` record per charge; cases without charges emit nothing.
pub fn render(mapping: &DocketMapping) -> String {
    let mut out = String::new();

    for slot in mapping.slots() {
        for entry in &slot.cases {
            for charge in &entry.charges {
                let count = charge.count.to_string();
                write_record(
                    &mut out,
                    &[&slot.label, &entry.label, &charge.description, &count],
                );
            }
        }
    }

    out
}

fn write_record(out: &mut String, fields: &[&str]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.push(SEPARATOR);
        }
        if needs_quotes(field) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
        || field.starts_with(char::is_whitespace)
}
