use crate::types::schema_types::TableSchema;
use crate::types::storage_types::Record;

/// Prints records as a bordered SQL-style table, columns sized to fit
/// the widest cell.
pub fn print_table(schema: &TableSchema, records: &[Record]) {
    if schema.attribute_count() == 0 {
        println!("(no columns)");
        return;
    }

    // header names set the minimum widths
    let mut widths: Vec<usize> = schema
        .attributes()
        .iter()
        .map(|a| a.name().len())
        .collect();

    // widen to the largest cell per column
    for record in records {
        for (i, value) in record.values().iter().enumerate() {
            let cell = value.to_string();
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let border = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+";

    let header = schema
        .attributes()
        .iter()
        .zip(&widths)
        .map(|(a, w)| format!("| {:<width$} ", a.name(), width = *w))
        .collect::<String>()
        + "|";

    println!("{}", border);
    println!("{}", header);
    println!("{}", border);

    for record in records {
        let line = record
            .values()
            .iter()
            .zip(&widths)
            .map(|(value, w)| format!("| {:<width$} ", value.to_string(), width = *w))
            .collect::<String>()
            + "|";
        println!("{}", line);
    }

    println!("{}", border);
}
