// src/normalize/fill.rs
use std::collections::HashMap;

use tracing::warn;

use super::EventTable;

/// Replace each empty cell with the nearest preceding non-empty value in the
/// same column. Leading empty cells stay empty.
pub fn forward_fill(column: &mut [String]) {
    let mut last_filled: Option<usize> = None;
    for i in 0..column.len() {
        if column[i].is_empty() {
            if let Some(j) = last_filled {
                column[i] = column[j].clone();
            }
        } else {
            last_filled = Some(i);
        }
    }
}

/// Most frequent non-empty value in a column. Ties go to the first value to
/// reach the winning count, scanning in row order. `None` when every cell is
/// empty.
pub fn most_frequent(column: &[String]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<(&str, usize)> = None;

    for cell in column {
        if cell.is_empty() {
            continue;
        }
        let count = counts.entry(cell.as_str()).or_insert(0);
        *count += 1;
        if best.map_or(true, |(_, n)| *count > n) {
            best = Some((cell.as_str(), *count));
        }
    }

    best.map(|(value, _)| value.to_owned())
}

/// Majority-value imputation for `time_zone` and `city`: trim `time_zone`
/// cells, then substitute each column's most frequent non-empty value into
/// any cell still empty. A column with no non-empty value at all is left
/// unchanged (the majority is undefined there). Idempotent.
pub fn impute(table: &mut EventTable) {
    for cell in &mut table.time_zone {
        let trimmed = cell.trim();
        if trimmed.len() != cell.len() {
            *cell = trimmed.to_owned();
        }
    }

    impute_column("time_zone", &mut table.time_zone);
    impute_column("city", &mut table.city);
}

fn impute_column(name: &str, column: &mut [String]) {
    let Some(majority) = most_frequent(column) else {
        warn!(column = name, "no non-empty values, skipping imputation");
        return;
    };
    for cell in column.iter_mut() {
        if cell.is_empty() {
            *cell = majority.clone();
        }
    }
}
