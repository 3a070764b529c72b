use std::cmp::Ordering;

use super::PricingRow;

/// A sortable projection of one row field.
enum SortValue {
    Number(f64),
    Text(String),
}

fn sort_value(row: &PricingRow, key: &str) -> Option<SortValue> {
    match key {
        "provider" => Some(SortValue::Text(row.provider.clone())),
        "model" => Some(SortValue::Text(row.model.clone())),
        "model_id" => row.model_id.clone().map(SortValue::Text),
        "input_per_mtok" => Some(SortValue::Number(row.input_per_mtok)),
        "output_per_mtok" => row.output_per_mtok.map(SortValue::Number),
        "cached_input_per_mtok" => row.cached_input_per_mtok.map(SortValue::Number),
        "currency" => row.currency.clone().map(SortValue::Text),
        "source_url" => row.source_url.clone().map(SortValue::Text),
        "retrieved_at" => row.retrieved_at.clone().map(SortValue::Text),
        "pricing_confidence" => row.pricing_confidence.clone().map(SortValue::Text),
        "tier" => row.tier.clone().map(SortValue::Text),
        "modality" => row.modality.clone().map(SortValue::Text),
        "tokenization" => row.tokenization.clone().map(SortValue::Text),
        "notes" => row.notes.clone().map(SortValue::Text),
        _ => None,
    }
}

fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (SortValue::Text(x), SortValue::Text(y)) => {
            // Case-insensitive first, byte order as the tiebreak so the
            // result is still total for strings differing only in case.
            x.to_lowercase()
                .cmp(&y.to_lowercase())
                .then_with(|| x.cmp(y))
        }
        // One key never projects to both kinds; order numbers first for
        // totality.
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    }
}

/// Stable sort of pricing rows by one field.
///
/// Rows missing the field sort after rows that have it; ties keep their
/// original relative order, enforced via the original index rather than
/// relying on the sort algorithm's stability. An unknown key returns the
/// rows unreordered.
pub fn sort_models(rows: &[PricingRow], key: &str) -> Vec<PricingRow> {
    let mut decorated: Vec<(usize, Option<SortValue>, &PricingRow)> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| (idx, sort_value(row, key), row))
        .collect();

    decorated.sort_by(|(ai, av, _), (bi, bv, _)| {
        let by_value = match (av, bv) {
            (Some(a), Some(b)) => compare_values(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_value.then_with(|| ai.cmp(bi))
    });

    decorated.into_iter().map(|(_, _, row)| row.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<PricingRow> {
        let mut a = PricingRow::minimal("OpenAI", "gpt-4o", 2.5);
        a.output_per_mtok = Some(10.0);
        let b = PricingRow::minimal("Anthropic", "claude-sonnet-4", 3.0);
        let mut c = PricingRow::minimal("Google", "gemini-2.5-pro", 1.25);
        c.output_per_mtok = Some(10.0);
        vec![a, b, c]
    }

    #[test]
    fn numeric_keys_compare_numerically() {
        let sorted = sort_models(&rows(), "input_per_mtok");
        let inputs: Vec<f64> = sorted.iter().map(|r| r.input_per_mtok).collect();
        assert_eq!(inputs, vec![1.25, 2.5, 3.0]);
    }

    #[test]
    fn textual_keys_compare_case_insensitively() {
        let sorted = sort_models(&rows(), "provider");
        let providers: Vec<&str> = sorted.iter().map(|r| r.provider.as_str()).collect();
        assert_eq!(providers, vec!["Anthropic", "Google", "OpenAI"]);
    }

    #[test]
    fn missing_values_sort_last() {
        let sorted = sort_models(&rows(), "output_per_mtok");
        assert_eq!(sorted[2].provider, "Anthropic");
    }

    #[test]
    fn equal_keys_preserve_original_order() {
        // gpt-4o and gemini both price output at 10.0; OpenAI came first.
        let sorted = sort_models(&rows(), "output_per_mtok");
        assert_eq!(sorted[0].provider, "OpenAI");
        assert_eq!(sorted[1].provider, "Google");
    }

    #[test]
    fn unknown_key_keeps_input_order() {
        let original = rows();
        let sorted = sort_models(&original, "no_such_field");
        assert_eq!(sorted, original);
    }
}
