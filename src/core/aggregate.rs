use crate::domain::model::{Aggregation, InputFailure, InputOutcome};
use std::collections::HashSet;

/// Merges per-input results in input order, keeping the first occurrence of
/// every formatted number. Failed inputs contribute nothing and are recorded
/// in [`Aggregation::failures`].
pub fn merge(outcomes: Vec<InputOutcome>) -> Aggregation {
    let mut seen = HashSet::new();
    let mut aggregation = Aggregation::default();

    for outcome in outcomes {
        match outcome.result {
            Ok(phones) => {
                tracing::debug!("{}: {} numbers", outcome.source, phones.len());
                for phone in phones {
                    if seen.insert(phone.clone()) {
                        aggregation.phones.push(phone);
                    }
                }
            }
            Err(e) => {
                tracing::error!("❌ {}", e);
                aggregation.failures.push(InputFailure {
                    input: outcome.source.label(),
                    message: e.to_string(),
                });
            }
        }
    }

    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::extract;
    use crate::domain::model::{InputSource, PhoneNumber};
    use crate::utils::error::PhoneError;
    use std::path::PathBuf;

    fn ok(name: &str, text: &str) -> InputOutcome {
        InputOutcome {
            source: InputSource::File(PathBuf::from(name)),
            result: Ok(extract(text)),
        }
    }

    fn failed(name: &str) -> InputOutcome {
        InputOutcome {
            source: InputSource::File(PathBuf::from(name)),
            result: Err(PhoneError::retrieval(name, "No such file or directory")),
        }
    }

    fn strings(aggregation: &Aggregation) -> Vec<&str> {
        aggregation.phones.iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_same_number_across_inputs_appears_once() {
        let merged = merge(vec![ok("a.txt", "8-913-111-22-33"), ok("b.txt", "+7(913)111-22-33")]);

        assert_eq!(strings(&merged), vec!["+7(913)111-22-33"]);
        assert!(merged.failures.is_empty());
    }

    #[test]
    fn test_input_order_then_inner_order() {
        let merged = merge(vec![
            ok("a.txt", "89130000002 89130000001"),
            ok("b.txt", "89130000003 89130000002"),
        ]);

        assert_eq!(
            strings(&merged),
            vec!["+7(913)000-00-02", "+7(913)000-00-01", "+7(913)000-00-03"]
        );
    }

    #[test]
    fn test_failed_input_is_isolated() {
        let merged = merge(vec![
            ok("a.txt", "89130000001"),
            failed("missing.txt"),
            ok("c.txt", "89130000002"),
        ]);

        assert_eq!(strings(&merged), vec!["+7(913)000-00-01", "+7(913)000-00-02"]);
        assert_eq!(merged.failures.len(), 1);
        assert_eq!(merged.failures[0].input, "missing.txt");
        assert!(merged.failures[0].message.contains("No such file"));
    }

    #[test]
    fn test_empty_outcomes() {
        assert_eq!(merge(Vec::new()), Aggregation::default());
    }
}
