use std::collections::HashMap;

use domain_tally::{CustomerImporter, EmailPattern, TieBreak};
use proptest::prelude::*;
use tracing::Dispatch;

fn customer_rows() -> impl Strategy<Value = Vec<(String, &'static str, bool)>> {
    prop::collection::vec(
        (
            "[a-z]{1,8}",
            prop::sample::select(vec!["d1.com", "d2.org", "sample.net", "mail.co.uk", "x.io"]),
            any::<bool>(),
        ),
        0..200,
    )
}

fn to_csv(rows: &[(String, &'static str, bool)]) -> String {
    rows.iter()
        .map(|(local, domain, valid)| {
            let email = if *valid {
                format!("{local}@{domain}")
            } else {
                format!("{local}.{domain}")
            };
            format!("first,last,{email},gender,127.0.0.1\n")
        })
        .collect()
}

proptest! {
    #[test]
    fn test_counts_sum_to_valid_records(rows in customer_rows()) {
        let importer = CustomerImporter::new(Dispatch::none(), EmailPattern::standard().unwrap());
        let result = importer.process(to_csv(&rows).as_bytes()).unwrap();

        let valid = rows.iter().filter(|(_, _, valid)| *valid).count() as u64;
        let total: u64 = result.iter().map(|entry| entry.count).sum();
        prop_assert_eq!(total, valid);

        let mut expected: HashMap<&str, u64> = HashMap::new();
        for (_, domain, valid) in &rows {
            if *valid {
                *expected.entry(*domain).or_insert(0) += 1;
            }
        }
        let actual: HashMap<&str, u64> = result
            .iter()
            .map(|entry| (entry.domain.as_str(), entry.count))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_output_sorted_by_count(rows in customer_rows(), sort_ties in any::<bool>()) {
        let tie_break = if sort_ties { TieBreak::DomainAscending } else { TieBreak::Unspecified };
        let importer = CustomerImporter::new(Dispatch::none(), EmailPattern::standard().unwrap())
            .tie_break(tie_break);
        let result = importer.process(to_csv(&rows).as_bytes()).unwrap();

        for pair in result.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if sort_ties && pair[0].count == pair[1].count {
                prop_assert!(pair[0].domain < pair[1].domain);
            }
        }
        prop_assert!(result.iter().all(|entry| entry.count >= 1));
    }
}
