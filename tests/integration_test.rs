//! Integration tests for data-service.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use data_service::{CalculationError, DataService, Error};
use test_case::test_case;

#[test]
fn test_parse_data_mixed_whitespace() {
    let service = DataService::new();
    let input = "  SELECT *\n\tFROM   users\r\n WHERE id = 1  ";
    assert_eq!(service.parse_data(input), "SELECT*FROMusersWHEREid=1");
}

#[test]
fn test_parse_data_only_whitespace() {
    let service = DataService::new();
    assert_eq!(service.parse_data(" \t\n\r "), "");
}

#[test]
fn test_parse_data_keeps_non_ascii_separators() {
    let service = DataService::new();
    let input = "a\u{00A0}b\u{3000}c\u{0085}d";
    assert_eq!(service.parse_data(input), input);
    assert_eq!(service.parse_data("x \u{00A0}\ty"), "x\u{00A0}y");
}

#[test]
fn test_hooks_are_independent_of_other_calls() {
    let service = DataService::new();
    service.connect_to_database().expect("connect hook");
    assert_eq!(service.parse_data("a b"), "ab");
    service.process_request().expect("process hook");
    assert_eq!(service.complex_calculation(&[1, 2, 3]).unwrap(), 12);
}

#[test_case(&[], 0 ; "empty")]
#[test_case(&[7], 0 ; "single element has no pairs")]
#[test_case(&[1, 2], 3 ; "one pair")]
#[test_case(&[1, 2, 3], 12 ; "three elements")]
#[test_case(&[1, 2, 3, 4], 30 ; "four elements")]
#[test_case(&[-1, -2, -3], -12 ; "negatives")]
#[test_case(&[5, -5, 10], 20 ; "mixed signs")]
fn test_complex_calculation(numbers: &[i64], expected: i64) {
    let service = DataService::new();
    assert_eq!(service.complex_calculation(numbers).unwrap(), expected);
}

#[test]
fn test_complex_calculation_does_not_wrap_at_32_bits() {
    let service = DataService::new();
    let total = service
        .complex_calculation(&[2_000_000_000, 2_000_000_000])
        .unwrap();
    assert_eq!(total, 4_000_000_000);
}

#[test_case(&[i64::MAX, i64::MAX] ; "positive overflow")]
#[test_case(&[i64::MIN, -1] ; "negative overflow")]
#[test_case(&[i64::MAX / 2, i64::MAX / 2, i64::MAX / 2] ; "overflow from multiplier")]
fn test_complex_calculation_overflow(numbers: &[i64]) {
    let service = DataService::new();
    let err = service.complex_calculation(numbers).unwrap_err();
    assert!(matches!(
        err,
        Error::Calculation(CalculationError::Overflow { len }) if len == numbers.len()
    ));
}

mod property_tests {
    use data_service::{DataService, contains_whitespace, is_ascii_space, pairwise_sum};
    use proptest::prelude::*;

    fn pairwise_sum_naive(numbers: &[i64]) -> i128 {
        let mut total = 0i128;
        for i in 0..numbers.len() {
            for j in (i + 1)..numbers.len() {
                total += i128::from(numbers[i]) + i128::from(numbers[j]);
            }
        }
        total
    }

    proptest! {
        #[test]
        fn parse_data_output_has_no_whitespace(input in "\\PC*") {
            let output = DataService::new().parse_data(&input);
            prop_assert!(!output.chars().any(is_ascii_space));
        }

        #[test]
        fn parse_data_without_whitespace_is_identity(input in "[a-zA-Z0-9_.,;!?世界-]{0,100}") {
            prop_assume!(!contains_whitespace(&input));
            prop_assert_eq!(DataService::new().parse_data(&input), input);
        }

        #[test]
        fn parse_data_keeps_non_whitespace_in_order(input in "[a-z \t\n]{0,200}") {
            let expected: String = input.chars().filter(|&c| !is_ascii_space(c)).collect();
            prop_assert_eq!(DataService::new().parse_data(&input), expected);
        }

        #[test]
        fn parse_data_keeps_unicode_separators(input in "[a-z\u{00A0}\u{0085}\u{2028}\u{3000}]{0,100}") {
            prop_assert_eq!(DataService::new().parse_data(&input), input);
        }

        #[test]
        fn parse_data_is_idempotent(input in "\\PC*") {
            let service = DataService::new();
            let once = service.parse_data(&input);
            prop_assert_eq!(service.parse_data(&once), once.clone());
        }

        #[test]
        fn pairwise_sum_matches_naive(numbers in prop::collection::vec(-1_000_000i64..1_000_000, 0..50)) {
            let expected = i64::try_from(pairwise_sum_naive(&numbers)).unwrap();
            prop_assert_eq!(pairwise_sum(&numbers), Ok(expected));
        }

        #[test]
        fn pairwise_sum_exact_or_overflow(numbers in prop::collection::vec(any::<i64>(), 0..8)) {
            let exact = pairwise_sum_naive(&numbers);
            match i64::try_from(exact) {
                Ok(expected) => {
                    prop_assert_eq!(pairwise_sum(&numbers), Ok(expected));
                }
                Err(_) => {
                    prop_assert!(pairwise_sum(&numbers).is_err());
                }
            }
        }
    }
}

/// CLI command integration tests.
mod cli_tests {
    use data_service::cli::commands::execute_with_input;
    use data_service::cli::parser::{Cli, Commands};
    use std::io;

    fn make_cli(command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: "text".to_string(),
            command,
        }
    }

    fn make_cli_json(command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: "json".to_string(),
            command,
        }
    }

    #[test]
    fn test_cmd_parse_text() {
        let cli = make_cli(Commands::Parse {
            text: Some("hello   world".to_string()),
        });
        let output = execute_with_input(&cli, io::empty()).expect("parse");
        assert_eq!(output, "helloworld\n");
    }

    #[test]
    fn test_cmd_parse_stdin_json() {
        let cli = make_cli_json(Commands::Parse { text: None });
        let output = execute_with_input(&cli, "a b\nc\n".as_bytes()).expect("parse");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value["output"], "abc");
        assert_eq!(value["input_len"], 6);
        assert_eq!(value["removed"], 3);
    }

    #[test]
    fn test_cmd_calc_json() {
        let cli = make_cli_json(Commands::Calc {
            numbers: vec![1, 2, 3, 4],
        });
        let output = execute_with_input(&cli, io::empty()).expect("calc");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(value["count"], 4);
        assert_eq!(value["pairs"], 6);
        assert_eq!(value["total"], 30);
    }

    #[test]
    fn test_cmd_calc_overflow_error() {
        let cli = make_cli(Commands::Calc {
            numbers: vec![i64::MAX, 1],
        });
        let err = execute_with_input(&cli, io::empty()).unwrap_err();
        assert!(err.to_string().contains("overflows i64"));
    }

    #[test]
    fn test_cmd_connect_and_process() {
        let output = execute_with_input(&make_cli(Commands::Connect), io::empty()).expect("connect");
        assert!(output.contains("Connection hook ran"));

        let output =
            execute_with_input(&make_cli(Commands::Process), io::empty()).expect("process");
        assert_eq!(output, "Request processed.\n");
    }
}
