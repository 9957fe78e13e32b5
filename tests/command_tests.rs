use scrollscan_analytics::commands::{
    build_report, validate_analyze_args, validate_balance_args, AnalyzeArgs, BalanceArgs,
};
use scrollscan_analytics::explorer::TransactionRecord;
use scrollscan_analytics::output::{format_report, report_to_string, ActivityReport};

const ADDRESS: &str = "0x4F5197CD2BAdF78Cd5C63d7a1E0D8E7F0eD7e906";

fn valid_args() -> AnalyzeArgs {
    AnalyzeArgs {
        api_key: "TESTKEY".to_string(),
        address: ADDRESS.to_string(),
        ..Default::default()
    }
}

fn transfer() -> TransactionRecord {
    TransactionRecord {
        timestamp: Some("1698694940".to_string()),
        to: Some("0xrecipient".to_string()),
        value: Some("1000000000000000000".to_string()),
        gas_used: Some("21000".to_string()),
        gas_price: Some("1000000000".to_string()),
        input: Some("0x".to_string()),
        receipt_status: Some("1".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_validate_args_valid() {
    assert!(validate_analyze_args(&valid_args()).is_ok());
}

#[test]
fn test_validate_args_empty_api_key() {
    let args = AnalyzeArgs {
        api_key: String::new(),
        ..valid_args()
    };
    assert!(validate_analyze_args(&args).is_err());
}

#[test]
fn test_validate_args_invalid_url_scheme() {
    let args = AnalyzeArgs {
        explorer_url: "ftp://api.scrollscan.com/api".to_string(),
        ..valid_args()
    };
    assert!(validate_analyze_args(&args).is_err());

    let args = AnalyzeArgs {
        price_url: String::new(),
        ..valid_args()
    };
    assert!(validate_analyze_args(&args).is_err());
}

#[test]
fn test_validate_args_bad_address() {
    let args = AnalyzeArgs {
        address: "0x1234".to_string(),
        ..valid_args()
    };
    assert!(validate_analyze_args(&args).is_err());
}

#[test]
fn test_validate_args_reversed_block_range() {
    let args = AnalyzeArgs {
        start_block: 500,
        end_block: 100,
        ..valid_args()
    };
    assert!(validate_analyze_args(&args).is_err());

    let args = AnalyzeArgs {
        start_block: 100,
        end_block: 100,
        ..valid_args()
    };
    assert!(validate_analyze_args(&args).is_ok());
}

#[test]
fn test_validate_args_paging_limits() {
    for (page, offset) in [(0, 100), (1, 0), (1, 10_001)] {
        let args = AnalyzeArgs {
            page,
            offset,
            ..valid_args()
        };
        assert!(validate_analyze_args(&args).is_err(), "page {} offset {}", page, offset);
    }
}

#[test]
fn test_validate_args_unquoted_fiat() {
    let args = AnalyzeArgs {
        fiat: "GBP".to_string(),
        ..valid_args()
    };
    assert!(validate_analyze_args(&args).is_err());

    for fiat in ["USD", "EUR", "BTC"] {
        let args = AnalyzeArgs {
            fiat: fiat.to_string(),
            ..valid_args()
        };
        assert!(validate_analyze_args(&args).is_ok(), "fiat {}", fiat);
    }
}

#[test]
fn test_validate_balance_args() {
    let args = BalanceArgs {
        api_key: "TESTKEY".to_string(),
        address: ADDRESS.to_string(),
        ..Default::default()
    };
    assert!(validate_balance_args(&args).is_ok());

    let args = BalanceArgs {
        api_key: "TESTKEY".to_string(),
        ..Default::default()
    };
    assert!(validate_balance_args(&args).is_err());

    let args = BalanceArgs {
        api_key: "TESTKEY".to_string(),
        address: ADDRESS.to_string(),
        fiat: "GBP".to_string(),
        ..Default::default()
    };
    assert!(validate_balance_args(&args).is_err());
}

#[test]
fn test_query_carries_paging() {
    let args = AnalyzeArgs {
        page: 3,
        offset: 25,
        ..valid_args()
    };
    let query = args.query();
    assert_eq!(query.address, ADDRESS);
    assert_eq!(query.page, 3);
    assert_eq!(query.offset, 25);
}

#[test]
fn test_build_report_priced() {
    let report = build_report(ADDRESS, &[transfer()], "USD", Some(2000.0)).unwrap();

    let fiat = report.fiat.as_ref().expect("fiat totals");
    assert_eq!(fiat.rate, 2000.0);
    assert_eq!(fiat.total_volume, 2000.0);
    assert_eq!(report.total_volume_eth, 1.0);
    assert_eq!(report.unique_days, 1);

    let text = format_report(&report);
    assert!(text.contains("Total volume in USD: $2,000.00"));
    assert!(text.contains("Total gas fees in USD: $0.04"));
}

#[test]
fn test_build_report_without_rate() {
    let report = build_report(ADDRESS, &[transfer()], "USD", None).unwrap();

    assert!(report.fiat.is_none());
    assert_eq!(report.total_volume_eth, 1.0);
    assert!(format_report(&report).contains("rate not available"));
}

#[test]
fn test_build_report_propagates_bad_data() {
    let mut bad = transfer();
    bad.gas_price = Some("cheap".to_string());

    assert!(build_report(ADDRESS, &[bad], "USD", Some(2000.0)).is_err());
}

#[test]
fn test_report_json_round_trip_keeps_fiat() {
    let report = build_report(ADDRESS, &[transfer()], "EUR", Some(1700.0)).unwrap();
    let loaded: ActivityReport = serde_json::from_str(&report_to_string(&report).unwrap()).unwrap();

    assert_eq!(loaded.fiat_currency, "EUR");
    assert_eq!(loaded.fiat, report.fiat);
    assert_eq!(loaded.successful_transactions, 1);
}
