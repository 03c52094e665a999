//! Unit tests for stats data types

use super::*;
use serde_json::json;

#[cfg(test)]
mod type_tests {
    use super::*;

    fn team(code: &str) -> TeamCode {
        code.parse().unwrap()
    }

    #[test]
    fn test_parse_page_array_of_objects() {
        let payload = json!([
            {"PlayerName": "Jayson Tatum", "Team": "BOS", "Points": 26.9},
            {"PlayerName": "Jaylen Brown", "Team": "BOS", "Points": 23.0}
        ]);

        let records = parse_page(payload).unwrap().records;
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("PlayerName"),
            Some(&FieldValue::Text("Jayson Tatum".to_string()))
        );
        assert_eq!(records[1].get("Team").unwrap().to_cell(), "BOS");
    }

    #[test]
    fn test_parse_page_single_object_is_one_record() {
        let payload = json!({"PlayerName": "Stephen Curry", "Games": 74});

        let records = parse_page(payload).unwrap().records;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("Games").unwrap().to_cell(), "74");
    }

    #[test]
    fn test_parse_page_empty_payloads() {
        for payload in [json!([]), json!({}), Value::Null] {
            let page = parse_page(payload).unwrap();
            assert!(page.is_empty());
            assert!(page.records.is_empty());
        }
    }

    #[test]
    fn test_parse_page_rejects_scalars() {
        let result = parse_page(json!("rate limited"));
        match result {
            Err(StatsError::InvalidPayload { reason }) => {
                assert!(reason.contains("a string"));
            }
            other => panic!("Expected InvalidPayload, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_page_skips_non_object_elements() {
        let payload = json!([{"PlayerName": "A"}, null, 42, {"PlayerName": "B"}]);
        let page = parse_page(payload).unwrap();

        assert_eq!(page.size, 4);
        assert_eq!(page.skipped, 2);
        assert!(!page.is_empty());
        let names: Vec<String> = page
            .records
            .iter()
            .map(|r| r.get("PlayerName").unwrap().to_cell())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_page_array_of_nulls_is_not_empty() {
        let page = parse_page(json!([null])).unwrap();
        assert_eq!(page.size, 1);
        assert!(page.records.is_empty());
        assert!(!page.is_empty());
    }

    #[test]
    fn test_record_keeps_response_field_order() {
        let payload = json!({"Zeta": 1, "Alpha": 2, "Mid": 3});
        let records = parse_page(payload).unwrap().records;
        let names: Vec<&str> = records[0].field_names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_field_value_cells() {
        assert_eq!(FieldValue::Null.to_cell(), "");
        assert_eq!(FieldValue::Bool(true).to_cell(), "true");
        assert_eq!(FieldValue::from(json!(12.5)).to_cell(), "12.5");
        assert_eq!(FieldValue::from(json!("x")).to_cell(), "x");
        assert_eq!(FieldValue::from(json!([1, 2])).to_cell(), "[1,2]");
        assert_eq!(
            FieldValue::from(json!({"a": null})).to_cell(),
            "{\"a\":null}"
        );
        assert!(FieldValue::Null.is_null());
    }

    #[test]
    fn test_record_serializes_as_object() {
        let records = parse_page(json!({"PlayerName": "Luka Doncic", "Age": 25, "Rookie": false}))
            .unwrap()
            .records;
        let value = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(
            value,
            json!({"PlayerName": "Luka Doncic", "Age": 25, "Rookie": false})
        );
    }

    #[test]
    fn test_page_params_query_names() {
        let config = FetchConfig::builder("hoops", "http://localhost/players")
            .season(Season::new(2024))
            .order(SortOrder::Desc)
            .page_size(25)
            .build()
            .unwrap();

        let query = config.page_params(&team("MIA"), 3).to_query();
        assert_eq!(
            query,
            vec![
                ("season", "2024".to_string()),
                ("team", "MIA".to_string()),
                ("sortBy", "PlayerName".to_string()),
                ("ascending", "false".to_string()),
                ("pageNumber", "3".to_string()),
                ("pageSize", "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_fetch_config_defaults() {
        let config = FetchConfig::builder("stats", "https://api.example.com/players")
            .build()
            .unwrap();

        assert_eq!(config.api_name(), "stats");
        assert_eq!(config.api_url().as_str(), "https://api.example.com/players");
        assert_eq!(config.season(), Season::default());
        assert_eq!(config.sort_by(), DEFAULT_SORT_BY);
        assert_eq!(config.order(), SortOrder::Asc);
        assert_eq!(config.page_size(), 50);
        assert_eq!(config.delay(), Duration::from_secs(1));
        assert_eq!(config.teams().len(), 30);
    }

    #[test]
    fn test_fetch_config_export_file_name() {
        let config = FetchConfig::builder("hoops", "http://localhost/players")
            .season(Season::new(2024))
            .build()
            .unwrap();
        assert_eq!(config.export_file_name(), "hoops_2024.csv");
    }

    #[test]
    fn test_fetch_config_rejects_zero_page_size() {
        let result = FetchConfig::builder("stats", "http://localhost/players")
            .page_size(0)
            .build();
        assert!(matches!(result, Err(StatsError::InvalidPageSize)));
    }

    #[test]
    fn test_fetch_config_rejects_empty_team_list() {
        let result = FetchConfig::builder("stats", "http://localhost/players")
            .teams(Vec::new())
            .build();
        assert!(matches!(result, Err(StatsError::NoTeams)));
    }

    #[test]
    fn test_fetch_config_rejects_bad_urls() {
        let result = FetchConfig::builder("stats", "not a url").build();
        assert!(matches!(result, Err(StatsError::InvalidUrl { .. })));

        let result = FetchConfig::builder("stats", "ftp://example.com/players").build();
        match result {
            Err(StatsError::InvalidUrl { reason, .. }) => assert!(reason.contains("ftp")),
            other => panic!("Expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_config_keeps_team_order() {
        let config = FetchConfig::builder("stats", "http://localhost/players")
            .teams(vec![team("MIA"), team("ATL"), team("BOS")])
            .build()
            .unwrap();
        let codes: Vec<&str> = config.teams().iter().map(|t| t.as_str()).collect();
        assert_eq!(codes, vec!["MIA", "ATL", "BOS"]);
    }
}
