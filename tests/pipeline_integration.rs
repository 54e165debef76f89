//! End-to-end tests for the host pipeline: TOML config on disk, JSON
//! records in, ranked JSON out.

use serde_json::{Value, json};
use serp::AppConfig;
use serp::pipeline::{read_candidates, run, write_ranked};
use serp_rank::SearchEngine;

fn rank_json(config: &AppConfig, query: &str, input: Value, engine: Option<SearchEngine>) -> Value {
    let records = read_candidates(input.to_string().as_bytes()).expect("read");
    let ranking = run(config, query, records, engine).expect("run");
    let mut out = Vec::new();
    write_ranked(&mut out, &ranking.into_records()).expect("write");
    serde_json::from_slice(&out).expect("json")
}

fn hrefs(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["href"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn config_file_overrides_priorities_and_token_length() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[ranker]\nmin_token_length = 2\n\n[priorities]\nyahoo = 4\n",
    )
    .expect("write");
    let config = AppConfig::from_file(&path).expect("load");

    let input = json!([
        {"title": "Nothing", "href": "naver-plain", "engine_name": "naver"},
        {"title": "Go by example", "href": "naver-go", "engine_name": "naver"},
        {"title": "Go", "href": "yahoo-go", "engine_name": "yahoo"}
    ]);
    let out = rank_json(&config, "go", input, None);
    assert_eq!(hrefs(&out), vec!["yahoo-go", "naver-go", "naver-plain"]);
}

#[test]
fn spec_scenario_end_to_end() {
    let input = json!([
        {"title": "Python Tutorial", "body": "Learn python basics", "sourcePriority": 3, "href": "a"},
        {"title": "Category: Python (Wikimedia)", "body": "", "sourcePriority": 3, "href": "b"},
        {"title": "Unrelated", "body": "python programming guide", "sourcePriority": 1, "href": "c"},
        {"title": "Python programming", "body": "no match here", "sourcePriority": 3, "href": "d"}
    ]);
    let out = rank_json(&AppConfig::default(), "python programming", input, None);
    assert_eq!(hrefs(&out), vec!["a", "d", "c"]);
}

#[test]
fn single_engine_input_is_stamped_and_cleaned() {
    let input = json!([
        {"title": "Related", "href": "https://search.naver.com/search.naver?query=x"},
        {"title": "Kept", "href": "https://kept.example", "body": "a \n b", "rank": 1}
    ]);
    let out = rank_json(&AppConfig::default(), "", input, Some(SearchEngine::Naver));
    assert_eq!(
        out,
        json!([{
            "title": "Kept",
            "href": "https://kept.example",
            "body": "a b",
            "engine_name": "naver",
            "engine_priority": 3,
            "rank": 1
        }])
    );
}

#[test]
fn empty_input_gives_empty_array() {
    let out = rank_json(&AppConfig::default(), "anything", json!([]), None);
    assert_eq!(out, json!([]));
}
