use previsit_core::error::ParseFailureKind;
use previsit_core::models::summary::{ChartData, ClinicalSummary};
use previsit_core::parse::parse_summary;
use serde_json::json;

fn valid_response() -> serde_json::Value {
    json!({
        "summary": "32세 여성, LMP 2024-01-01. C.C: Dysmenorrhea 및 Menorrhagia 호소.",
        "sentiment": "#R/O_Adenomyosis",
        "keywords": ["Dysmenorrhea", "Menorrhagia", "NRS 7", "LMP 2024-01-01", "Analgesic refractory"],
        "doctorQuestions": [
            "생리량이 가장 많을 때 대형 패드를 몇 시간에 한 번 교체하시나요?",
            "성관계 후 출혈이 있었나요?"
        ],
        "chartData": { "pain": 7, "bleeding": 8, "urgency": 4.5, "stress": 6, "severity": 6 }
    })
}

#[test]
fn valid_json_parses_verbatim() {
    let summary = parse_summary(&valid_response().to_string()).unwrap();

    assert_eq!(
        summary,
        ClinicalSummary {
            summary: "32세 여성, LMP 2024-01-01. C.C: Dysmenorrhea 및 Menorrhagia 호소.".to_string(),
            sentiment: "#R/O_Adenomyosis".to_string(),
            keywords: vec![
                "Dysmenorrhea".to_string(),
                "Menorrhagia".to_string(),
                "NRS 7".to_string(),
                "LMP 2024-01-01".to_string(),
                "Analgesic refractory".to_string(),
            ],
            doctor_questions: vec![
                "생리량이 가장 많을 때 대형 패드를 몇 시간에 한 번 교체하시나요?".to_string(),
                "성관계 후 출혈이 있었나요?".to_string(),
            ],
            chart_data: ChartData {
                pain: 7.0,
                bleeding: 8.0,
                urgency: 4.5,
                stress: 6.0,
                severity: 6.0,
            },
        }
    );
    assert!(summary.out_of_range_scores().is_empty());
}

#[test]
fn serialized_summary_uses_wire_names() {
    let summary = parse_summary(&valid_response().to_string()).unwrap();
    let value = serde_json::to_value(&summary).unwrap();

    assert!(value.get("doctorQuestions").is_some());
    assert!(value.get("chartData").is_some());
    assert!(value.get("doctor_questions").is_none());
    assert_eq!(value["keywords"], valid_response()["keywords"]);
}

#[test]
fn malformed_text_is_classified() {
    let failure = parse_summary("{not json").unwrap_err();

    assert!(matches!(failure.kind, ParseFailureKind::MalformedJson(_)));
    assert_eq!(failure.raw_text, "{not json");
}

#[test]
fn missing_urgency_is_a_schema_violation() {
    let mut response = valid_response();
    response["chartData"]
        .as_object_mut()
        .unwrap()
        .remove("urgency");

    let failure = parse_summary(&response.to_string()).unwrap_err();
    match failure.kind {
        ParseFailureKind::SchemaViolation(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].path, "chartData.urgency");
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn arbitrary_inputs_never_panic() {
    let inputs = [
        "",
        "   ",
        "null",
        "42",
        "\"summary\"",
        "[]",
        "{}",
        "```json\n{}\n```",
        "{\"summary\": null}",
        "{\"chartData\": {}}",
    ];

    for input in inputs {
        assert!(parse_summary(input).is_err(), "{input:?} should not parse");
    }
}

#[test]
fn out_of_range_scores_pass_through() {
    let mut response = valid_response();
    response["chartData"]["pain"] = json!(12);
    response["chartData"]["stress"] = json!(-1);

    let summary = parse_summary(&response.to_string()).unwrap();
    assert_eq!(summary.chart_data.pain, 12.0);
    assert_eq!(
        summary.out_of_range_scores(),
        vec![("pain", 12.0), ("stress", -1.0)]
    );
}
