use previsit_core::models::questionnaire::{
    Category, CategoryKind, LastMenstrualPeriod, QuestionnaireRecord,
};
use previsit_core::narrative::{NO_PARTICULARS, NO_PATIENT_DATA, format_optional, format_record};
use serde_json::json;

fn record(value: serde_json::Value) -> QuestionnaireRecord {
    serde_json::from_value(value).expect("questionnaire should deserialize")
}

const COMMON_LABELS: [&str; 4] = [
    "LMP (Last Menstrual Period)",
    "Obstetric History (G-P-A)",
    "Past Medical History",
    "Patient Goals/Questions",
];

fn category_labels(category: &str) -> [&'static str; 5] {
    match category {
        "pregnancy" => [
            "UPT(임신테스트기)",
            "GA(추정주수)",
            "SX(주증상)",
            "PHx(산과력 특이사항)",
            "Meds(약물)",
        ],
        "preparation" => [
            "Duration(시도기간)",
            "Cycle(주기)",
            "Method(확인방법)",
            "Gyn Hx(부인과력)",
            "Partner Hx(배우자검사)",
        ],
        "period" => [
            "C.C(주호소)",
            "NRS(통증점수)",
            "Amount(월경량)",
            "Social Hx(생활변화)",
            "Family Hx(가족력)",
        ],
        "problem" => [
            "Discharge(분비물 양상)",
            "Pain/Sensation(통증/불편감)",
            "Onset(기간)",
            "Recurrence(재발여부)",
            "Sexual Hx(파트너)",
        ],
        "contraception" => [
            "Current Method(현재방법)",
            "Needs(희망상담)",
            "Smoking(흡연)",
            "Risk Factors(위험인자)",
            "Family Plan(향후계획)",
        ],
        other => panic!("no labels for {other}"),
    }
}

#[test]
fn every_known_category_renders_all_labels_with_placeholders() {
    for category in ["pregnancy", "preparation", "period", "problem", "contraception"] {
        let narrative = format_record(&record(json!({ "category": category })));
        let text = narrative.as_str();

        for label in category_labels(category) {
            let line = format!("- {label}: {NO_PARTICULARS}");
            assert!(text.contains(&line), "{category}: missing line {line:?} in\n{text}");
        }
        for label in COMMON_LABELS {
            assert!(text.contains(label), "{category}: missing common label {label}");
        }
        assert!(text.contains("[Specific Details]"));
        assert!(!text.contains("undefined"));
        assert!(!text.contains(": \n"), "{category}: empty value in\n{text}");
    }
}

#[test]
fn category_section_precedes_common_section() {
    let narrative = format_record(&record(json!({ "category": "problem" })));
    let text = narrative.as_str();

    let specific = text.find("[Specific Details]").unwrap();
    let common = text.find("[Common History]").unwrap();
    assert!(specific < common);
}

#[test]
fn period_scenario_renders_joined_symptoms_score_and_lmp() {
    let narrative = format_record(&record(json!({
        "category": "period",
        "period_symptom": ["dysmenorrhea", "menorrhagia"],
        "period_pain_score": 7,
        "common_lmp": "2024-01-01",
    })));
    let text = narrative.as_str();

    assert!(text.contains("- C.C(주호소): dysmenorrhea, menorrhagia"));
    assert!(text.contains("- NRS(통증점수): 7\n"));
    assert!(text.contains("- LMP (Last Menstrual Period): 2024-01-01"));
    assert!(text.contains("- Chief Complaint Category: 월경 이상 (Menstrual Disorders)"));
}

#[test]
fn unknown_category_renders_generic_label_without_specific_section() {
    let narrative = format_record(&record(json!({
        "category": "unknown_value",
        "period_symptom": ["dysmenorrhea"],
    })));
    let text = narrative.as_str();

    assert!(text.contains("- Chief Complaint Category: 일반 진료"));
    assert!(!text.contains("[Specific Details]"));
    assert!(!text.contains("C.C(주호소)"));
    for label in COMMON_LABELS {
        assert!(text.contains(label));
    }
}

#[test]
fn missing_category_is_unspecified() {
    let parsed = record(json!({ "common_goals": "검진" }));
    assert_eq!(parsed.category, Category::Unspecified(None));
    assert_eq!(parsed.category.kind(), CategoryKind::Unspecified);

    let text = format_record(&parsed).to_string();
    assert!(text.contains("- Patient Goals/Questions: 검진"));
}

#[test]
fn common_fields_use_their_own_fallbacks() {
    let text = format_record(&record(json!({ "category": "pregnancy" }))).to_string();

    assert!(text.contains("- LMP (Last Menstrual Period): Unknown"));
    assert!(text.contains("- Obstetric History (G-P-A): Not checked"));
    assert!(text.contains("- Past Medical History: None"));
    assert!(text.contains("- Patient Goals/Questions: None"));
}

#[test]
fn blank_answers_and_empty_lists_render_placeholder() {
    let text = format_record(&record(json!({
        "category": "contraception",
        "contra_current": "   ",
        "contra_wish": [],
        "contra_smoking": null,
        "contra_risk": "",
        "contra_plan": "2년 후 임신 계획",
        "common_lmp": "",
    })))
    .to_string();

    assert!(text.contains(&format!("- Current Method(현재방법): {NO_PARTICULARS}")));
    assert!(text.contains(&format!("- Needs(희망상담): {NO_PARTICULARS}")));
    assert!(text.contains(&format!("- Smoking(흡연): {NO_PARTICULARS}")));
    assert!(text.contains(&format!("- Risk Factors(위험인자): {NO_PARTICULARS}")));
    assert!(text.contains("- Family Plan(향후계획): 2년 후 임신 계획"));
    assert!(text.contains("- LMP (Last Menstrual Period): Unknown"));
}

#[test]
fn free_text_lmp_is_kept() {
    let text = format_record(&record(json!({
        "category": "pregnancy",
        "common_lmp": "모름",
        "preg_weeks": 8,
        "preg_symptoms": ["nausea", "spotting"],
    })))
    .to_string();

    assert!(text.contains("- LMP (Last Menstrual Period): 모름"));
    assert!(text.contains("- GA(추정주수): 8\n"));
    assert!(text.contains("- SX(주증상): nausea, spotting"));
}

#[test]
fn fields_of_other_categories_are_ignored() {
    let parsed = record(json!({
        "category": "preparation",
        "prep_duration": "1년",
        "preg_meds": "folic acid",
    }));

    let text = format_record(&parsed).to_string();
    assert!(text.contains("- Duration(시도기간): 1년"));
    assert!(!text.contains("folic acid"));
}

#[test]
fn absent_questionnaire_renders_no_patient_data() {
    assert_eq!(format_optional(None).as_str(), NO_PATIENT_DATA);

    let parsed = record(json!({ "category": "period" }));
    assert_eq!(format_optional(Some(&parsed)), format_record(&parsed));
}

#[test]
fn answers_from_other_categories_are_ignored_whatever_their_shape() {
    let parsed = record(json!({
        "category": "period",
        "period_symptom": ["dysmenorrhea"],
        "prep_method": "ovulation kit",
        "preg_symptoms": 3,
        "contra_wish": { "pill": true },
    }));

    let text = format_record(&parsed).to_string();
    assert!(text.contains("- C.C(주호소): dysmenorrhea"));
    assert!(!text.contains("ovulation kit"));
    assert!(!text.contains("Method(확인방법)"));
}

#[test]
fn non_string_category_is_unspecified() {
    let parsed = record(json!({ "category": 3, "period_symptom": ["dysmenorrhea"] }));
    assert_eq!(parsed.category, Category::Unspecified(Some("3".to_string())));

    let text = format_record(&parsed).to_string();
    assert!(text.contains("- Chief Complaint Category: 일반 진료"));
    assert!(!text.contains("[Specific Details]"));

    let parsed = record(json!({ "category": null }));
    assert_eq!(parsed.category, Category::Unspecified(None));
}

#[test]
fn lmp_with_a_time_is_kept_as_written() {
    let text = format_record(&record(json!({
        "category": "period",
        "common_lmp": "2024-01-01T23:30:00",
    })))
    .to_string();

    assert!(text.contains("- LMP (Last Menstrual Period): 2024-01-01T23:30:00"));
}

#[test]
fn lmp_calendar_date_is_parsed_as_a_date() {
    let parsed = record(json!({ "common_lmp": " 2024-02-29 " }));
    assert_eq!(
        parsed.common.lmp,
        Some(LastMenstrualPeriod::Date(jiff::civil::date(2024, 2, 29)))
    );

    let parsed = record(json!({ "common_lmp": "2023-02-30" }));
    assert_eq!(
        parsed.common.lmp,
        Some(LastMenstrualPeriod::Text("2023-02-30".to_string()))
    );
}
