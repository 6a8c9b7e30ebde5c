//! Questionnaire → narrative formatting.
//!
//! Turns a [`QuestionnaireRecord`] into the labelled case text handed to the
//! generation backend. The labels are clinical abbreviations the summary
//! prompt relies on, so each field always renders under the same label and
//! every field renders, answered or not.

use std::fmt;

use crate::models::questionnaire::{
    Answer, Category, CommonFields, LastMenstrualPeriod, QuestionnaireRecord,
};

/// Placeholder for an unanswered category question ("no particulars").
pub const NO_PARTICULARS: &str = "특이사항 없음";

/// Narrative used when a request carries no questionnaire at all.
pub const NO_PATIENT_DATA: &str = "환자 데이터가 없습니다.";

const LMP_UNKNOWN: &str = "Unknown";
const GPA_NOT_CHECKED: &str = "Not checked";
const NONE_REPORTED: &str = "None";

/// Case text derived from one questionnaire. Only the formatter builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeBlock(String);

impl NarrativeBlock {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NarrativeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labelled line of the narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

/// Format a questionnaire into its narrative block.
pub fn format_record(record: &QuestionnaireRecord) -> NarrativeBlock {
    let mut block = String::from("[Patient Assessment Data]\n");
    block.push_str(&format!(
        "- Chief Complaint Category: {}\n",
        record.category.kind().label()
    ));

    if let Some(details) = category_details(&record.category) {
        block.push_str("\n[Specific Details]\n");
        push_lines(&mut block, &details);
    }

    block.push_str("\n[Common History]\n");
    push_lines(&mut block, &common_details(&record.common));

    NarrativeBlock(block.trim_end().to_string())
}

/// Like [`format_record`], for requests that may omit the questionnaire.
pub fn format_optional(record: Option<&QuestionnaireRecord>) -> NarrativeBlock {
    match record {
        Some(record) => format_record(record),
        None => NarrativeBlock(NO_PATIENT_DATA.to_string()),
    }
}

/// Category-specific lines in fixed order, or `None` for an unspecified
/// category, which has no specific section.
pub fn category_details(category: &Category) -> Option<Vec<DetailLine>> {
    let lines = match category {
        Category::Pregnancy(form) => vec![
            answer("UPT(임신테스트기)", &form.preg_test_result),
            answer("GA(추정주수)", &form.preg_weeks),
            list("SX(주증상)", &form.preg_symptoms),
            answer("PHx(산과력 특이사항)", &form.preg_history_detail),
            answer("Meds(약물)", &form.preg_meds),
        ],
        Category::Preparation(form) => vec![
            answer("Duration(시도기간)", &form.prep_duration),
            answer("Cycle(주기)", &form.prep_cycle_detail),
            list("Method(확인방법)", &form.prep_method),
            list("Gyn Hx(부인과력)", &form.prep_history),
            answer("Partner Hx(배우자검사)", &form.prep_partner),
        ],
        Category::Period(form) => vec![
            list("C.C(주호소)", &form.period_symptom),
            answer("NRS(통증점수)", &form.period_pain_score),
            answer("Amount(월경량)", &form.period_amount),
            answer("Social Hx(생활변화)", &form.period_change),
            answer("Family Hx(가족력)", &form.period_family),
        ],
        Category::Problem(form) => vec![
            list("Discharge(분비물 양상)", &form.prob_discharge_color),
            list("Pain/Sensation(통증/불편감)", &form.prob_sensation),
            answer("Onset(기간)", &form.prob_duration),
            answer("Recurrence(재발여부)", &form.prob_recurrence),
            answer("Sexual Hx(파트너)", &form.prob_partner),
        ],
        Category::Contraception(form) => vec![
            answer("Current Method(현재방법)", &form.contra_current),
            list("Needs(희망상담)", &form.contra_wish),
            answer("Smoking(흡연)", &form.contra_smoking),
            answer("Risk Factors(위험인자)", &form.contra_risk),
            answer("Family Plan(향후계획)", &form.contra_plan),
        ],
        Category::Unspecified(_) => return None,
    };
    Some(lines)
}

/// Common-history lines, each with its own fallback.
pub fn common_details(common: &CommonFields) -> Vec<DetailLine> {
    let lmp = match &common.lmp {
        Some(LastMenstrualPeriod::Date(date)) => Some(date.to_string()),
        Some(LastMenstrualPeriod::Text(text)) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        None => None,
    };

    vec![
        DetailLine {
            label: "LMP (Last Menstrual Period)",
            value: lmp.unwrap_or_else(|| LMP_UNKNOWN.to_string()),
        },
        answer_or("Obstetric History (G-P-A)", &common.obstetric_history, GPA_NOT_CHECKED),
        answer_or("Past Medical History", &common.past_medical_history, NONE_REPORTED),
        answer_or("Patient Goals/Questions", &common.goals, NONE_REPORTED),
    ]
}

fn push_lines(block: &mut String, lines: &[DetailLine]) {
    for line in lines {
        block.push_str(&format!("- {}: {}\n", line.label, line.value));
    }
}

fn answer(label: &'static str, value: &Option<Answer>) -> DetailLine {
    answer_or(label, value, NO_PARTICULARS)
}

fn answer_or(label: &'static str, value: &Option<Answer>, fallback: &str) -> DetailLine {
    DetailLine {
        label,
        value: value
            .as_ref()
            .and_then(Answer::rendered)
            .unwrap_or_else(|| fallback.to_string()),
    }
}

fn list(label: &'static str, items: &Option<Vec<String>>) -> DetailLine {
    let joined = items
        .iter()
        .flatten()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    DetailLine {
        label,
        value: if joined.is_empty() {
            NO_PARTICULARS.to_string()
        } else {
            joined
        },
    }
}
