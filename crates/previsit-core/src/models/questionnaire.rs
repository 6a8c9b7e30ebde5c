use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A single scalar answer from the questionnaire.
///
/// Front-end widgets send free text, slider values, or toggles depending on
/// the question, so all three shapes are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl Answer {
    /// Render the answer for the narrative. Blank text counts as unanswered.
    pub fn rendered(&self) -> Option<String> {
        match self {
            Answer::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Answer::Number(value) => Some(value.to_string()),
            Answer::Flag(value) => Some(value.to_string()),
        }
    }
}

/// Last menstrual period: a calendar date when the patient knows it,
/// otherwise whatever they wrote ("모름", "two weeks ago").
#[derive(Debug, Clone, PartialEq)]
pub enum LastMenstrualPeriod {
    Date(jiff::civil::Date),
    Text(String),
}

impl LastMenstrualPeriod {
    /// Only a bare `YYYY-MM-DD` becomes a date. Anything longer, such as a
    /// datetime, is kept verbatim so no part of the answer is dropped.
    pub fn from_text(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.len() == 10 {
            if let Ok(date) = trimmed.parse::<jiff::civil::Date>() {
                return LastMenstrualPeriod::Date(date);
            }
        }
        LastMenstrualPeriod::Text(raw)
    }
}

impl<'de> Deserialize<'de> for LastMenstrualPeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_text)
    }
}

/// Fields shared by every questionnaire category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CommonFields {
    #[serde(rename = "common_lmp")]
    pub lmp: Option<LastMenstrualPeriod>,
    #[serde(rename = "common_gpa")]
    pub obstetric_history: Option<Answer>,
    #[serde(rename = "common_history")]
    pub past_medical_history: Option<Answer>,
    #[serde(rename = "common_goals")]
    pub goals: Option<Answer>,
}

/// Pregnancy confirmation and antenatal care.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PregnancyForm {
    pub preg_test_result: Option<Answer>,
    pub preg_weeks: Option<Answer>,
    pub preg_symptoms: Option<Vec<String>>,
    pub preg_history_detail: Option<Answer>,
    pub preg_meds: Option<Answer>,
}

/// Fertility work-up and conception planning.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreparationForm {
    pub prep_duration: Option<Answer>,
    pub prep_cycle_detail: Option<Answer>,
    pub prep_method: Option<Vec<String>>,
    pub prep_history: Option<Vec<String>>,
    pub prep_partner: Option<Answer>,
}

/// Menstrual disorders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PeriodForm {
    pub period_symptom: Option<Vec<String>>,
    /// NRS pain score, 0–10.
    pub period_pain_score: Option<Answer>,
    pub period_amount: Option<Answer>,
    pub period_change: Option<Answer>,
    pub period_family: Option<Answer>,
}

/// Vaginitis and pelvic pain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProblemForm {
    pub prob_discharge_color: Option<Vec<String>>,
    pub prob_sensation: Option<Vec<String>>,
    pub prob_duration: Option<Answer>,
    pub prob_recurrence: Option<Answer>,
    pub prob_partner: Option<Answer>,
}

/// Contraception counselling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContraceptionForm {
    pub contra_current: Option<Answer>,
    pub contra_wish: Option<Vec<String>>,
    pub contra_smoking: Option<Answer>,
    pub contra_risk: Option<Answer>,
    pub contra_plan: Option<Answer>,
}

/// The category discriminant, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Pregnancy,
    Preparation,
    Period,
    Problem,
    Contraception,
    Unspecified,
}

impl CategoryKind {
    /// Map the wire discriminant. Anything unrecognized is `Unspecified`.
    pub fn from_discriminant(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("pregnancy") => CategoryKind::Pregnancy,
            Some("preparation") => CategoryKind::Preparation,
            Some("period") => CategoryKind::Period,
            Some("problem") => CategoryKind::Problem,
            Some("contraception") => CategoryKind::Contraception,
            _ => CategoryKind::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Pregnancy => "pregnancy",
            CategoryKind::Preparation => "preparation",
            CategoryKind::Period => "period",
            CategoryKind::Problem => "problem",
            CategoryKind::Contraception => "contraception",
            CategoryKind::Unspecified => "unspecified",
        }
    }

    /// Chief-complaint category label written into the narrative.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Pregnancy => "임신 확인 및 산전 관리 (Obstetrics)",
            CategoryKind::Preparation => "난임 및 임신 준비 (Infertility)",
            CategoryKind::Period => "월경 이상 (Menstrual Disorders)",
            CategoryKind::Problem => "질염/골반통 (Gynecology)",
            CategoryKind::Contraception => "피임 상담 (Contraception)",
            CategoryKind::Unspecified => "일반 진료",
        }
    }
}

/// Category-specific answers.
#[derive(Debug, Clone, PartialEq)]
pub enum Category {
    Pregnancy(PregnancyForm),
    Preparation(PreparationForm),
    Period(PeriodForm),
    Problem(ProblemForm),
    Contraception(ContraceptionForm),
    /// Missing or unrecognized discriminant; keeps the raw value for logs.
    Unspecified(Option<String>),
}

impl Category {
    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Pregnancy(_) => CategoryKind::Pregnancy,
            Category::Preparation(_) => CategoryKind::Preparation,
            Category::Period(_) => CategoryKind::Period,
            Category::Problem(_) => CategoryKind::Problem,
            Category::Contraception(_) => CategoryKind::Contraception,
            Category::Unspecified(_) => CategoryKind::Unspecified,
        }
    }
}

/// One submitted pre-visit questionnaire.
///
/// On the wire this is a flat object: a `category` value next to the
/// answers and the `common_*` fields. Only the selected category's form and
/// the common fields are read; answers left over from other categories are
/// ignored whatever their shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct QuestionnaireRecord {
    pub category: Category,
    pub common: CommonFields,
}

impl QuestionnaireRecord {
    pub fn new(category: Category, common: CommonFields) -> Self {
        Self { category, common }
    }
}

impl TryFrom<Map<String, Value>> for QuestionnaireRecord {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let discriminant = fields.get("category").cloned();
        let fields = Value::Object(fields);

        let category = match CategoryKind::from_discriminant(
            discriminant.as_ref().and_then(Value::as_str),
        ) {
            CategoryKind::Pregnancy => Category::Pregnancy(PregnancyForm::deserialize(&fields)?),
            CategoryKind::Preparation => {
                Category::Preparation(PreparationForm::deserialize(&fields)?)
            }
            CategoryKind::Period => Category::Period(PeriodForm::deserialize(&fields)?),
            CategoryKind::Problem => Category::Problem(ProblemForm::deserialize(&fields)?),
            CategoryKind::Contraception => {
                Category::Contraception(ContraceptionForm::deserialize(&fields)?)
            }
            CategoryKind::Unspecified => Category::Unspecified(match discriminant {
                None | Some(Value::Null) => None,
                Some(Value::String(raw)) => Some(raw),
                Some(other) => Some(other.to_string()),
            }),
        };

        Ok(Self {
            category,
            common: CommonFields::deserialize(&fields)?,
        })
    }
}
