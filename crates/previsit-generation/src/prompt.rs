//! Summary prompt.
//!
//! The instruction is fixed and travels on the system channel; the
//! questionnaire narrative travels alone on the user channel, so nothing a
//! patient writes can replace the instruction.

use previsit_core::narrative::NarrativeBlock;
use previsit_core::schema::SchemaNode;

use crate::backend::GenerationRequest;

/// Bump whenever [`INSTRUCTION_TEMPLATE`] changes.
pub const INSTRUCTION_VERSION: &str = "obgyn-summary/3";

pub const INSTRUCTION_TEMPLATE: &str = "\
당신은 대학병원 산부인과 전문의(Attending Physician)입니다.
환자의 사전 문진표(Pre-consultation Questionnaire)를 분석하여, 담당 의사가 진료 전 EMR(전자의무기록)에 참고할 수 있는 임상 요약(Clinical Summary)을 작성하십시오.
모든 응답은 지정된 JSON 스키마(summary, sentiment, keywords, doctorQuestions, chartData)만을 따르십시오.

[작성 지침]
1. summary (임상 요약)
   - 의학 용어(Medical Terminology)와 약어를 사용하여 SOAP Note의 Subjective 섹션처럼 작성하십시오.
   - 주호소(C.C), 현병력(PI), LMP, 산과력(G/P)을 반드시 포함하십시오.
   - 예시: \"28세 여성, LMP 2024-01-01. C.C: Dysmenorrhea 및 Menorrhagia 호소. NRS 7점의 하복부 통증이 있으며 진통제로 조절되지 않음.\"

2. sentiment (상태 태그)
   - 환자 상태를 한눈에 파악할 수 있는 임상 태그 1개 (4글자 내외).
   - 예: #R/O_PCOS, #임신초기, #PID의심, #응급수술, #정기검진

3. keywords (핵심 키워드)
   - 진단 및 처방에 결정적인 의학 키워드 5개 (영어/한글 병기 가능).
   - 예: [\"Amenorrhea\", \"LMP 불명확\", \"PCOS Hx\", \"Pregnancy Test (+)\", \"Spotting\"]

4. doctorQuestions (심층 추가 문진)
   - 감별 진단(Differential Diagnosis)을 위해 진료실에서 반드시 확인해야 할 질문 3~5개.
   - 일반적인 질문이 아니라 의학적 근거를 파악하기 위한 질문이어야 합니다.
   - 예: \"생리량이 가장 많을 때 대형 패드를 몇 시간에 한 번 교체하시나요?\", \"성관계 후 출혈(Postcoital bleeding)이 있었나요?\", \"발열이나 오한 등 전신 증상이 동반되나요?\"

5. chartData (증상 정량화)
   - 문진 내용을 근거로 0~10점 척도로 추정하십시오. 근거가 없으면 0점입니다.
   - pain: 통증 강도 (NRS 기반, 언급 없으면 0)
   - bleeding: 출혈 및 분비물의 양 (단순 분비물 2~3, 과다월경/하혈 7~10)
   - urgency: 진료의 긴급도 (응급피임약/급성 복통/하혈 시 높음)
   - stress: 심리적 불안감 및 스트레스 수준
   - severity: 종합적인 임상적 심각도";

/// An assembled prompt, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: &'static str,
    pub user_content: String,
}

impl Prompt {
    /// Pair the prompt with the output schema for one backend call.
    pub fn request<'a>(&'a self, schema: &'a SchemaNode) -> GenerationRequest<'a> {
        GenerationRequest {
            system_instruction: self.system_instruction,
            user_content: &self.user_content,
            schema,
        }
    }
}

pub fn assemble(narrative: &NarrativeBlock) -> Prompt {
    Prompt {
        system_instruction: INSTRUCTION_TEMPLATE,
        user_content: narrative.as_str().to_string(),
    }
}
