//! Seed passages used by the scripted backend.
//!
//! A small built-in bank per topic so the app stays usable with no server
//! configured. Quiz mode serves the five choices; summary mode serves the
//! passage alone.

use crate::domain::Topic;

pub struct SeedPassage {
  pub topic: Topic,
  pub title: &'static str,
  pub passage: &'static str,
  pub choices: [&'static str; 5],
}

pub fn seed_passages() -> &'static [SeedPassage] {
  SEEDS
}

/// Absolute last resort if no seed matches the requested topic.
pub fn hard_fallback_passage() -> &'static SeedPassage {
  &SEEDS[0]
}

const SEEDS: &[SeedPassage] = &[
  SeedPassage {
    topic: Topic::Science,
    title: "The Impact of AI on Education",
    passage: "Artificial intelligence (AI) is rapidly transforming various sectors, and education is \
no exception. AI-powered tools are being integrated into classrooms to personalize learning \
experiences, automate administrative tasks, and provide data-driven insights. One of the primary \
benefits is the ability to offer personalized learning pathways, adjusting the pace and content of \
instruction to each student. However, the integration of AI in education also presents significant \
challenges: bias in algorithms could amplify existing inequalities, and the ethical use of student \
data demands strong privacy safeguards. The human element in education cannot be replaced by \
technology; the role of the teacher as a mentor and facilitator remains crucial.",
    choices: [
      "AI를 교육에 적용하면 어떤 위험이 발생할 수 있는지에 대해 중점적으로 다루는 글이다.",
      "AI는 교육을 완전히 변화시켜서 교사의 역할은 중요하지 않다고 주장하는 글이다.",
      "AI가 교육에 가져올 긍정적인 효과와 부정적인 측면을 모두 균형 있게 다루는 글이다.",
      "AI를 교육에 도입할 때 필요한 기술적 준비에 대해 자세히 설명하는 글이다.",
      "AI가 교육에 가져올 긍정적인 효과만을 강조하며 도입을 촉구하는 글이다.",
    ],
  },
  SeedPassage {
    topic: Topic::Science,
    title: "책임 있는 인공지능",
    passage: "인공지능의 급속한 발전은 의료에서 금융에 이르기까지 수많은 분야를 혁신해 왔다. \
기계 학습 알고리즘에 기반한 인공지능 시스템은 방대한 데이터를 분석하여 놀라운 정확도로 패턴을 \
식별하고 예측한다. 그러나 인공지능에 대한 의존이 커질수록 데이터 프라이버시와 알고리즘 편향에 \
관한 윤리적 우려도 함께 커진다. 인공지능이 계속 진화함에 따라, 책임 있고 공정한 활용을 보장하기 \
위한 명확한 지침과 규제를 마련하는 일이 중요해지고 있다.",
    choices: [
      "인공지능 기술의 역사적 발전 과정을 시대순으로 정리한 글이다.",
      "인공지능의 활용 성과와 함께 책임 있는 활용을 위한 과제를 제시하는 글이다.",
      "인공지능이 특정 산업에서 실패한 사례를 비판적으로 분석한 글이다.",
      "인공지능 규제가 기술 발전을 가로막는다고 주장하는 글이다.",
      "데이터 프라이버시 보호 기술의 종류를 소개하는 글이다.",
    ],
  },
  SeedPassage {
    topic: Topic::Humanities,
    title: "고전을 읽는 이유",
    passage: "고전은 시대를 건너 살아남은 질문의 기록이다. 고전을 읽는 일은 과거의 답을 외우는 \
것이 아니라, 오늘의 문제를 더 깊은 맥락에서 다시 묻는 훈련이다. 우리는 고전 속 인물들의 선택을 \
따라가며 자신의 판단 기준을 점검하게 되고, 낯선 세계관과 부딪히며 사고의 폭을 넓힌다. 그래서 \
고전 읽기는 지식의 축적이 아니라 관점의 확장에 가깝다.",
    choices: [
      "고전 읽기가 오늘의 문제를 깊이 있게 다시 묻는 훈련임을 설명하는 글이다.",
      "고전의 내용을 암기하는 것이 교양의 핵심이라고 주장하는 글이다.",
      "고전보다 현대 문학이 더 가치 있다고 비교하는 글이다.",
      "고전 읽기 교육 과정의 문제점을 비판하는 글이다.",
      "특정 고전 작품 하나의 줄거리를 요약한 글이다.",
    ],
  },
  SeedPassage {
    topic: Topic::Society,
    title: "도시와 공동체",
    passage: "도시는 익명성의 공간이지만, 역설적으로 새로운 공동체가 실험되는 무대이기도 하다. \
골목 도서관, 공유 부엌, 주민 협동조합처럼 작은 연결의 시도들이 도시 곳곳에서 자라난다. 이러한 \
시도는 행정이 채우지 못하는 돌봄의 공백을 메우는 동시에, 거주자를 소비자가 아닌 시민으로 다시 \
세운다. 도시의 미래는 건물의 높이가 아니라 연결의 밀도에 달려 있다.",
    choices: [
      "도시 재개발의 경제적 효과를 분석하는 글이다.",
      "도시에서 시도되는 작은 공동체 실험의 의미를 조명하는 글이다.",
      "도시의 익명성이 범죄를 늘린다고 경고하는 글이다.",
      "행정 주도의 복지 정책 확대를 촉구하는 글이다.",
      "농촌 공동체와 도시 공동체를 비교하는 글이다.",
    ],
  },
  SeedPassage {
    topic: Topic::ArtsCulture,
    title: "미술관의 문턱",
    passage: "미술관은 오랫동안 높은 문턱의 상징이었다. 그러나 최근의 미술관은 전시를 넘어 교육, \
놀이, 휴식이 뒤섞이는 일상적 공간으로 변모하고 있다. 관람객은 더 이상 조용히 감상만 하는 존재가 \
아니라, 작품에 말을 걸고 해석을 보태는 참여자가 된다. 예술의 권위가 낮아진 것이 아니라, 예술과 \
일상의 거리가 좁혀진 것이다.",
    choices: [
      "미술관 운영의 재정 문제를 다루는 글이다.",
      "전통적 감상 방식의 우월함을 강조하는 글이다.",
      "미술관이 참여적 일상 공간으로 변화하고 있음을 설명하는 글이다.",
      "유명 화가의 생애를 소개하는 글이다.",
      "미술 교육 과정의 개편을 요구하는 글이다.",
    ],
  },
  SeedPassage {
    topic: Topic::CurrentAffairs,
    title: "짧은 뉴스와 깊은 이해",
    passage: "뉴스가 짧아질수록 세계는 더 단순해 보인다. 몇 줄의 요약과 자극적인 제목은 사건의 \
맥락을 지우고, 입장의 차이를 선악의 대립으로 바꾼다. 정보의 양은 늘었지만 이해의 깊이는 얕아지는 \
역설 속에서, 긴 글을 읽어내는 능력은 시민의 기본기가 된다. 깊이 읽는 사람만이 빠른 뉴스에 \
휘둘리지 않는다.",
    choices: [
      "뉴스 산업의 수익 구조 변화를 분석하는 글이다.",
      "짧은 뉴스 소비의 한계를 지적하며 깊이 읽기의 중요성을 강조하는 글이다.",
      "소셜 미디어 규제의 필요성을 주장하는 글이다.",
      "속보 경쟁이 언론 신뢰도에 미치는 영향을 측정한 글이다.",
      "짧은 뉴스가 정보 접근성을 높인다고 옹호하는 글이다.",
    ],
  },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_topic_has_a_seed() {
    for topic in Topic::ALL {
      assert!(
        seed_passages().iter().any(|s| s.topic == topic),
        "no seed for {:?}",
        topic
      );
    }
  }

  #[test]
  fn seeds_carry_five_choices_and_text() {
    for seed in seed_passages() {
      assert!(!seed.passage.is_empty());
      assert!(seed.choices.iter().all(|c| !c.is_empty()));
    }
  }
}
