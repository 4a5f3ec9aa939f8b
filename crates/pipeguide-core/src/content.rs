//! Static page copy.
//!
//! Everything here is fixed legal and procedural text; the components only
//! decide how to lay it out.

pub const CONTACT_HEADING: &str = "굴착공사 신고 방법";

pub const PENALTY_NOTICE: &str = "미신고 굴착공사 시 도시가스 사업법에 따라 2년 이하의 징역 또는 2천만원 이하의 벌금이 부과될 수 있습니다.";

pub const COPYRIGHT: &str = "Copyright (c) 2024 JB.co.,LTD.  All right Reserved.";

pub const FONT_TOGGLE_LABEL: &str = "글자 크기 변경";

/// The four accordion sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Procedure,
    DamagePrevention,
    PipeMarkers,
    Homepage,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Procedure,
        SectionId::DamagePrevention,
        SectionId::PipeMarkers,
        SectionId::Homepage,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::Procedure => "굴착공사 신청 및 이용절차",
            SectionId::DamagePrevention => "도시가스배관 손상방지기준",
            SectionId::PipeMarkers => "도시가스 배관 식별법",
            SectionId::Homepage => "JB 홈페이지",
        }
    }

    /// DOM id prefix for the section's summary/details pair.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Procedure => "procedure",
            SectionId::DamagePrevention => "damage-prevention",
            SectionId::PipeMarkers => "pipe-markers",
            SectionId::Homepage => "homepage",
        }
    }

    /// Whether the section carries the font-size toggle.
    pub fn has_font_toggle(self) -> bool {
        matches!(self, SectionId::DamagePrevention | SectionId::PipeMarkers)
    }
}

// ─────────────────────────────────────────────────────────────────
// Contact box
// ─────────────────────────────────────────────────────────────────

pub enum ContactValue {
    /// A `tel:`/`http:` anchor plus an optional grey note after it.
    Link {
        href: &'static str,
        text: &'static str,
        note: Option<&'static str>,
    },
    /// The store buttons.
    AppStores,
}

pub struct ContactRow {
    pub label: &'static str,
    pub value: ContactValue,
}

pub fn contact_rows() -> Vec<ContactRow> {
    vec![
        ContactRow {
            label: "전화 :",
            value: ContactValue::Link {
                href: "tel:1644-0041",
                text: "1644 - 0041",
                note: Some("* 전국동일, 연중무휴"),
            },
        },
        ContactRow {
            label: "App :",
            value: ContactValue::AppStores,
        },
        ContactRow {
            label: "인터넷 :",
            value: ContactValue::Link {
                href: "http://m.eocs.or.kr",
                text: "www.eocs.or.kr",
                note: None,
            },
        },
        ContactRow {
            label: "상황실 :",
            value: ContactValue::Link {
                href: "tel:041-530-1900",
                text: "041-530-1900",
                note: Some("* JB 상황실"),
            },
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Damage-prevention rules
// ─────────────────────────────────────────────────────────────────

pub struct RuleGroup {
    pub heading: &'static str,
    pub rules: &'static [&'static str],
}

pub fn rule_groups() -> Vec<RuleGroup> {
    vec![
        RuleGroup {
            heading: "파일박기 및 빼기 작업",
            rules: &[
                "공사착공 전에 도시가스사업자와 현장 협의를 통하여 공사 장소, 공사시간 및 안전조치에 관하여 서로 확인할 것.",
                "도시가스배관과 수평거리 2m 이내에 파일박기를 하는 경우에는 도시가스 사업자의 입회아래 시험굴착으로 가스배관의 위치를 정확히 확인할 것.",
                "도시가스배관의 위치를 파악한 경우에는 가스배관의 위치를 알리는 표지판을 설치할 것.",
                "도시가스배관과 수평거리 30cm 이내에서는 파일박기를 하지 말것.",
                "항타기는 도시가스 배관과 수평거리 2m 이상 되는 곳에 설치할 것. 다만, 부득이 하여 수평거리 2m 이내에 설치할 때에는 하중진동을 완화할 수 있는 조치를 할 것.",
                "파일을 뺀 자리는 충분히 매울 것.",
            ],
        },
        RuleGroup {
            heading: "그라우팅ㆍ보링작업",
            rules: &[
                "제1호 가목부터 다목까지를 준용할 것. 이 경우 파일박기는 그라우팅ㆍ보링 작업으로 본다.",
                "시험굴착을 통하여 도시가스배관의 위치를 확인한 후 보링비트가 가스배관에 접촉 할 가능성이 있는 경우에는 가이드 파이프를 사용하여 직접 접촉되지 아니하도록 할 것.",
            ],
        },
        RuleGroup {
            heading: "터파기ㆍ되메우기 및 포장작업",
            rules: &[
                "제1호 가목부터 다목까지를 준용할 것. 이 경우 파일박기는 터파기로 본다.",
                "도시가스배관 주위를 굴착하는 경우 가스배관의 좌우 1m이내 부분은 인력으로 굴착 할 것.",
                "도시가스배관에 근접하여 굴착하는 경우로서 주위에 도시가스배관의 부속시설물(밸브, 수취기, 전기 방식용 리드선 및 터미널 등)이 있을 대에는 작업으로 인한 이탈 그 밖에 손상방지에 주의할 것.",
                "도시가스배관이 노출될 경우 배관의 코팅부가 손상되지 아니하도록 하고, 코팅부가 손상될 때에는 도시가스사업자에게 통보하여 보수를 한 후 작업을 진행할 것.",
                "도시가스배관 주위에서 발파작업을 하는 경우에는 도시가스사업자의 입회아래 충분한 대책을 강구한 후 실시할 것.",
                "도시가스배관 주위에서 다른 매설물을 설치할 때에는 30cm이상 이격할 것.",
                "도시가스배관 주위를 되메우기 하거나 포장할 경우 배관 주위의 모래 채우기, 보호판, 보호포 및 라인마크 설치 및 도시가스배관 부속시설물의 설치 등은 굴착 전과 같은 상태가 되도록 할 것.",
                "되메우기를 할 때에는 나중에 도시가스배관의 지반이 침하되지 않도록 필요한 조치를 할 것.",
            ],
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Pipeline markers
// ─────────────────────────────────────────────────────────────────

pub struct PipeMarker {
    pub name: &'static str,
    pub desc: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

pub fn pipe_markers() -> Vec<PipeMarker> {
    vec![
        PipeMarker {
            name: "라인마크",
            desc: "도시가스 배관의 매설방향 및 매설위치를 표시합니다",
            image: "/lm.png",
            alt: "linemark",
        },
        PipeMarker {
            name: "밸브박스",
            desc: "도시가스 배관의 긴급 시 또는 필요 시 가스를 차단하는 설비 입니다.",
            image: "/vvbox.png",
            alt: "valvebox",
        },
        PipeMarker {
            name: "테스트박스(T/B)",
            desc: "도시가스 배관의 매설방향 및 매설위치를 표시합니다.",
            image: "/tbbox.png",
            alt: "testbox",
        },
        PipeMarker {
            name: "보호포",
            desc: "지하의 매몰된 도시가스 배관의 위치를 알리는 표시로써 배관 직상부에 설치합니다.",
            image: "/sheet.png",
            alt: "sheet",
        },
        PipeMarker {
            name: "기타",
            desc: "외곽지역에 라인마크 대신 설치 된 표지판입니다.",
            image: "/etc.png",
            alt: "etc",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let titles: Vec<_> = SectionId::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(
            titles,
            [
                "굴착공사 신청 및 이용절차",
                "도시가스배관 손상방지기준",
                "도시가스 배관 식별법",
                "JB 홈페이지",
            ]
        );
    }

    #[test]
    fn test_font_toggle_in_two_sections() {
        let with_toggle: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|s| s.has_font_toggle())
            .collect();
        assert_eq!(
            with_toggle,
            [SectionId::DamagePrevention, SectionId::PipeMarkers]
        );
    }

    #[test]
    fn test_rule_groups() {
        let groups = rule_groups();
        let counts: Vec<_> = groups.iter().map(|g| g.rules.len()).collect();
        assert_eq!(counts, [6, 2, 8]);
        assert!(groups
            .iter()
            .flat_map(|g| g.rules.iter())
            .all(|r| !r.trim().is_empty()));
    }

    #[test]
    fn test_markers_have_images() {
        let markers = pipe_markers();
        assert_eq!(markers.len(), 5);
        for m in &markers {
            assert!(m.image.starts_with('/') && m.image.ends_with(".png"), "{}", m.name);
            assert!(!m.alt.is_empty());
        }
    }

    #[test]
    fn test_contact_rows() {
        let rows = contact_rows();
        assert_eq!(rows.len(), 4);
        assert!(matches!(rows[1].value, ContactValue::AppStores));
        match &rows[0].value {
            ContactValue::Link { href, .. } => assert_eq!(*href, "tel:1644-0041"),
            ContactValue::AppStores => panic!("first row should be the phone number"),
        }
    }

    #[test]
    fn test_unique_anchors() {
        let mut anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), 4);
    }
}
