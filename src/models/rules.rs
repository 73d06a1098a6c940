/// Minimum score for a text pair to be admitted as an Aadhaar card.
pub const ADMIT_THRESHOLD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScoreRule {
    /// Fires once when every keyword is present
    AllKeywords(Side, &'static [&'static str]),
    /// Fires once per keyword present
    EachKeyword(Side, &'static [&'static str]),
    /// Fires when a 4-4-4 digit group is present
    GroupedNumber(Side),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedRule {
    pub name: &'static str,
    pub rule: ScoreRule,
    pub weight: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentRules {
    pub rules: Vec<WeightedRule>,
    pub threshold: f32,
}

impl ContentRules {
    pub fn aadhaar() -> Self {
        let rules = vec![
            WeightedRule {
                name: "front_required_keywords",
                rule: ScoreRule::AllKeywords(Side::Front, &["aadhaar", "uidai"]),
                weight: 2.0,
            },
            WeightedRule {
                name: "front_optional_keyword",
                rule: ScoreRule::EachKeyword(
                    Side::Front,
                    &["dob", "gender", "male", "female", "government of india"],
                ),
                weight: 0.5,
            },
            WeightedRule {
                name: "front_uid_pattern",
                rule: ScoreRule::GroupedNumber(Side::Front),
                weight: 2.0,
            },
            WeightedRule {
                name: "back_uid_pattern",
                rule: ScoreRule::GroupedNumber(Side::Back),
                weight: 2.0,
            },
            WeightedRule {
                name: "back_authority_phrase",
                rule: ScoreRule::AllKeywords(
                    Side::Back,
                    &["unique identification authority of india"],
                ),
                weight: 1.0,
            },
        ];

        ContentRules {
            rules,
            threshold: ADMIT_THRESHOLD,
        }
    }
}

impl Default for ContentRules {
    fn default() -> Self {
        Self::aadhaar()
    }
}
