use crate::models::{ContentRules, ScoreRule, Side, ValidationScore};
use crate::processing::patterns::UID_GROUPED;

/// Soft gate deciding whether a text pair looks like an Aadhaar card.
/// Tolerates individual OCR misses as long as enough signals remain.
pub struct ContentValidator {
    rules: ContentRules,
}

impl ContentValidator {
    pub fn new() -> Self {
        Self::with_rules(ContentRules::aadhaar())
    }

    pub fn with_rules(rules: ContentRules) -> Self {
        ContentValidator { rules }
    }

    pub fn validate(&self, front_text: &str, back_text: &str) -> bool {
        self.score(front_text, back_text).admitted
    }

    pub fn score(&self, front_text: &str, back_text: &str) -> ValidationScore {
        let front = front_text.to_lowercase();
        let back = back_text.to_lowercase();

        let mut score = 0.0_f32;
        let mut fired = Vec::new();

        for weighted in &self.rules.rules {
            let hits = match &weighted.rule {
                ScoreRule::AllKeywords(side, keywords) => {
                    let text = pick(*side, &front, &back);
                    keywords.iter().all(|keyword| text.contains(keyword)) as u32
                }
                ScoreRule::EachKeyword(side, keywords) => {
                    let text = pick(*side, &front, &back);
                    keywords.iter().filter(|keyword| text.contains(*keyword)).count() as u32
                }
                ScoreRule::GroupedNumber(side) => UID_GROUPED.is_match(pick(*side, &front, &back)) as u32,
            };

            if hits > 0 {
                score += hits as f32 * weighted.weight;
                fired.push(weighted.name);
            }
        }

        ValidationScore {
            score,
            admitted: score >= self.rules.threshold,
            fired,
        }
    }
}

impl Default for ContentValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick<'a>(side: Side, front: &'a str, back: &'a str) -> &'a str {
    match side {
        Side::Front => front,
        Side::Back => back,
    }
}
