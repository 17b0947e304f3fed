//! 誤字・同義語の対応表

use super::rules::RewriteRule;

/// 語単位の誤字訂正（誤 → 正）
pub const TYPO_CORRECTIONS: &[(&str, &str)] = &[
    ("Manader", "Manager"),
    ("Unformed", "Uniformed"),
    ("Dispatche", "Dispatcher"),
    ("Weeknd", "Weekend"),
    ("Minumum", "Minimum"),
    ("DIem", "Diem"),
];

/// 同じ役職の別表記の統合
///
/// 単位を取り出した後の基本名に適用する。
pub const SYNONYMS: &[(&str, &str, &str)] = &[
    ("plural-greeters", r"\bGreeters\b", "Greeter"),
    ("plural-vehicle-handlers", r"\bVehicle Handlers\b", "Vehicle Handler"),
    ("plural-professional-drivers", r"\bProfessional Drivers\b", "Professional Driver"),
    ("plural-track-drivers", r"\bProfessional Track Drivers\b", "Professional Track Driver"),
    ("plural-concierge-managers", r"\bConcierge Managers\b", "Concierge Manager"),
    ("numbered-concierge-manager", r"Concierge Manager\s+\d+\b", "Concierge Manager"),
    ("vehicle-handler-labor", r"Vehicle Handler\s+Labor\b", "Vehicle Handler"),
    ("vehicle-handler-request", r"Vehicle Handler\s+Request\b", "Vehicle Handler"),
    ("vehicle-event-order", r"Vehicle/Event", "Event/Vehicle"),
    ("event-manager-staff", r"Event Manager\s*/\s*Staff\b", "Event Manager"),
    ("vehicle-handling-wait", r"Vehicle Handling Labor & Wait Time", "Vehicle Handler"),
    ("chauffeur-dispatcher", r"Professional Chauffeur/Dispatcher\b", "Professional Chauffeur"),
    ("per-diem-dash", r"^Per Diem\s*-.*$", "Per Diem"),
    ("per-diem-chauffeur", r"^Per Diem\s+Professional Chauffeur$", "Per Diem"),
    ("vehicle-logistics", r"^Vehicle Logistics$", "Vehicle Logistics Staff"),
    ("event-logistics", r"^Event/Logistics$", "Event/Logistics Staff"),
    ("vehicle-staff", r"^Vehicle Staff\b", "Vehicle Labor"),
    ("trailing-dispatcher", r"\s*-\s*Dispatcher\s*$", ""),
];

lazy_static::lazy_static! {
    pub static ref TYPO_RULES: Vec<RewriteRule> = TYPO_CORRECTIONS
        .iter()
        .map(|(wrong, right)| {
            RewriteRule::compile(*wrong, &format!(r"\b{}\b", regex::escape(wrong)), *right)
        })
        .collect();

    pub static ref SYNONYM_RULES: Vec<RewriteRule> = SYNONYMS
        .iter()
        .map(|(name, pattern, replacement)| RewriteRule::compile(*name, *pattern, *replacement))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::rules::apply_rules;

    #[test]
    fn test_typos_are_whole_words() {
        assert_eq!(apply_rules(&TYPO_RULES, "Vehicle Manader"), "Vehicle Manager");
        assert_eq!(apply_rules(&TYPO_RULES, "Unformed Officer"), "Uniformed Officer");
        assert_eq!(apply_rules(&TYPO_RULES, "Per DIem"), "Per Diem");
        // 正しい語の一部には反応しない
        assert_eq!(apply_rules(&TYPO_RULES, "Dispatcher"), "Dispatcher");
    }

    #[test]
    fn test_synonyms() {
        let cases = [
            ("Greeters", "Greeter"),
            ("Lead Vehicle Handlers", "Lead Vehicle Handler"),
            ("Concierge Manager 2", "Concierge Manager"),
            ("Vehicle Handler Labor", "Vehicle Handler"),
            ("Vehicle/Event Staff", "Event/Vehicle Staff"),
            ("Event Manager / Staff", "Event Manager"),
            ("Vehicle Handling Labor & Wait Time", "Vehicle Handler"),
            ("Professional Chauffeur/Dispatcher", "Professional Chauffeur"),
            ("Per Diem - Chauffeur", "Per Diem"),
            ("Per Diem Professional Chauffeur", "Per Diem"),
            ("Vehicle Logistics", "Vehicle Logistics Staff"),
            ("Vehicle Logistics Staff", "Vehicle Logistics Staff"),
            ("Event/Logistics", "Event/Logistics Staff"),
            ("Vehicle Staff", "Vehicle Labor"),
            ("Professional Chauffeur - Dispatcher", "Professional Chauffeur"),
        ];
        for (input, expected) in cases {
            assert_eq!(apply_rules(&SYNONYM_RULES, input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_synonym_results_are_stable() {
        for (_, _, replacement) in SYNONYMS {
            if replacement.is_empty() {
                continue;
            }
            let once = apply_rules(&SYNONYM_RULES, replacement);
            assert_eq!(apply_rules(&SYNONYM_RULES, &once), once);
        }
    }
}
