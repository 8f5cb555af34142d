// "Smart tagging": plain substring checks over a lowercased bio.

pub const MEDICAL_PRO: &str = "Medical Pro";
pub const HAS_VEHICLE: &str = "Has Vehicle";
pub const MULTILINGUAL: &str = "Multilingual";
pub const FOOD_PREP: &str = "Food Prep";
pub const TELEHEALTH: &str = "Telehealth";

#[derive(Clone, Debug)]
struct Rule {
    triggers: &'static [&'static str],
    tag: &'static str,
}

// Order here is the order tags are reported in.
const RULES: &[Rule] = &[
    Rule { triggers: &["nurse", "practitioner", "meds"], tag: MEDICAL_PRO },
    Rule { triggers: &["truck", "car"], tag: HAS_VEHICLE },
    Rule { triggers: &["spanish", "mandarin"], tag: MULTILINGUAL },
    Rule { triggers: &["cook", "food"], tag: FOOD_PREP },
    Rule { triggers: &["telehealth"], tag: TELEHEALTH },
];

/// Every tag the tagger can emit, in report order.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|r| r.tag)
}

pub fn tag_bio(bio: &str) -> Vec<&'static str> {
    let text = bio.to_lowercase();
    RULES
        .iter()
        .filter(|r| r.triggers.iter().any(|t| text.contains(t)))
        .map(|r| r.tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nurse_is_always_medical() {
        for bio in ["nurse", "Retired NURSE, no car", "school nurse who speaks Spanish"] {
            assert!(tag_bio(bio).contains(&MEDICAL_PRO), "{bio}");
        }
    }

    #[test]
    fn unrelated_bio_gets_no_tags() {
        assert!(tag_bio("I like hiking and reading on weekends.").is_empty());
        assert!(tag_bio("").is_empty());
    }

    #[test]
    fn rules_are_independent_and_ordered() {
        let tags = tag_bio(
            "I'm a registered nurse with 5 years of experience in ER. I have a 4x4 truck and can help with deliveries in rough weather. Fluent in Spanish.",
        );
        assert_eq!(tags, vec![MEDICAL_PRO, HAS_VEHICLE, MULTILINGUAL]);

        let tags = tag_bio(
            "General Practitioner available for telehealth consults on evenings. Can also prescribe basic meds. Speak Mandarin and English.",
        );
        assert_eq!(tags, vec![MEDICAL_PRO, MULTILINGUAL, TELEHEALTH]);
    }

    #[test]
    fn triggers_are_raw_substrings() {
        // "care" contains "car"
        assert_eq!(tag_bio("Happy to provide childcare"), vec![HAS_VEHICLE]);
    }

    #[test]
    fn tagging_is_idempotent() {
        let bio = " retired teacher, I can cook large meals. No car though.";
        assert_eq!(tag_bio(bio), tag_bio(bio));
    }

    #[test]
    fn output_stays_inside_vocabulary() {
        let vocab: Vec<_> = vocabulary().collect();
        let tags = tag_bio("nurse truck spanish cook telehealth meds car food");
        assert_eq!(tags, vocab);
    }
}
