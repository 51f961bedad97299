//! Derivation helpers for frameworks the assessment collects indirectly
//! (birth dates rather than signs, MBTI codes rather than dimensions).

use super::{
    ChineseZodiac, ChineseZodiacAnimal, ChineseZodiacElement, Framework, Mbti, Profile, ZodiacSign,
};

/// Chinese zodiac animal and element for a birth year.
/// 1900 anchors the cycle (metal rat); the element advances every two years.
pub fn chinese_zodiac_for_year(year: i32) -> ChineseZodiac {
    const ELEMENTS: [ChineseZodiacElement; 5] = [
        ChineseZodiacElement::Metal,
        ChineseZodiacElement::Water,
        ChineseZodiacElement::Wood,
        ChineseZodiacElement::Fire,
        ChineseZodiacElement::Earth,
    ];
    let offset = year - 1900;
    let animal = ChineseZodiacAnimal::CYCLE[offset.rem_euclid(12) as usize];
    let element = ELEMENTS[(offset.rem_euclid(10) / 2) as usize];
    ChineseZodiac {
        animal,
        element,
        year,
    }
}

/// Western zodiac sign for a birth month and day.
/// Returns None for an impossible date.
pub fn zodiac_sign_for_date(month: u32, day: u32) -> Option<ZodiacSign> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    // Capricorn wraps the year boundary; everything else is contiguous.
    let sign = match (month, day) {
        (12, 22..) | (1, ..=19) => ZodiacSign::Capricorn,
        (1, _) | (2, ..=18) => ZodiacSign::Aquarius,
        (2, _) | (3, ..=20) => ZodiacSign::Pisces,
        (3, _) | (4, ..=19) => ZodiacSign::Aries,
        (4, _) | (5, ..=20) => ZodiacSign::Taurus,
        (5, _) | (6, ..=20) => ZodiacSign::Gemini,
        (6, _) | (7, ..=22) => ZodiacSign::Cancer,
        (7, _) | (8, ..=22) => ZodiacSign::Leo,
        (8, _) | (9, ..=22) => ZodiacSign::Virgo,
        (9, _) | (10, ..=22) => ZodiacSign::Libra,
        (10, _) | (11, ..=21) => ZodiacSign::Scorpio,
        (11, _) | (12, _) => ZodiacSign::Sagittarius,
        _ => return None,
    };
    Some(sign)
}

/// The four MBTI dimension letters broken out of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MbtiDimensions {
    pub energy_direction: char,
    pub information_gathering: char,
    pub decision_making: char,
    pub lifestyle: char,
}

pub fn mbti_dimensions(mbti: Mbti) -> MbtiDimensions {
    let mut chars = mbti.as_str().chars();
    // Codes are always exactly four letters.
    MbtiDimensions {
        energy_direction: chars.next().unwrap_or('I'),
        information_gathering: chars.next().unwrap_or('S'),
        decision_making: chars.next().unwrap_or('T'),
        lifestyle: chars.next().unwrap_or('J'),
    }
}

/// Recognized frameworks the profile has not populated.
pub fn missing_frameworks(profile: &Profile) -> Vec<Framework> {
    let populated = profile.populated();
    Framework::RECOGNIZED
        .iter()
        .copied()
        .filter(|f| !populated.contains(f))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_zodiac_epoch() {
        let z = chinese_zodiac_for_year(1900);
        assert_eq!(z.animal, ChineseZodiacAnimal::Rat);
        assert_eq!(z.element, ChineseZodiacElement::Metal);
    }

    #[test]
    fn test_chinese_zodiac_cycle() {
        assert_eq!(
            chinese_zodiac_for_year(1996).animal,
            ChineseZodiacAnimal::Rat
        );
        assert_eq!(
            chinese_zodiac_for_year(1996).element,
            ChineseZodiacElement::Fire
        );
        assert_eq!(
            chinese_zodiac_for_year(1988).animal,
            ChineseZodiacAnimal::Dragon
        );
    }

    #[test]
    fn test_zodiac_capricorn_wraps_year() {
        assert_eq!(zodiac_sign_for_date(12, 25), Some(ZodiacSign::Capricorn));
        assert_eq!(zodiac_sign_for_date(1, 10), Some(ZodiacSign::Capricorn));
        assert_eq!(zodiac_sign_for_date(1, 20), Some(ZodiacSign::Aquarius));
    }

    #[test]
    fn test_zodiac_boundaries() {
        assert_eq!(zodiac_sign_for_date(3, 21), Some(ZodiacSign::Aries));
        assert_eq!(zodiac_sign_for_date(4, 19), Some(ZodiacSign::Aries));
        assert_eq!(zodiac_sign_for_date(4, 20), Some(ZodiacSign::Taurus));
        assert_eq!(zodiac_sign_for_date(8, 23), Some(ZodiacSign::Virgo));
        assert_eq!(zodiac_sign_for_date(11, 22), Some(ZodiacSign::Sagittarius));
    }

    #[test]
    fn test_zodiac_invalid_date() {
        assert_eq!(zodiac_sign_for_date(13, 1), None);
        assert_eq!(zodiac_sign_for_date(0, 10), None);
        assert_eq!(zodiac_sign_for_date(5, 32), None);
    }

    #[test]
    fn test_mbti_dimensions() {
        let dims = mbti_dimensions(Mbti::Enfp);
        assert_eq!(dims.energy_direction, 'E');
        assert_eq!(dims.information_gathering, 'N');
        assert_eq!(dims.decision_making, 'F');
        assert_eq!(dims.lifestyle, 'P');
    }

    #[test]
    fn test_missing_frameworks() {
        let mut profile = Profile::default();
        assert_eq!(missing_frameworks(&profile).len(), 7);
        profile.mbti = Some(Mbti::Intj);
        let missing = missing_frameworks(&profile);
        assert_eq!(missing.len(), 6);
        assert!(!missing.contains(&Framework::Mbti));
    }
}
