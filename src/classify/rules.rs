//! Ordered `(pattern, tag)` rule tables, one per attribute category.

use std::sync::LazyLock;

use postforge_common::{Audio, PrintType, Quality};
use regex::Regex;

/// A single classification rule: when `pattern` matches, the category is `tag`.
pub struct Rule<T> {
    pub tag: T,
    pub pattern: Regex,
}

impl<T: Copy> Rule<T> {
    fn new(tag: T, pattern: &str) -> Self {
        Self {
            tag,
            pattern: Regex::new(&format!("(?i){pattern}")).expect("rule pattern is valid"),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

static QUALITY_RULES: LazyLock<Vec<Rule<Quality>>> = LazyLock::new(|| {
    vec![
        Rule::new(Quality::P2160, r"2160p"),
        Rule::new(Quality::P1080, r"1080p"),
        Rule::new(Quality::P720, r"720p"),
    ]
});

static PRINT_RULES: LazyLock<Vec<Rule<PrintType>>> = LazyLock::new(|| {
    vec![
        Rule::new(PrintType::WebDl, r"WEB-DL"),
        Rule::new(PrintType::BluRay, r"Blu-?ray"),
    ]
});

static AUDIO_RULES: LazyLock<Vec<Rule<Audio>>> = LazyLock::new(|| {
    vec![
        Rule::new(Audio::Dual, r"DDP5\.1|AC3|Dual"),
        Rule::new(Audio::English, r"English"),
    ]
});

pub fn quality_rules() -> &'static [Rule<Quality>] {
    &QUALITY_RULES
}

pub fn print_rules() -> &'static [Rule<PrintType>] {
    &PRINT_RULES
}

pub fn audio_rules() -> &'static [Rule<Audio>] {
    &AUDIO_RULES
}

fn first_match<T: Copy + Default>(rules: &[Rule<T>], name: &str) -> T {
    rules
        .iter()
        .find(|rule| rule.matches(name))
        .map(|rule| rule.tag)
        .unwrap_or_default()
}

pub fn infer_quality(name: &str) -> Quality {
    first_match(quality_rules(), name)
}

pub fn infer_print_type(name: &str) -> PrintType {
    first_match(print_rules(), name)
}

pub fn infer_audio(name: &str) -> Audio {
    first_match(audio_rules(), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_tables_are_ordered() {
        let tags: Vec<_> = quality_rules().iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![Quality::P2160, Quality::P1080, Quality::P720]);

        let tags: Vec<_> = print_rules().iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![PrintType::WebDl, PrintType::BluRay]);

        let tags: Vec<_> = audio_rules().iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![Audio::Dual, Audio::English]);
    }

    #[test]
    fn quality_priority() {
        assert_eq!(infer_quality("Movie.2160p.1080p.mkv"), Quality::P2160);
        assert_eq!(infer_quality("Movie.1080p.2160p.mkv"), Quality::P2160);
        assert_eq!(infer_quality("Movie.720p.1080p.mkv"), Quality::P1080);
        assert_eq!(infer_quality("Movie.720p.mkv"), Quality::P720);
        assert_eq!(infer_quality("Movie.480p.mkv"), Quality::Unknown);
    }

    #[test]
    fn quality_is_case_insensitive() {
        assert_eq!(infer_quality("Movie.1080P.mkv"), infer_quality("Movie.1080p.mkv"));
        assert_eq!(infer_quality("MOVIE.2160P.MKV"), Quality::P2160);
    }

    #[test]
    fn print_type_priority_and_spellings() {
        assert_eq!(infer_print_type("A.WEB-DL.Blu-ray.mkv"), PrintType::WebDl);
        assert_eq!(infer_print_type("A.Blu-ray.mkv"), PrintType::BluRay);
        assert_eq!(infer_print_type("A.BluRay.mkv"), PrintType::BluRay);
        assert_eq!(infer_print_type("a.bluray.mkv"), PrintType::BluRay);
        assert_eq!(infer_print_type("a.web-dl.mkv"), PrintType::WebDl);
        assert_eq!(infer_print_type("A.WEBRip.mkv"), PrintType::Unknown);
        assert_eq!(infer_print_type("A.WEBDL.mkv"), PrintType::Unknown);
    }

    #[test]
    fn audio_detection() {
        assert_eq!(infer_audio("A.DDP5.1.mkv"), Audio::Dual);
        assert_eq!(infer_audio("A.ac3.mkv"), Audio::Dual);
        assert_eq!(infer_audio("A.DUAL.Audio.mkv"), Audio::Dual);
        assert_eq!(infer_audio("A.English.Dual.mkv"), Audio::Dual);
        assert_eq!(infer_audio("A.english.mkv"), Audio::English);
        assert_eq!(infer_audio("A.AAC2.0.mkv"), Audio::Unknown);
    }

    #[test]
    fn ddp_dot_is_literal() {
        assert_eq!(infer_audio("A.DDP5x1.mkv"), Audio::Unknown);
    }
}
