use crate::constants::SECTION_ENTER_FRACTION;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    Projects,
    About,
    Contact,
}

/// Page anchors in document order: (element id, section).
pub const SECTION_ANCHORS: [(&str, Section); 4] = [
    ("section-hero", Section::Hero),
    ("projects", Section::Projects),
    ("about", Section::About),
    ("contact", Section::Contact),
];

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Projects => "projects",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

/// Pick the furthest-scrolled section.
///
/// `anchor_tops` yields each present anchor's viewport-relative top edge in
/// document order. An anchor counts as entered once its top is above 55% of
/// the viewport height; the last entered anchor wins, and the first section is
/// the fallback when none qualifies.
pub fn detect_section<I>(anchor_tops: I, viewport_height: f32) -> Section
where
    I: IntoIterator<Item = (Section, f32)>,
{
    let line = viewport_height * SECTION_ENTER_FRACTION;
    anchor_tops
        .into_iter()
        .filter(|(_, top)| *top < line)
        .last()
        .map(|(s, _)| s)
        .unwrap_or(SECTION_ANCHORS[0].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_anchors_fall_back_to_first() {
        assert_eq!(detect_section(std::iter::empty::<(Section, f32)>(), 800.0), Section::Hero);
    }

    #[test]
    fn exactly_on_the_line_does_not_count() {
        let tops = [(Section::Hero, 0.0), (Section::Projects, 440.0)];
        assert_eq!(detect_section(tops, 800.0), Section::Hero);
    }
}
