use crate::model::RankedItem;

/// How a screen presents its shown items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealLayout {
    /// Solo mode: each item is an independently ranked card.
    Ranked(Vec<RankedItem>),
    /// Duo mode: the subject's item against the partner's.
    Comparison {
        subject: RankedItem,
        partner: RankedItem,
        caption: String,
    },
    /// Nothing complete to show yet.
    Placeholder,
}

/// Choose the layout for `shown` items.
///
/// Duo screens need both sides; a single item never produces a one-sided
/// comparison.
#[must_use]
pub fn select_layout(is_duo: bool, shown: &[RankedItem]) -> RevealLayout {
    if !is_duo {
        if shown.is_empty() {
            return RevealLayout::Placeholder;
        }
        return RevealLayout::Ranked(shown.to_vec());
    }

    match shown {
        [subject, partner, ..] => RevealLayout::Comparison {
            subject: subject.clone(),
            partner: partner.clone(),
            caption: subject.description().to_owned(),
        },
        _ => RevealLayout::Placeholder,
    }
}
