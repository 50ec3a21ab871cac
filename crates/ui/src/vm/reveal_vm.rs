use services::ScreenState;
use wrapped_core::model::RankedItem;
use wrapped_core::reveal::{RevealLayout, RevealPage, Screen, select_layout};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedCardVm {
    pub rank: u32,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub secondary: Option<String>,
}

impl From<&RankedItem> for RankedCardVm {
    fn from(item: &RankedItem) -> Self {
        Self {
            rank: item.rank(),
            name: item.name().to_owned(),
            image_url: item.image_url().to_owned(),
            description: item.description().to_owned(),
            secondary: item.secondary().map(str::to_owned),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonVm {
    pub subject: RankedCardVm,
    pub partner: RankedCardVm,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealBodyVm {
    Ranked(Vec<RankedCardVm>),
    Comparison(ComparisonVm),
    Placeholder { label: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealScreenVm {
    pub title: String,
    /// Machine-readable state for styling and tests: `loading`, `loaded`, `failed`.
    pub state: &'static str,
    pub body: RevealBodyVm,
}

fn placeholder_label(screen: Screen, is_duo: bool) -> String {
    let category = screen.category().as_str();
    if is_duo {
        // "tracks" -> "track comparisons"
        format!("{} comparisons", category.trim_end_matches('s'))
    } else {
        category.to_owned()
    }
}

fn title(screen: Screen, is_duo: bool) -> String {
    let base = screen.category().title();
    match (screen.page(), is_duo) {
        (_, true) => format!("{base}: Head to Head"),
        (RevealPage::Lead, false) => base.to_owned(),
        (RevealPage::Continuation, false) => format!("{base}, continued"),
    }
}

/// Map a screen's state into what the reveal stage renders.
///
/// Loading and failed screens both render the placeholder; only the
/// `state` tag tells them apart.
#[must_use]
pub fn map_reveal_screen(screen: Screen, is_duo: bool, state: &ScreenState) -> RevealScreenVm {
    let placeholder = || RevealBodyVm::Placeholder {
        label: placeholder_label(screen, is_duo),
    };

    let (tag, body) = match state {
        ScreenState::Idle | ScreenState::Loading => ("loading", placeholder()),
        ScreenState::Failed(_) => ("failed", placeholder()),
        ScreenState::Loaded(loaded) => {
            let body = match select_layout(is_duo, &loaded.shown) {
                RevealLayout::Ranked(items) => {
                    RevealBodyVm::Ranked(items.iter().map(RankedCardVm::from).collect())
                }
                RevealLayout::Comparison {
                    subject,
                    partner,
                    caption,
                } => RevealBodyVm::Comparison(ComparisonVm {
                    subject: RankedCardVm::from(&subject),
                    partner: RankedCardVm::from(&partner),
                    caption,
                }),
                RevealLayout::Placeholder => placeholder(),
            };
            ("loaded", body)
        }
    };

    RevealScreenVm {
        title: title(screen, is_duo),
        state: tag,
        body,
    }
}
