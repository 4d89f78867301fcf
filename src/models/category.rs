use serde::Serialize;

/// Paid-hour category a minute of work ends up in.
///
/// The first four are assigned while partitioning the shift interval;
/// `Supplemental` is only ever filled by note-driven reclassification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Day,
    Night,
    Sunday,
    Holiday,
    Supplemental,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Day,
        Category::Night,
        Category::Sunday,
        Category::Holiday,
        Category::Supplemental,
    ];

    /// Column label used by the console report and the exports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Day => "Day",
            Category::Night => "Night",
            Category::Sunday => "Sunday",
            Category::Holiday => "Holiday",
            Category::Supplemental => "Suppl.",
        }
    }
}
