pub mod category;
pub mod hour_bucket;
pub mod note;
pub mod report;
pub mod shift_record;

pub use category::Category;
pub use hour_bucket::HourBucket;
pub use note::{NoteToken, NoteTokens, SupplementMarker};
pub use report::{ClassifiedShift, Report, SkipReason, SkippedRow, Summary};
pub use shift_record::ShiftRecord;
