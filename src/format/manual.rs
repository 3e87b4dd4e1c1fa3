//! Pattern substitution, for when no locale is involved.

use crate::cal::{DatePiece, TimePiece};
use crate::format::zero_pad;


/// Replaces the first `YYYY`, `MM`, `DD`, `HH`, `mm`, and `ss` in the
/// pattern with the matching fields. Any later repeat of a token, and
/// anything that isn’t a token, is left as it is.
pub(crate) fn substitute<T: DatePiece + TimePiece>(pattern: &str, when: &T) -> String {
    let mut output = pattern.replacen("YYYY", &zero_pad(when.year(), 4), 1)
                            .replacen("MM", &zero_pad(when.month().months_from_january() as i64 + 1, 2), 1)
                            .replacen("DD", &zero_pad(when.day() as i64, 2), 1);

    if output.contains("HH") {
        output = output.replacen("HH", &zero_pad(when.hour() as i64, 2), 1);
    }
    if output.contains("mm") {
        output = output.replacen("mm", &zero_pad(when.minute() as i64, 2), 1);
    }
    if output.contains("ss") {
        output = output.replacen("ss", &zero_pad(when.second() as i64, 2), 1);
    }

    output
}
