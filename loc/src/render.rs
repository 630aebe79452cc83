//! Plain-text report rendering.

use loclib::CountResult;

/// Label of the residual bucket for files without an extension
const MISC_LABEL: &str = "misc.";

/// Render the report for a finished run.
///
/// Without a per-extension tally this is just the total. Otherwise one
/// `extension<TAB>lines` row per bucket, a `misc.` row when some lines had
/// no extension, and a closing `total` row.
pub fn report(result: &CountResult) -> String {
    let Some(tally) = &result.by_extension else {
        return format!("{}\n", result.total);
    };

    let mut out = String::new();
    for (extension, lines) in tally {
        out.push_str(&row(extension, *lines));
    }

    let misc = result.misc();
    if misc > 0 {
        out.push_str(&row(MISC_LABEL, misc));
    }

    out.push_str(&row("total", result.total));
    out
}

fn row(label: &str, lines: u64) -> String {
    format!("{label}\t{lines}\n")
}
