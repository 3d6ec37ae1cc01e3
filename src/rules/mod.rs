//! Rule matching and command expansion
//!
//! A rule fires when its [`Mask`] matches at least one changed path. The
//! commands of a fired rule are templates: [`expand_command`] binds the
//! current file name into them before they reach the executor.

mod mask;

pub use mask::Mask;

/// Placeholder substituted with the bound file name
pub const FILENAME_PLACEHOLDER: &str = "${filename}";

/// Return the changed files whose path matches `mask`, in input order.
///
/// Matching is unanchored: `\.ts` matches `src/a.ts.bak` unless the mask
/// anchors itself with `^` or `$`.
pub fn matching_files<'a>(files: &'a [String], mask: &Mask) -> Vec<&'a str> {
    files
        .iter()
        .map(String::as_str)
        .filter(|file| mask.is_match(file))
        .collect()
}

/// Replace the first `${filename}` in `template` with `filename`.
///
/// Later occurrences are left as they are.
pub fn expand_command(filename: &str, template: &str) -> String {
    template.replacen(FILENAME_PLACEHOLDER, filename, 1)
}
