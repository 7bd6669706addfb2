//! Directory prefix shared by every script in a log.
//!
//! Script names look like `fn /abs/path/to/file.js:12:3`. When every script
//! lives under the same directory, that directory is replaced by a short
//! placeholder to keep names readable.

use super::symbol::CodeCategory;
use crate::parser::CodeRef;
use log::debug;

/// Compute the directory prefix common to all script names
///
/// **Public** - computed once per log before stack encoding
///
/// Returns `None` when there are no script paths or they share nothing
/// longer than a single character.
pub fn shared_prefix<'a, I>(codes: I) -> Option<String>
where
    I: IntoIterator<Item = &'a CodeRef>,
{
    let mut common: Option<&str> = None;

    let directories = codes
        .into_iter()
        .filter(|code| {
            code.kind()
                .and_then(|kind| kind.parse::<CodeCategory>().ok())
                == Some(CodeCategory::Script)
        })
        .filter_map(|code| directory_prefix(code.raw_name()));

    for directory in directories {
        let next = match common {
            None => directory,
            Some(current) => &current[..common_prefix_len(current, directory)],
        };
        common = Some(next);

        // An empty prefix cannot grow again
        if next.is_empty() {
            break;
        }
    }

    let prefix = common.filter(|p| p.chars().count() > 1)?;
    debug!("Shared script path prefix: {}", prefix);
    Some(prefix.to_string())
}

/// Directory part of the first path-shaped token of a script name
///
/// `"render /app/src/view.js:10:4"` gives `"/app/src/"`.
pub fn directory_prefix(name: &str) -> Option<&str> {
    let token = name.split_whitespace().find(|token| token.contains('/'))?;
    let end = token.rfind('/')? + 1;
    Some(&token[..end])
}

/// Byte length of the longest common leading substring, on char boundaries
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or_else(|| a.len().min(b.len()), |((index, _), _)| index)
}
