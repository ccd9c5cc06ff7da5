//! Reference path resolution
//!
//! A reference path may embed other paths in braces, e.g.
//! `orders[{index}].total`. Embedded paths are looked up and substituted
//! leftmost first until none remain, then the final path is looked up.

use crate::error::{EvalError, EvalResult};
use illogical_types::{FlattenedContext, Value};

/// Maximum number of `{...}` substitutions in one path
pub const MAX_INTERPOLATION_DEPTH: usize = 32;

/// Outcome of a path lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Whether a value was found
    pub found: bool,
    /// Path after interpolation. Partially interpolated when an embedded
    /// path could not be resolved.
    pub path: String,
    /// Found value, `Nil` otherwise
    pub value: Value,
}

impl Resolution {
    fn not_found(path: String) -> Self {
        Self {
            found: false,
            path,
            value: Value::Nil,
        }
    }
}

/// Resolve a path against a flattened context
pub fn resolve(data: &FlattenedContext, path: &str) -> EvalResult<Resolution> {
    let mut path = path.to_string();
    let mut substitutions = 0;

    while let Some((start, end)) = find_innermost_span(&path) {
        if substitutions == MAX_INTERPOLATION_DEPTH {
            return Err(EvalError::InterpolationDepth {
                path,
                limit: MAX_INTERPOLATION_DEPTH,
            });
        }
        substitutions += 1;

        let inner = &path[start + 1..end];
        let Some(value) = data.get(inner) else {
            log::trace!("embedded path \"{}\" not found in \"{}\"", inner, path);
            return Ok(Resolution::not_found(path));
        };
        path = format!("{}{}{}", &path[..start], value, &path[end + 1..]);
    }

    match data.get(&path) {
        Some(value) => {
            log::trace!("resolved \"{}\"", path);
            Ok(Resolution {
                found: true,
                value: value.clone(),
                path,
            })
        }
        None => Ok(Resolution::not_found(path)),
    }
}

/// Leftmost `{...}` span holding at least one character and no braces.
/// Returns the byte offsets of the opening and closing brace.
fn find_innermost_span(path: &str) -> Option<(usize, usize)> {
    let mut open = None;
    for (i, b) in path.bytes().enumerate() {
        match b {
            b'{' => open = Some(i),
            b'}' => match open.take() {
                Some(start) if i > start + 1 => return Some((start, i)),
                _ => {}
            },
            _ => {}
        }
    }
    None
}
