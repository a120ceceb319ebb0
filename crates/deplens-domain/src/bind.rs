//! Path binding into a loosely structured report.

use deplens_types::FieldPath;
use serde_json::Value;

/// Walk `path` into `root`, one field name at a time.
///
/// Returns `None` as soon as a segment is missing or the current node is not
/// an object; the empty path yields `root` itself. A present-but-null value is
/// a hit: shape checks belong to whichever rule consumes the bound value.
pub fn bind<'a>(root: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.segments() {
        current = current.get(segment.as_str())?;
    }
    Some(current)
}
