//! Trailing transform text.
//!
//! Every object command may carry free-form transform text after its
//! positional arguments: `T=(x y z)` translation, `R=(x y z)` rotation in
//! degrees, `S=(x y z)` scale factors, in any order, components separated by
//! whitespace or commas. Handlers that end up with a target object feed
//! their unconsumed text through [`apply_transform_text`] as a shared
//! post-step; this is not a dispatched verb of its own (`TransformObject`
//! is, and uses the same parser).

use stagelink_scene::{ObjectHandle, SceneContainer, TransformDelta};

/// Parse transform groups out of `text`. Returns `None` when no group is
/// present; groups that fail to parse are ignored.
pub fn parse_transform_text(text: &str) -> Option<TransformDelta> {
    let mut delta = TransformDelta::default();
    let mut any = false;
    if let Some(translate) = parse_group(text, "T=(") {
        delta.translate = translate;
        any = true;
    }
    if let Some(rotate) = parse_group(text, "R=(") {
        delta.rotate = rotate;
        any = true;
    }
    if let Some(scale) = parse_group(text, "S=(") {
        delta.scale = scale;
        any = true;
    }
    any.then_some(delta)
}

/// Apply any transform text in `text` to `object`, relative to its current
/// transform. Text without transform groups applies nothing.
pub fn apply_transform_text(scene: &mut dyn SceneContainer, object: ObjectHandle, text: &str) {
    if let Some(delta) = parse_transform_text(text) {
        scene.apply_transform_relative(object, &delta);
    }
}

/// Find `key` at a token boundary and parse the three floats up to the
/// closing parenthesis.
fn parse_group(text: &str, key: &str) -> Option<[f32; 3]> {
    let mut from = 0;
    while let Some(found) = text[from..].find(key) {
        let at = from + found;
        let at_boundary = at == 0 || text[..at].ends_with(|c: char| c.is_whitespace());
        if !at_boundary {
            from = at + key.len();
            continue;
        }
        let start = at + key.len();
        let end = start + text[start..].find(')')?;
        return parse_components(&text[start..end]);
    }
    None
}

fn parse_components(body: &str) -> Option<[f32; 3]> {
    let mut values = body
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let x = values.next()?.parse().ok()?;
    let y = values.next()?.parse().ok()?;
    let z = values.next()?.parse().ok()?;
    Some([x, y, z])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_groups() {
        let delta = parse_transform_text("T=(1 2 3) R=(0 90 0) S=(2 2 2)").unwrap();
        assert_eq!(delta.translate, [1.0, 2.0, 3.0]);
        assert_eq!(delta.rotate, [0.0, 90.0, 0.0]);
        assert_eq!(delta.scale, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_missing_groups_leave_identity() {
        let delta = parse_transform_text(" R=(10, 20, 30)").unwrap();
        assert_eq!(delta.translate, [0.0, 0.0, 0.0]);
        assert_eq!(delta.rotate, [10.0, 20.0, 30.0]);
        assert_eq!(delta.scale, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_no_groups_is_none() {
        assert!(parse_transform_text("").is_none());
        assert!(parse_transform_text("EditIfExists=true").is_none());
    }

    #[test]
    fn test_key_must_start_a_token() {
        // "...S=(" inside another token is not a scale group
        assert!(parse_transform_text("LIGHTS=(1 2 3)").is_none());
        let delta = parse_transform_text("LIGHTS=(9 9 9) S=(2 2 2)").unwrap();
        assert_eq!(delta.scale, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_malformed_group_is_ignored() {
        assert!(parse_transform_text("T=(1 2)").is_none());
        assert!(parse_transform_text("T=(a b c)").is_none());
        assert!(parse_transform_text("T=(1 2 3").is_none());
    }
}
