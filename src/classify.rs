//! Member classifier — pull one kind of member out of a class's group list.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::markup;
use crate::model::{RawMember, RawMemberGroup};

/// Take the members of the first group whose `$type` equals `kind`, with each
/// member's `text` replaced by its transformed markup.
///
/// A missing group, or a group without `items`, yields no members. The
/// group's items are moved out, so a second call for the same kind comes
/// back empty.
pub fn classify(
    groups: &mut [RawMemberGroup],
    kind: &str,
    class_name: Option<&str>,
    diagnostics: &mut dyn Diagnostics,
) -> Vec<RawMember> {
    let Some(group) = groups.iter_mut().find(|g| g.kind == kind) else {
        return Vec::new();
    };
    let mut members = group.items.take().unwrap_or_default();

    for (index, member) in members.iter_mut().enumerate() {
        if member.name.is_none() {
            diagnostics.report(Diagnostic::MissingMemberName {
                class: class_name.map(str::to_string),
                kind: kind.to_string(),
                index,
            });
        }
        member.text = markup::transform(&member.text);
    }

    members
}
