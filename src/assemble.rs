//! Document assembler — one class record in, one page model out.

use crate::classify::classify;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::markup;
use crate::model::{ClassEntry, ClassRecord, DocumentModel, MemberKind};
use crate::sanitize::{strip_field_from_map, SOURCE_FIELD};

/// Build the page model for `record`.
///
/// Only the first entry of `global.items` is read. Member kinds other than
/// the four in [`MemberKind::ALL`] are dropped, and every `src` field is
/// stripped from the surfaced members.
pub fn assemble(record: ClassRecord, diagnostics: &mut dyn Diagnostics) -> DocumentModel {
    let ClassEntry {
        name,
        text,
        items: mut groups,
    } = record.global.items.into_iter().next().unwrap_or_default();
    let name = name.filter(|n| !n.is_empty());

    if name.is_none() {
        diagnostics.report(Diagnostic::MissingClassName);
    }

    let mut doc = DocumentModel {
        class_text: markup::transform(&text),
        ..Default::default()
    };

    for kind in MemberKind::ALL {
        let members = classify(&mut groups, kind.as_str(), name.as_deref(), diagnostics);
        *doc.members_mut(kind) = members;
    }

    for kind in MemberKind::ALL {
        for member in doc.members_mut(kind).iter_mut() {
            strip_field_from_map(&mut member.extra, SOURCE_FIELD);
        }
    }

    doc.class_name = name;
    doc
}
