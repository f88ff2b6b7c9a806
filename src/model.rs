//! Data model for class documentation records and the page model built from them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One exported class, as written by the extraction tool.
#[derive(Debug, Default, Deserialize)]
pub struct ClassRecord {
    #[serde(default)]
    pub global: GlobalScope,
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobalScope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ClassEntry>,
}

/// The class itself: always the first entry of `global.items`.
#[derive(Debug, Default, Deserialize)]
pub struct ClassEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Member groups, one per `$type`
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<RawMemberGroup>,
}

/// A batch of same-kind members (all configs, all methods, ...).
#[derive(Debug, Default, Deserialize)]
pub struct RawMemberGroup {
    #[serde(rename = "$type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// `None` when the group carries no `items` key at all
    #[serde(default)]
    pub items: Option<Vec<RawMember>>,
}

/// One documented member. Fields other than `name` and `text` pass through untouched.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Member kinds surfaced on a class page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Configs,
    Events,
    Methods,
    Properties,
}

impl MemberKind {
    pub const ALL: [MemberKind; 4] = [
        MemberKind::Configs,
        MemberKind::Events,
        MemberKind::Methods,
        MemberKind::Properties,
    ];

    /// The `$type` discriminator used in the input.
    pub fn as_str(self) -> &'static str {
        match self {
            MemberKind::Configs => "configs",
            MemberKind::Events => "events",
            MemberKind::Methods => "methods",
            MemberKind::Properties => "properties",
        }
    }
}

/// Renderer-ready page model for one class.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub class_text: String,
    pub configs: Vec<RawMember>,
    pub events: Vec<RawMember>,
    pub methods: Vec<RawMember>,
    pub properties: Vec<RawMember>,
}

impl DocumentModel {
    pub fn members_mut(&mut self, kind: MemberKind) -> &mut Vec<RawMember> {
        match kind {
            MemberKind::Configs => &mut self.configs,
            MemberKind::Events => &mut self.events,
            MemberKind::Methods => &mut self.methods,
            MemberKind::Properties => &mut self.properties,
        }
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let input = r#"{
  "global": { "items": [ {
    "name": "Ext.Panel",
    "text": "A panel.",
    "items": [
      { "$type": "methods", "items": [ { "name": "show", "text": "Shows it.", "static": false } ] }
    ]
  } ] }
}"#;
        let record: ClassRecord = serde_json::from_str(input).unwrap();
        let class = &record.global.items[0];
        assert_eq!(class.name.as_deref(), Some("Ext.Panel"));
        assert_eq!(class.items[0].kind, "methods");
        let member = &class.items[0].items.as_ref().unwrap()[0];
        assert_eq!(member.name.as_deref(), Some("show"));
        assert_eq!(member.extra.get("static"), Some(&Value::Bool(false)));
    }

    #[test]
    fn missing_fields_default() {
        let record: ClassRecord = serde_json::from_str("{}").unwrap();
        assert!(record.global.items.is_empty());

        let member: RawMember = serde_json::from_str(r#"{ "text": null }"#).unwrap();
        assert_eq!(member.name, None);
        assert_eq!(member.text, "");
    }

    #[test]
    fn group_without_items_is_none() {
        let group: RawMemberGroup = serde_json::from_str(r#"{ "$type": "events" }"#).unwrap();
        assert_eq!(group.kind, "events");
        assert!(group.items.is_none());
    }

    #[test]
    fn document_serializes_camel_case() {
        let doc = DocumentModel {
            class_name: Some("Foo".into()),
            class_text: "<p>x</p>".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["className"], "Foo");
        assert_eq!(value["classText"], "<p>x</p>");
        assert!(value["configs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn unnamed_class_omits_class_name() {
        let value = serde_json::to_value(DocumentModel::default()).unwrap();
        assert!(value.get("className").is_none());
    }
}
