//! Declarative field specs
//!
//! Each resource kind is described by a static [`FieldSpec`] listing the
//! fields the mapper copies and the fields the server owns. Nested and
//! collection fields point at the spec of their element.

/// One field of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Copied verbatim (strings, numbers, booleans, lists of scalars).
    Scalar(&'static str),
    /// A single nested record mapped with the given spec.
    Nested(&'static str, &'static FieldSpec),
    /// An array of nested records, each mapped with the given spec.
    Collection(&'static str, &'static FieldSpec),
}

impl Field {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scalar(name) | Self::Nested(name, _) | Self::Collection(name, _) => name,
        }
    }

    /// Spec of the nested element, if any.
    pub const fn nested_spec(&self) -> Option<&'static FieldSpec> {
        match self {
            Self::Scalar(_) => None,
            Self::Nested(_, spec) | Self::Collection(_, spec) => Some(spec),
        }
    }
}

/// Field layout of one resource kind.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Resource name used in error messages (`"Contact"`, `"EmailCampaign"`).
    pub name: &'static str,
    pub fields: &'static [Field],
    /// Fields removed before the record is sent back to the server.
    pub server_managed: &'static [&'static str],
}

impl FieldSpec {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn is_server_managed(&self, name: &str) -> bool {
        self.server_managed.contains(&name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(Field::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CHILD: FieldSpec = FieldSpec { name: "Child", fields: &[Field::Scalar("a")], server_managed: &[] };
    static PARENT: FieldSpec = FieldSpec {
        name: "Parent",
        fields: &[Field::Scalar("id"), Field::Collection("children", &CHILD)],
        server_managed: &["id"],
    };

    #[test]
    fn lookup_by_name() {
        assert_eq!(PARENT.field("children").and_then(Field::nested_spec), Some(&CHILD));
        assert!(PARENT.field("missing").is_none());
        assert!(PARENT.is_server_managed("id"));
        assert_eq!(PARENT.field_names().collect::<Vec<_>>(), vec!["id", "children"]);
    }
}
