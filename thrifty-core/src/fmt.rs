use core::fmt::{self, Debug, Formatter};

use crate::{FieldId, UNSET_FIELD_ID, UnionShape};

/// The active field of a union, as seen by [`debug_union`]
pub struct ActiveField<'a> {
    /// Wire id of the field
    pub id: FieldId,
    /// The payload
    pub value: &'a dyn Debug,
    /// Full runtime type name of the payload, from [`core::any::type_name_of_val`]
    pub type_name: &'static str,
}

/// Writes the diagnostic form shared by every derived union:
///
/// ```text
/// ComplexUnion { value: 42, id: 1, name: "intValue", type: "i64" }
/// ComplexUnion { value: None, id: 0, name: None, type: "<unset>" }
/// ```
///
/// This is for logs. It plays no part in equality or serialization.
pub fn debug_union(
    f: &mut Formatter<'_>,
    shape: &UnionShape,
    active: Option<ActiveField<'_>>,
) -> fmt::Result {
    let mut s = f.debug_struct(shape.name);
    match active {
        Some(active) => {
            let name = shape.field_by_id(active.id).map(|field| field.name);
            s.field("value", active.value)
                .field("id", &active.id)
                .field("name", &name.unwrap_or("<undeclared>"))
                .field("type", &short_type_name(active.type_name))
        }
        None => s
            .field("value", &format_args!("None"))
            .field("id", &UNSET_FIELD_ID)
            .field("name", &format_args!("None"))
            .field("type", &"<unset>"),
    };
    s.finish()
}

/// Strips module paths and generic arguments: `alloc::vec::Vec<i64>` becomes `Vec`.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
