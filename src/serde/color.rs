use serde::ser::SerializeStruct;

use crate::models::Color;

/// Serialize a color as a `{ "r", "g", "b" }` object
pub fn serialize_color_as_object<S: serde::ser::Serializer>(
    color: &Color,
    s: S,
) -> Result<S::Ok, S::Error> {
    let mut st = s.serialize_struct("Color", 3)?;
    st.serialize_field("r", &color.red)?;
    st.serialize_field("g", &color.green)?;
    st.serialize_field("b", &color.blue)?;
    st.end()
}
