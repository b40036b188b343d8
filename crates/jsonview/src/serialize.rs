//! `Serialize` for [`View`], so a view can be transcoded into any serde
//! format without building an intermediate value.
//!
//! Strings are passed through as their raw text: escape sequences are not
//! decoded, so `"a\"b"` serializes as the four characters `a\"b`. Numbers
//! that fit `i64`, then `u64`, keep their integer form; others go through
//! `f64`. Unrecognised content serializes as its raw text.
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{Kind, View, unit::CodeUnit};

impl<C: CodeUnit> Serialize for View<'_, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.kind() {
            Kind::Object => {
                let mut map = serializer.serialize_map(None)?;
                for member in self.entries().filter(|m| !m.key.is_empty()) {
                    map.serialize_entry(&*C::to_str_lossy(member.key.string_view()), &member.value)?;
                }
                map.end()
            }
            Kind::Array => {
                let mut seq = serializer.serialize_seq(None)?;
                for element in self {
                    seq.serialize_element(&element)?;
                }
                seq.end()
            }
            Kind::Member => {
                let member = self.member();
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(&*C::to_str_lossy(member.key.string_view()), &member.value)?;
                map.end()
            }
            Kind::String => serializer.serialize_str(&C::to_str_lossy(self.string_view())),
            Kind::Boolean => serializer.serialize_bool(self.boolean()),
            Kind::Null => serializer.serialize_unit(),
            Kind::Number => {
                if let Ok(i) = self.try_number::<i64>() {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = self.try_number::<u64>() {
                    serializer.serialize_u64(u)
                } else if let Ok(f) = self.try_float() {
                    serializer.serialize_f64(f)
                } else {
                    serializer.serialize_str(&C::to_str_lossy(self.as_units()))
                }
            }
            Kind::Unknown if self.is_empty() => serializer.serialize_unit(),
            Kind::Unknown => serializer.serialize_str(&C::to_str_lossy(self.as_units())),
        }
    }
}
