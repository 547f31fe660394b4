use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::option::opt::Opt;

/// `Present(v)` serializes as `v`, `Absent` as the format's null.  The
/// Present/Absent distinction is only lost for a null payload, which
/// cannot occur by invariant.
impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Opt::Present(value) => serializer.serialize_some(value),
            Opt::Absent => serializer.serialize_none(),
        }
    }
}

/// Deserializes through the nullable form, so null collapses to `Absent`
/// with no custom deserializer.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Opt<T> {
    fn deserialize<D>(deserializer: D) -> Result<Opt<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        return Ok(Opt::of(value));
    }
}

#[cfg(test)]
mod test;
