use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{AceEntry, PermissionSet};

impl Serialize for AceEntry {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AceEntry", 6)?;
        state.serialize_field("accountsid", &self.account_sid)?;
        state.serialize_field("aceType", &self.ace_type)?;
        state.serialize_field("aceflags", &self.ace_flags)?;
        state.serialize_field("rights", &self.rights)?;
        state.serialize_field("objectguid", &self.object_guid)?;
        state.serialize_field("InheritObjectGuid", &self.inherit_object_guid)?;
        state.end()
    }
}

impl Serialize for PermissionSet {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PermissionSet", 6)?;
        state.serialize_field("owner", &self.owner)?;
        state.serialize_field("primary", &self.primary)?;
        state.serialize_field("dacl", &self.dacl)?;
        state.serialize_field("daclInheritFlags", &self.dacl_inheritance_flags)?;
        state.serialize_field("sacl", &self.sacl)?;
        state.serialize_field("saclInheritFlags", &self.sacl_inheritance_flags)?;
        state.end()
    }
}
