//! Query descriptors for the NetBox list endpoints
//!
//! A descriptor only lists constraints; paging and the owning device of an
//! interface query are supplied per request. Multi-valued fields repeat the
//! query parameter, which NetBox evaluates as OR. Distinct parameters are
//! AND-ed by the server.

/// Constraints for `GET /api/dcim/devices/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceQuery {
    pub site: Vec<String>,
    pub tag: Vec<String>,
    pub role: Vec<String>,
    pub id: Vec<i32>,
    /// Case-insensitive name contains
    pub name_ic: Vec<String>,
    pub device_type: Vec<String>,
    pub status: Vec<String>,
}

impl DeviceQuery {
    /// Query string pairs, excluding paging
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_all(&mut pairs, "site", &self.site);
        push_all(&mut pairs, "tag", &self.tag);
        push_all(&mut pairs, "role", &self.role);
        push_all(&mut pairs, "id", &self.id);
        push_all(&mut pairs, "name__ic", &self.name_ic);
        push_all(&mut pairs, "device_type", &self.device_type);
        push_all(&mut pairs, "status", &self.status);
        pairs
    }
}

/// Constraints for `GET /api/dcim/interfaces/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceQuery {
    pub id: Vec<i32>,
    /// Case-insensitive name contains
    pub name_ic: Vec<String>,
    pub enabled: Option<bool>,
    pub mgmt_only: Option<bool>,
    pub connected: Option<bool>,
    pub cabled: Option<bool>,
    /// Case-insensitive type contains
    pub type_ic: Vec<String>,
}

impl InterfaceQuery {
    /// Query string pairs scoped to one device, excluding paging
    #[must_use]
    pub fn query_pairs(&self, device_id: i32) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_all(&mut pairs, "id", &self.id);
        push_all(&mut pairs, "name__ic", &self.name_ic);
        push_flag(&mut pairs, "enabled", self.enabled);
        push_flag(&mut pairs, "mgmt_only", self.mgmt_only);
        push_flag(&mut pairs, "connected", self.connected);
        push_flag(&mut pairs, "cabled", self.cabled);
        push_all(&mut pairs, "type__ic", &self.type_ic);
        pairs.push(("device_id", device_id.to_string()));
        pairs
    }
}

fn push_all<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, values: &[T]) {
    pairs.extend(values.iter().map(|value| (key, value.to_string())));
}

fn push_flag(pairs: &mut Vec<(&'static str, String)>, key: &'static str, flag: Option<bool>) {
    if let Some(flag) = flag {
        pairs.push((key, flag.to_string()));
    }
}
