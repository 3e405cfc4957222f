use serde::{Deserialize, Deserializer, Serialize};

/// A host record as served by the inventory backend.
///
/// Field names follow the backend's JSON (`ID`, `Host`, ...). Records are
/// immutable snapshots; `id` is the identity key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Host", default)]
    pub host: String,
    #[serde(rename = "Comment", default)]
    pub comment: String,
    #[serde(rename = "Owner", default)]
    pub owner: String,
    #[serde(rename = "IPs", default, deserialize_with = "null_as_empty")]
    pub ips: Vec<Ip>,
    #[serde(rename = "Ports", default, deserialize_with = "null_as_empty")]
    pub ports: Vec<Port>,
    /// SHA-256 over host, comment and owner, computed by the backend.
    #[serde(rename = "Signature", default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ip {
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Signature", default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    #[serde(rename = "Port")]
    pub port: u32,
    #[serde(rename = "Signature", default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl Asset {
    pub fn new(id: i64, host: impl Into<String>) -> Self {
        Self {
            id,
            host: host.into(),
            comment: String::new(),
            owner: String::new(),
            ips: Vec::new(),
            ports: Vec::new(),
            signature: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_ip(mut self, address: impl Into<String>) -> Self {
        self.ips.push(Ip { address: address.into(), signature: None });
        self
    }

    pub fn with_port(mut self, port: u32) -> Self {
        self.ports.push(Port { port, signature: None });
        self
    }

    /// IP addresses joined with `", "`.
    pub fn ip_list(&self) -> String {
        self.ips.iter().map(|ip| ip.address.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// Port numbers joined with `", "`.
    pub fn port_list(&self) -> String {
        self.ports.iter().map(|p| p.port.to_string()).collect::<Vec<_>>().join(", ")
    }
}

/// The backend encodes empty lists as `null`.
/// `null` and missing lists both decode as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_asset() {
        let json = r#"{
            "ID": 42,
            "Host": "db-01.corp",
            "Comment": "primary",
            "Owner": "dba",
            "IPs": [{"Address": "10.0.0.5", "Signature": "abc"}],
            "Ports": [{"Port": 5432, "Signature": "def"}, {"Port": 22}],
            "Signature": "0123"
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, 42);
        assert_eq!(asset.host, "db-01.corp");
        assert_eq!(asset.owner, "dba");
        assert_eq!(asset.ip_list(), "10.0.0.5");
        assert_eq!(asset.port_list(), "5432, 22");
        assert_eq!(asset.signature.as_deref(), Some("0123"));
    }

    #[test]
    fn test_null_lists_decode_empty() {
        let json = r#"{"ID": 1, "Host": "a", "Comment": "", "Owner": "", "IPs": null, "Ports": null}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert!(asset.ips.is_empty());
        assert!(asset.ports.is_empty());
        assert_eq!(asset.ip_list(), "");
    }

    #[test]
    fn test_missing_lists_decode_empty() {
        let asset: Asset = serde_json::from_str(r#"{"ID": 7, "Host": "b"}"#).unwrap();
        assert!(asset.ips.is_empty());
        assert!(asset.ports.is_empty());
        assert_eq!(asset.signature, None);
    }
}
