use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Administrative state as returned by the backend.
///
/// The payload is kept as received so that the debug view can show every
/// field in server order. Typed views are parsed on demand for the panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminInfo(Value);

impl AdminInfo {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn users(&self) -> Vec<AdminUser> {
        self.section("users")
    }

    pub fn roles(&self) -> Vec<AdminRole> {
        self.section("roles")
    }

    #[cfg_attr(not(feature = "role-bindings"), allow(dead_code, reason = "read by the bindings tab only"))]
    pub fn role_bindings(&self) -> Vec<RoleBinding> {
        self.section("roleBindings")
    }

    // A missing or non-list section reads as empty; malformed records are
    // skipped one by one.
    fn section<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(records) = self.0.get(key).and_then(Value::as_array) else {
            return Vec::new();
        };
        records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| match serde_json::from_value::<T>(record.clone()) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warn_skipped_record(key, idx, &err);
                    None
                },
            })
            .collect()
    }
}

fn warn_skipped_record(section: &str, index: usize, err: &serde_json::Error) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(
        &format!("Skipping malformed admin {} record #{}: {}", section, index, err).into(),
    );
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (section, index, err);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUser {
    pub internal_identifier: String,
    pub oauth_user_id: String,
    pub login_provider: String,
    pub granted_roles: Vec<GrantedRole>,
}

impl AdminUser {
    pub fn role_names(&self) -> Vec<&str> {
        self.granted_roles
            .iter()
            .map(|granted| granted.role.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GrantedRole {
    pub role: AdminRole,
    /// Ephemeral ids of the role bindings that granted this role.
    pub granted_by: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminRole {
    pub name: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Permission {
    pub resource_name: String,
    pub allowed_actions: Vec<String>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl Permission {
    /// `"topics: viewConfig, seekTopic"`
    pub fn summary(&self) -> String {
        if self.allowed_actions.is_empty() {
            return self.resource_name.clone();
        }
        format!("{}: {}", self.resource_name, self.allowed_actions.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleBinding {
    pub ephemeral_id: u32,
    pub role_name: String,
    pub subjects: Vec<Subject>,
    pub metadata: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Subject {
    pub kind: String,
    pub name: String,
    pub provider_name: String,
}

// =============== Mock 数据 ===============

/// Two roles and three users, one of them granted both roles.
#[cfg(feature = "mock")]
pub fn mock_admin_info() -> AdminInfo {
    AdminInfo::new(serde_json::json!({
        "roles": [
            {
                "name": "admin",
                "permissions": [
                    {
                        "resourceName": "clusters",
                        "allowedActions": ["admin"],
                        "includes": ["*"],
                        "excludes": []
                    }
                ]
            },
            {
                "name": "viewer",
                "permissions": [
                    {
                        "resourceName": "topics",
                        "allowedActions": ["viewConfig", "seekTopic"],
                        "includes": ["*"],
                        "excludes": ["__consumer_offsets"]
                    }
                ]
            }
        ],
        "users": [
            {
                "internalIdentifier": "ada@example.com",
                "oauthUserId": "1001",
                "loginProvider": "google",
                "grantedRoles": [
                    { "role": { "name": "admin", "permissions": [] }, "grantedBy": [1] },
                    { "role": { "name": "viewer", "permissions": [] }, "grantedBy": [2] }
                ]
            },
            {
                "internalIdentifier": "grace@example.com",
                "oauthUserId": "1002",
                "loginProvider": "google",
                "grantedRoles": [
                    { "role": { "name": "viewer", "permissions": [] }, "grantedBy": [2] }
                ]
            },
            {
                "internalIdentifier": "linus",
                "oauthUserId": "77",
                "loginProvider": "github",
                "grantedRoles": []
            }
        ],
        "roleBindings": [
            {
                "ephemeralId": 1,
                "roleName": "admin",
                "subjects": [
                    { "kind": "user", "name": "ada@example.com", "providerName": "google" }
                ],
                "metadata": { "name": "platform admins" }
            },
            {
                "ephemeralId": 2,
                "roleName": "viewer",
                "subjects": [
                    { "kind": "group", "name": "engineering", "providerName": "google" }
                ],
                "metadata": {}
            }
        ]
    }))
}
