// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Dispatcher
//!
//! Runs the operations by name with keyword arguments, the way the
//! configuration-management agent invokes them
//! (`keystone.role_list profile=openstack1`).
//!
//! Every function accepts the `profile` argument selecting the configuration
//! profile and the `connection_<key>` arguments overriding the connection
//! settings. The session is authenticated once per call.

use std::collections::BTreeMap;
use std::fmt;

use secrecy::SecretString;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::assignment::RoleCreate;
use crate::auth::{Connector, authenticate};
use crate::catalog::{EndpointUrls, ServiceCreate};
use crate::config::{ConfigStore, ConnectionArgs, parse_bool};
use crate::error::KeystoneOpsError;
use crate::identity::{UserCreate, UserUpdate};
use crate::keystone::{Keystone, KeystoneClient};
use crate::resolver::EntityRef;
use crate::resource::{ProjectCreate, ProjectUpdate};

/// Keyword arguments of the call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments(BTreeMap<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key=value` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, KeystoneOpsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut arguments = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| KeystoneOpsError::InvalidArgument {
                    argument: pair.into(),
                    message: "expected key=value".into(),
                })?;
            arguments.insert(key, value);
        }
        Ok(arguments)
    }

    /// Set the argument.
    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    fn take_string(&mut self, key: &str) -> Option<String> {
        match self.0.remove(key)? {
            Value::Null => None,
            Value::String(value) => Some(value),
            other => Some(other.to_string()),
        }
    }

    fn require_string(&mut self, key: &str) -> Result<String, KeystoneOpsError> {
        self.take_string(key)
            .ok_or_else(|| KeystoneOpsError::MissingArgument(key.into()))
    }

    fn take_secret(&mut self, key: &str) -> Option<SecretString> {
        self.take_string(key).map(SecretString::from)
    }

    fn take_bool(&mut self, key: &str) -> Result<Option<bool>, KeystoneOpsError> {
        let invalid = |value: &dyn fmt::Display| KeystoneOpsError::InvalidArgument {
            argument: key.into(),
            message: format!("{value} is not a boolean"),
        };
        match self.0.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(value)),
            Some(Value::Number(value)) => Ok(Some(value.as_f64().is_some_and(|n| n != 0.0))),
            Some(Value::String(value)) => match parse_bool(&value) {
                Some(flag) => Ok(Some(flag)),
                None => Err(invalid(&value)),
            },
            Some(other) => Err(invalid(&other)),
        }
    }

    fn entity_ref(&mut self, id_key: &str, name_key: &str) -> EntityRef {
        EntityRef::new(self.take_string(id_key), self.take_string(name_key))
    }

    /// Extract the `connection_<key>` overrides.
    fn take_connection_args(&mut self) -> Result<ConnectionArgs, KeystoneOpsError> {
        Ok(ConnectionArgs {
            user: self.take_string("connection_user"),
            password: self.take_secret("connection_password"),
            project: self.take_string("connection_project"),
            project_id: self.take_string("connection_project_id"),
            auth_url: self.take_string("connection_auth_url"),
            insecure: self.take_bool("connection_insecure")?,
            token: self.take_secret("connection_token"),
            endpoint: self.take_string("connection_endpoint"),
        })
    }

    /// Fail on arguments not consumed by the function.
    fn finish(self, function: &str) -> Result<(), KeystoneOpsError> {
        match self.0.into_keys().next() {
            Some(argument) => Err(KeystoneOpsError::UnexpectedArgument {
                function: function.into(),
                argument,
            }),
            None => Ok(()),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Result of the call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Key/value mapping.
    Mapping(Value),
    /// Status message of the mutation.
    Message(String),
}

impl Output {
    fn mapping<T: Serialize>(value: &T) -> Result<Self, KeystoneOpsError> {
        Ok(Self::Mapping(serde_json::to_value(value)?))
    }

    /// Mapping with the single entry.
    fn keyed<T: Serialize>(key: &str, value: &T) -> Result<Self, KeystoneOpsError> {
        Ok(Self::Mapping(json!({ key: serde_json::to_value(value)? })))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(value) => {
                f.write_str(&serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?)
            }
            Self::Message(message) => f.write_str(message),
        }
    }
}

/// Parsed call of the operation.
#[derive(Debug)]
enum Call {
    Auth,
    Ec2CredentialsCreate {
        user: EntityRef,
        project: EntityRef,
    },
    Ec2CredentialsDelete {
        user: EntityRef,
        access: String,
    },
    Ec2CredentialsGet {
        user: EntityRef,
        access: String,
    },
    Ec2CredentialsList {
        user: EntityRef,
    },
    EndpointCreate {
        service: String,
        urls: EndpointUrls,
        region: Option<String>,
    },
    EndpointDelete {
        service: String,
    },
    EndpointGet {
        service: String,
    },
    EndpointList,
    ProjectCreate(ProjectCreate),
    ProjectDelete(EntityRef),
    ProjectGet {
        project: EntityRef,
        domain: Option<String>,
    },
    ProjectList {
        domain: Option<String>,
    },
    ProjectUpdate {
        project: EntityRef,
        update: ProjectUpdate,
    },
    RoleCreate(RoleCreate),
    RoleDelete(EntityRef),
    RoleGet(EntityRef),
    RoleList,
    ServiceCreate(ServiceCreate),
    ServiceDelete(EntityRef),
    ServiceGet(EntityRef),
    ServiceList,
    TokenGet,
    UserCreate(UserCreate),
    UserDelete(EntityRef),
    UserGet {
        user: EntityRef,
        domain: Option<String>,
    },
    UserList {
        default_project: Option<String>,
        domain: Option<String>,
    },
    UserRoleAdd {
        user: EntityRef,
        project: EntityRef,
        role: EntityRef,
    },
    UserRoleList {
        user: EntityRef,
        project: EntityRef,
    },
    UserRoleRemove {
        user: EntityRef,
        project: EntityRef,
        role: EntityRef,
    },
    UserUpdate {
        user: EntityRef,
        update: UserUpdate,
    },
}

/// Reference by the ID, taking the `name` as the new name. Without the ID the
/// `name` references the entity.
fn update_target(args: &mut Arguments, id_key: &str) -> (EntityRef, Option<String>) {
    let id = args.take_string(id_key);
    let name = args.take_string("name");
    match id {
        Some(id) => (EntityRef::id(id), name),
        None => (EntityRef::new(None, name), None),
    }
}

impl Call {
    /// Parse the call of the function, consuming its arguments.
    fn parse(function: &str, args: &mut Arguments) -> Result<Self, KeystoneOpsError> {
        let canonical = match function.strip_prefix("tenant_") {
            Some(rest) => format!("project_{rest}"),
            None => function.to_string(),
        };
        Ok(match canonical.as_str() {
            "auth" => Self::Auth,
            "ec2_credentials_create" => Self::Ec2CredentialsCreate {
                user: args.entity_ref("user_id", "name"),
                project: args.entity_ref("project_id", "project"),
            },
            "ec2_credentials_delete" => Self::Ec2CredentialsDelete {
                user: args.entity_ref("user_id", "name"),
                access: args.take_string("access_key").unwrap_or_default(),
            },
            "ec2_credentials_get" => Self::Ec2CredentialsGet {
                user: args.entity_ref("user_id", "name"),
                access: args.take_string("access").unwrap_or_default(),
            },
            "ec2_credentials_list" => Self::Ec2CredentialsList {
                user: args.entity_ref("user_id", "name"),
            },
            "endpoint_create" => Self::EndpointCreate {
                service: args.require_string("service")?,
                urls: EndpointUrls {
                    public: args.take_string("publicurl"),
                    internal: args.take_string("internalurl"),
                    admin: args.take_string("adminurl"),
                },
                region: args.take_string("region"),
            },
            "endpoint_delete" => Self::EndpointDelete {
                service: args.require_string("service")?,
            },
            "endpoint_get" => Self::EndpointGet {
                service: args.require_string("service")?,
            },
            "endpoint_list" => Self::EndpointList,
            "project_create" => Self::ProjectCreate(ProjectCreate {
                name: args.require_string("name")?,
                description: args.take_string("description"),
                domain_id: args.take_string("domain"),
                enabled: args.take_bool("enabled")?.unwrap_or(true),
            }),
            "project_delete" => Self::ProjectDelete(args.entity_ref("project_id", "name")),
            "project_get" => Self::ProjectGet {
                project: args.entity_ref("project_id", "name"),
                domain: args.take_string("domain"),
            },
            "project_list" => Self::ProjectList {
                domain: args.take_string("domain"),
            },
            "project_update" => {
                let (project, name) = update_target(args, "project_id");
                Self::ProjectUpdate {
                    project,
                    update: ProjectUpdate {
                        name,
                        description: args.take_string("description"),
                        domain_id: args.take_string("domain"),
                        enabled: args.take_bool("enabled")?,
                    },
                }
            }
            "role_create" => Self::RoleCreate(RoleCreate {
                name: args.require_string("name")?,
            }),
            "role_delete" => Self::RoleDelete(args.entity_ref("role_id", "name")),
            "role_get" => Self::RoleGet(args.entity_ref("role_id", "name")),
            "role_list" => Self::RoleList,
            "service_create" => Self::ServiceCreate(ServiceCreate {
                name: args.require_string("name")?,
                r#type: args.require_string("service_type")?,
                description: args.take_string("description"),
            }),
            "service_delete" => Self::ServiceDelete(args.entity_ref("service_id", "name")),
            "service_get" => Self::ServiceGet(args.entity_ref("service_id", "name")),
            "service_list" => Self::ServiceList,
            "token_get" => Self::TokenGet,
            "user_create" => Self::UserCreate(UserCreate {
                name: args.require_string("name")?,
                password: args
                    .take_secret("password")
                    .ok_or_else(|| KeystoneOpsError::MissingArgument("password".into()))?,
                email: args.take_string("email"),
                project_id: args.take_string("project_id"),
                domain_id: args.take_string("domain"),
                enabled: args.take_bool("enabled")?.unwrap_or(true),
            }),
            "user_delete" => Self::UserDelete(args.entity_ref("user_id", "name")),
            "user_get" => Self::UserGet {
                user: args.entity_ref("user_id", "name"),
                domain: args.take_string("domain"),
            },
            "user_list" => Self::UserList {
                default_project: args.take_string("default_project"),
                domain: args.take_string("domain"),
            },
            "user_role_add" => Self::UserRoleAdd {
                user: args.entity_ref("user_id", "user"),
                project: args.entity_ref("project_id", "project"),
                role: args.entity_ref("role_id", "role"),
            },
            "user_role_list" => Self::UserRoleList {
                user: args.entity_ref("user_id", "user_name"),
                project: args.entity_ref("project_id", "project_name"),
            },
            "user_role_remove" => Self::UserRoleRemove {
                user: args.entity_ref("user_id", "user"),
                project: args.entity_ref("project_id", "project"),
                role: args.entity_ref("role_id", "role"),
            },
            "user_update" => {
                let (user, name) = update_target(args, "user_id");
                Self::UserUpdate {
                    user,
                    update: UserUpdate {
                        name,
                        email: args.take_string("email"),
                        password: args.take_secret("password"),
                        enabled: args.take_bool("enabled")?,
                        domain_id: args.take_string("domain"),
                        project_id: args.take_string("project"),
                    },
                }
            }
            _ => return Err(KeystoneOpsError::UnknownFunction(function.into())),
        })
    }

    /// Run the call against the session.
    async fn execute<C: KeystoneClient>(
        self,
        keystone: &Keystone<C>,
    ) -> Result<Output, KeystoneOpsError> {
        match self {
            Self::Auth | Self::TokenGet => Output::mapping(&keystone.token_get().await?),
            Self::Ec2CredentialsCreate { user, project } => {
                Output::mapping(&keystone.ec2_credentials_create(&user, &project).await?)
            }
            Self::Ec2CredentialsDelete { user, access } => Ok(Output::Message(
                keystone.ec2_credentials_delete(&user, &access).await?,
            )),
            Self::Ec2CredentialsGet { user, access } => {
                let credential = keystone.ec2_credentials_get(&user, &access).await?;
                Output::keyed(&credential.access, &credential)
            }
            Self::Ec2CredentialsList { user } => {
                Output::mapping(&keystone.ec2_credentials_list(&user).await?)
            }
            Self::EndpointCreate {
                service,
                urls,
                region,
            } => Output::mapping(
                &keystone
                    .endpoint_create(&service, &urls, region.as_deref())
                    .await?,
            ),
            Self::EndpointDelete { service } => {
                Ok(Output::Message(keystone.endpoint_delete(&service).await?))
            }
            Self::EndpointGet { service } => {
                Output::mapping(&keystone.endpoint_get(&service).await?)
            }
            Self::EndpointList => Output::mapping(&keystone.endpoint_list().await?),
            Self::ProjectCreate(project) => {
                let project = keystone.project_create(project).await?;
                Output::keyed(&project.name, &project)
            }
            Self::ProjectDelete(project) => {
                Ok(Output::Message(keystone.project_delete(&project).await?))
            }
            Self::ProjectGet { project, domain } => {
                let project = keystone.project_get(&project, domain.as_deref()).await?;
                Output::keyed(&project.name, &project)
            }
            Self::ProjectList { domain } => {
                Output::mapping(&keystone.project_list(domain.as_deref()).await?)
            }
            Self::ProjectUpdate { project, update } => Ok(Output::Message(
                keystone.project_update(&project, update).await?,
            )),
            Self::RoleCreate(role) => {
                let role = keystone.role_create(role).await?;
                Output::keyed(&role.name, &role)
            }
            Self::RoleDelete(role) => Ok(Output::Message(keystone.role_delete(&role).await?)),
            Self::RoleGet(role) => {
                let role = keystone.role_get(&role).await?;
                Output::keyed(&role.name, &role)
            }
            Self::RoleList => Output::mapping(&keystone.role_list().await?),
            Self::ServiceCreate(service) => {
                let service = keystone.service_create(service).await?;
                Output::keyed(&service.name, &service)
            }
            Self::ServiceDelete(service) => {
                Ok(Output::Message(keystone.service_delete(&service).await?))
            }
            Self::ServiceGet(service) => {
                let service = keystone.service_get(&service).await?;
                Output::keyed(&service.name, &service)
            }
            Self::ServiceList => Output::mapping(&keystone.service_list().await?),
            Self::UserCreate(user) => {
                let user = keystone.user_create(user).await?;
                Output::keyed(&user.name, &user)
            }
            Self::UserDelete(user) => Ok(Output::Message(keystone.user_delete(&user).await?)),
            Self::UserGet { user, domain } => {
                let user = keystone.user_get(&user, domain.as_deref()).await?;
                Output::keyed(&user.name, &user)
            }
            Self::UserList {
                default_project,
                domain,
            } => Output::mapping(
                &keystone
                    .user_list(default_project.as_deref(), domain.as_deref())
                    .await?,
            ),
            Self::UserRoleAdd {
                user,
                project,
                role,
            } => Ok(Output::Message(
                keystone.user_role_add(&user, &project, &role).await?,
            )),
            Self::UserRoleList { user, project } => {
                Output::mapping(&keystone.user_role_list(&user, &project).await?)
            }
            Self::UserRoleRemove {
                user,
                project,
                role,
            } => Ok(Output::Message(
                keystone.user_role_remove(&user, &project, &role).await?,
            )),
            Self::UserUpdate { user, update } => {
                Ok(Output::Message(keystone.user_update(&user, update).await?))
            }
        }
    }
}

/// Runs the named operations.
pub struct Dispatcher<'a, C> {
    store: &'a dyn ConfigStore,
    connector: C,
}

impl<'a, C: Connector> Dispatcher<'a, C> {
    pub fn new(store: &'a dyn ConfigStore, connector: C) -> Self {
        Self { store, connector }
    }

    /// Call the function with the arguments.
    ///
    /// The `keystone.` prefix of the function name is ignored and the
    /// `tenant_*` functions are aliases of the `project_*` ones. The arguments
    /// are validated before the session is authenticated.
    #[tracing::instrument(level = "info", skip(self, arguments))]
    pub async fn call(
        &self,
        function: &str,
        mut arguments: Arguments,
    ) -> Result<Output, KeystoneOpsError> {
        let function = function.strip_prefix("keystone.").unwrap_or(function);
        let profile = arguments.take_string("profile");
        let connection = arguments.take_connection_args()?;
        let call = Call::parse(function, &mut arguments)?;
        arguments.finish(function)?;
        debug!("parsed call {:?}", call);

        let keystone = authenticate(
            &self.connector,
            self.store,
            profile.as_deref(),
            &connection,
        )
        .await?;
        call.execute(&keystone).await
    }
}
