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
//! # Error
//!
//! Errors returned by the Keystone operations.
use thiserror::Error;

use crate::auth::error::AuthError;
use crate::client::error::ClientError;
use crate::resolver::EntityKind;

/// Keystone operation error.
#[derive(Debug, Error)]
pub enum KeystoneOpsError {
    /// The entity could not be resolved from the given ID or name.
    #[error("Unable to resolve {0} id")]
    Unresolved(EntityKind),

    /// The owner of the EC2 credentials could not be resolved.
    #[error("Could not resolve {} ID", .0.title())]
    UnresolvedCredentialOwner(EntityKind),

    /// The entity does not exist.
    #[error("Could not find {kind} '{id}'")]
    NotFound {
        /// The kind of the entity.
        kind: EntityKind,
        /// The requested ID.
        id: String,
    },

    /// Entity with the same name already exists.
    #[error("{} \"{name}\" already exists", .kind.title())]
    AlreadyExists {
        /// The kind of the entity.
        kind: EntityKind,
        /// The conflicting name.
        name: String,
    },

    /// The service has no endpoints.
    #[error("Could not find endpoint for the service \"{0}\"")]
    EndpointNotFound(String),

    /// Required argument is missing.
    #[error("{0} is required")]
    MissingArgument(String),

    /// Argument value can not be used.
    #[error("invalid value of the argument {argument}: {message}")]
    InvalidArgument {
        /// The argument name.
        argument: String,
        /// Problem description.
        message: String,
    },

    /// Argument not known to the function.
    #[error("unexpected argument {argument} for the function {function}")]
    UnexpectedArgument {
        /// The function name.
        function: String,
        /// The argument name.
        argument: String,
    },

    /// Function not known to the dispatcher.
    #[error("unknown function {0}")]
    UnknownFunction(String),

    /// Request data validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },

    #[error(transparent)]
    Builder {
        #[from]
        source: BuilderError,
    },

    /// Identity service client error.
    #[error(transparent)]
    Client {
        /// The source of the error.
        #[from]
        source: ClientError,
    },

    /// Authentication error.
    #[error(transparent)]
    Auth {
        /// The source of the error.
        #[from]
        source: AuthError,
    },

    /// Json serialization error.
    #[error("json serde error: {}", source)]
    Json {
        /// The source of the error.
        #[from]
        source: serde_json::Error,
    },
}

impl KeystoneOpsError {
    /// Shortcut for the [`KeystoneOpsError::NotFound`].
    pub fn not_found<S: Into<String>>(kind: EntityKind, id: S) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Report resolution failures in the EC2 credential flavour.
    pub fn into_credential_owner(self) -> Self {
        match self {
            Self::Unresolved(kind) => Self::UnresolvedCredentialOwner(kind),
            other => other,
        }
    }
}

/// Builder error.
///
/// Errors produced by the `derive_builder` generated builders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// Uninitialized field.
    #[error("{0}")]
    UninitializedField(String),
    /// Custom validation error.
    #[error("{0}")]
    Validation(String),
}

impl From<String> for BuilderError {
    fn from(s: String) -> Self {
        Self::Validation(s)
    }
}

impl From<derive_builder::UninitializedFieldError> for BuilderError {
    fn from(ufe: derive_builder::UninitializedFieldError) -> Self {
        Self::UninitializedField(ufe.to_string())
    }
}
