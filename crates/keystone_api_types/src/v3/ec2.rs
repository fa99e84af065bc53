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
//! # EC2 credential API types
//!
//! Bodies of the `/v3/users/{user_id}/credentials/OS-EC2` resource.

use serde::{Deserialize, Serialize};

/// EC2 credential.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ec2Credential {
    /// Access key.
    pub access: String,
    /// Secret key.
    pub secret: String,
    /// Project the credential is bound to.
    pub tenant_id: String,
    /// Owner of the credential.
    pub user_id: String,
}

/// EC2 credential response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ec2CredentialResponse {
    /// Credential object.
    pub credential: Ec2Credential,
}

/// List of EC2 credentials.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ec2CredentialList {
    /// Collection of credential objects.
    pub credentials: Vec<Ec2Credential>,
}

/// EC2 credential create request body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Ec2CredentialCreateRequest {
    /// Project to bind the new credential to.
    pub tenant_id: String,
}
