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

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

use openstack_keystone_api_types::error::BuilderError;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Configured URL can not be parsed.
    #[error("invalid {key} url: {source}")]
    InvalidUrl {
        /// The setting name.
        key: String,
        /// The source of the error.
        source: url::ParseError,
    },

    /// The identity service refused the credentials.
    #[error("authentication failed with {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("authentication response misses the X-Subject-Token header")]
    MissingSubjectToken,

    #[error("building authentication request: {}", source)]
    Request {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    #[error("authentication request failed: {}", source)]
    Http {
        /// The source of the error.
        #[from]
        source: reqwest::Error,
    },

    #[error("invalid token: {}", source)]
    Header {
        /// The source of the error.
        #[from]
        source: InvalidHeaderValue,
    },

    #[error(transparent)]
    UrlParse {
        /// The source of the error.
        #[from]
        source: url::ParseError,
    },
}
