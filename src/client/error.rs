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
//! # Client error
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Identity service client error.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The service rejected the request.
    #[error("identity service returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the service.
        message: String,
    },

    /// Transport error.
    #[error("request to the identity service failed: {}", source)]
    Http {
        /// The source of the error.
        #[from]
        source: reqwest::Error,
    },

    #[error("invalid header value: {}", source)]
    InvalidHeader {
        /// The source of the error.
        #[from]
        source: InvalidHeaderValue,
    },

    /// Request URL can not be built.
    #[error("invalid request url: {}", source)]
    UrlParse {
        /// The source of the error.
        #[from]
        source: url::ParseError,
    },
}
