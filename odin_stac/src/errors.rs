/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinStacError>;

#[derive(Error,Debug)]
pub enum OdinStacError {
    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("config error {0}")]
    ConfigError( #[from] ron::error::SpannedError),

    #[error("invalid ordinate '{0}' in '{1}'")]
    InvalidOrdinate(String,String),

    #[error("invalid number of ordinates in '{0}': {1}")]
    OrdinateCount(String,String),

    #[error("invalid box '{0}': {1}")]
    InvalidBox(String,String),

    /// arc endpoints are identical or antipodal
    #[error("degenerate arc between {0} and {1}")]
    DegenerateArc(String,String),

    #[error("invalid GeoJSON geometry: {0}")]
    InvalidGeometry(String),
}

pub fn invalid_geometry (msg: impl ToString)->OdinStacError {
    OdinStacError::InvalidGeometry(msg.to_string())
}

pub fn invalid_box (input: &str, msg: impl ToString)->OdinStacError {
    OdinStacError::InvalidBox(input.to_string(), msg.to_string())
}

pub fn ordinate_count (input: &str, msg: impl ToString)->OdinStacError {
    OdinStacError::OrdinateCount(input.to_string(), msg.to_string())
}
